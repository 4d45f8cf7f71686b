pub mod services;
pub mod value_objects;

/// Source of the text fields a record can be matched on.
///
/// The engine never reaches into record internals; implementors decide which
/// fields are searchable and in what order. Empty fields are skipped by the
/// ranker, so implementors may return them as-is.
pub trait SearchableRecord {
    fn searchable_fields(&self) -> Vec<&str>;
}
