pub mod domain;

// Re-exports for easy external access
pub use domain::entities::CatalogRecord;
pub use domain::services::{
    CatalogDeduplicator, CatalogFacets, TitleService, TitleScript, SEASON_MARKER_PATTERNS,
};
pub use domain::value_objects::RecordTitle;
