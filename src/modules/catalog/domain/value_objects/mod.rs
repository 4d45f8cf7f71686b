pub mod record_title;

pub use record_title::RecordTitle;
