// Shared kernel used by the catalog and search modules

pub mod errors; // Shared error types

pub use errors::{AppError, AppResult};
