pub mod deduplicator;
pub mod facets;
pub mod title_service;

pub use deduplicator::CatalogDeduplicator;
pub use facets::CatalogFacets;
pub use title_service::{TitleService, TitleScript, SEASON_MARKER_PATTERNS};
