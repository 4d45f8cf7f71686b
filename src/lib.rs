pub mod modules;
pub mod shared;

pub use modules::catalog::{
    CatalogDeduplicator, CatalogFacets, CatalogRecord, RecordTitle, TitleScript, TitleService,
};
pub use modules::search::{
    MatchKind, SearchConfig, SearchConfigBuilder, SearchEngine, SearchHit, SearchMetrics,
    SearchRequest, SearchableRecord, SimilarityScore, SimilarityScorer,
};
pub use shared::{AppError, AppResult};
