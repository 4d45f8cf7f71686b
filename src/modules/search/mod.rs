pub mod domain;

// Re-exports for easy external access
pub use domain::services::{
    normalize, rank_record, trigram_set, SearchConfig, SearchConfigBuilder, SearchEngine,
    SearchMetrics, SimilarityScorer,
};
pub use domain::value_objects::{
    FuzzySignals, MatchKind, SearchHit, SearchRequest, SimilarityScore,
};
pub use domain::SearchableRecord;
