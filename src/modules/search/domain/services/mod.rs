pub mod config;
pub mod field_ranker;
pub mod metrics;
pub mod search_engine;
pub mod similarity_scorer;
pub mod text_normalizer;
pub mod trigram;

// Re-exports for easy access
pub use config::{SearchConfig, SearchConfigBuilder};
pub use field_ranker::rank_record;
pub use metrics::{SearchMetrics, StageTimer};
pub use search_engine::SearchEngine;
pub use similarity_scorer::{PreparedQuery, SimilarityScorer};
pub use text_normalizer::normalize;
pub use trigram::trigram_set;
