pub mod search_hit;
pub mod search_request;
pub mod similarity_score;

pub use search_hit::SearchHit;
pub use search_request::SearchRequest;
pub use similarity_score::{FuzzySignals, MatchKind, SimilarityScore};
