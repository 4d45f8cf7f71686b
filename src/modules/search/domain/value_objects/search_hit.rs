use serde::Serialize;

use super::similarity_score::SimilarityScore;

/// One ranked result: a borrowed catalog record plus how it matched
///
/// Hits borrow from the snapshot passed to the engine, so the caller decides
/// whether to clone records out or map hits to identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a, R> {
    pub record: &'a R,
    pub similarity: SimilarityScore,
}

impl<'a, R> SearchHit<'a, R> {
    pub fn new(record: &'a R, similarity: SimilarityScore) -> Self {
        Self { record, similarity }
    }

    pub fn score(&self) -> f64 {
        self.similarity.value
    }
}
