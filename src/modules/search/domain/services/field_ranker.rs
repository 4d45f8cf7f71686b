use super::similarity_scorer::{PreparedQuery, SimilarityScorer};
use crate::modules::search::domain::value_objects::{SearchHit, SimilarityScore};
use crate::modules::search::domain::SearchableRecord;

/// Scores every searchable field of a record and keeps the best field's
/// result.
///
/// Empty and whitespace-only fields are skipped. Equal scores keep the
/// earliest field, so implementors control precedence through field order.
/// Returns `None` when no field yields a positive score; such records simply
/// don't appear in results.
pub fn rank_record<'a, R: SearchableRecord>(
    scorer: &SimilarityScorer,
    query: &PreparedQuery,
    record: &'a R,
) -> Option<SearchHit<'a, R>> {
    let mut best: Option<SimilarityScore> = None;

    for field in record.searchable_fields() {
        if field.trim().is_empty() {
            continue;
        }

        let similarity = scorer.score_prepared(query, field);
        if !similarity.is_match() {
            continue;
        }

        match &best {
            Some(current) if similarity.value <= current.value => {}
            _ => best = Some(similarity),
        }
    }

    best.map(|similarity| SearchHit::new(record, similarity))
}
