use std::time::Instant;

use rayon::prelude::*;

use super::config::SearchConfig;
use super::field_ranker::rank_record;
use super::metrics::{SearchMetrics, StageTimer};
use super::similarity_scorer::{substring_score, PreparedQuery, SimilarityScorer};
use super::text_normalizer::normalize;
use crate::modules::search::domain::value_objects::{
    MatchKind, SearchHit, SearchRequest, SimilarityScore,
};
use crate::modules::search::domain::SearchableRecord;
use crate::shared::errors::{AppError, AppResult};

/// Top-level search entry point over an immutable catalog snapshot.
///
/// Very short queries take a literal substring path in input order; anything
/// longer runs the full scoring cascade over every record, drops matches
/// below the threshold and sorts by score with match-kind tie-breaking. The
/// engine holds no state between calls.
pub struct SearchEngine {
    config: SearchConfig,
    scorer: SimilarityScorer,
}

impl SearchEngine {
    pub fn new() -> Self {
        let config = SearchConfig::default();
        Self {
            scorer: SimilarityScorer::with_config(config.clone()),
            config,
        }
    }

    pub fn with_config(config: SearchConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::InvalidConfiguration)?;
        Ok(Self {
            scorer: SimilarityScorer::with_config(config.clone()),
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Search the snapshot and return ranked hits.
    ///
    /// Empty and whitespace-only queries return no hits. Results are only
    /// truncated when the request carries a limit.
    pub fn search<'a, R>(&self, request: &SearchRequest, records: &'a [R]) -> Vec<SearchHit<'a, R>>
    where
        R: SearchableRecord + Sync,
    {
        self.search_with_metrics(request, records).0
    }

    /// Same as `search`, additionally returning the timing and count metrics
    /// for this invocation
    pub fn search_with_metrics<'a, R>(
        &self,
        request: &SearchRequest,
        records: &'a [R],
    ) -> (Vec<SearchHit<'a, R>>, SearchMetrics)
    where
        R: SearchableRecord + Sync,
    {
        let started = Instant::now();
        let mut metrics = SearchMetrics::new();
        metrics.input_count = records.len();

        if request.query.trim().is_empty() {
            log::debug!("ENGINE: empty query, returning no results");
            metrics.total_duration = started.elapsed();
            return (Vec::new(), metrics);
        }

        let prepared = self.scorer.prepare(&request.query);
        if prepared.is_empty() {
            log::debug!(
                "ENGINE: query '{}' normalized to nothing, returning no results",
                request.query
            );
            metrics.total_duration = started.elapsed();
            return (Vec::new(), metrics);
        }

        let mut hits = if prepared.char_len() <= self.config.short_query_max_chars {
            metrics.used_bypass = true;
            let timer = StageTimer::start("bypass");
            let hits = self.substring_bypass(&prepared, records);
            timer.stop(&mut metrics);
            metrics.matched_count = hits.len();
            hits
        } else {
            let threshold = request.min_score.unwrap_or(self.config.min_score);

            let timer = StageTimer::start("score");
            let mut ranked = self.rank_all(&prepared, records);
            timer.stop(&mut metrics);
            metrics.matched_count = ranked.len();

            let before = ranked.len();
            ranked.retain(|hit| hit.similarity.value >= threshold);
            metrics.filtered_count = before - ranked.len();

            let timer = StageTimer::start("sort");
            self.sort_hits(&mut ranked);
            timer.stop(&mut metrics);
            ranked
        };

        if let Some(limit) = request.limit {
            hits.truncate(limit);
        }

        metrics.output_count = hits.len();
        metrics.total_duration = started.elapsed();

        log::debug!(
            "ENGINE: query '{}' -> {} hits from {} records",
            request.query,
            metrics.output_count,
            metrics.input_count
        );
        log::trace!("{}", metrics.report());

        (hits, metrics)
    }

    /// Score every record, in parallel once the snapshot is large enough for
    /// the fan-out to pay off. Both paths produce hits in input order.
    fn rank_all<'a, R>(&self, query: &PreparedQuery, records: &'a [R]) -> Vec<SearchHit<'a, R>>
    where
        R: SearchableRecord + Sync,
    {
        if records.len() >= self.config.parallel_threshold {
            records
                .par_iter()
                .filter_map(|record| rank_record(&self.scorer, query, record))
                .collect()
        } else {
            records
                .iter()
                .filter_map(|record| rank_record(&self.scorer, query, record))
                .collect()
        }
    }

    /// Literal substring scan for short queries, where trigram sets are too
    /// small for the cascade to be meaningful. Keeps input order; each hit
    /// carries the position-weighted substring score of its first matching
    /// field.
    fn substring_bypass<'a, R>(
        &self,
        query: &PreparedQuery,
        records: &'a [R],
    ) -> Vec<SearchHit<'a, R>>
    where
        R: SearchableRecord,
    {
        records
            .iter()
            .filter_map(|record| {
                for field in record.searchable_fields() {
                    let field_normalized = normalize(field);
                    if let Some(byte_index) = field_normalized.find(query.normalized()) {
                        let char_index = field_normalized[..byte_index].chars().count();
                        let char_len = field_normalized.chars().count();
                        let similarity = SimilarityScore::matched(
                            substring_score(char_index, char_len),
                            MatchKind::Includes,
                        );
                        return Some(SearchHit::new(record, similarity));
                    }
                }
                None
            })
            .collect()
    }

    /// Descending sort on epsilon-bucketed scores. Bucketing keeps the
    /// comparator a total order; scores in the same bucket fall back to
    /// match-kind priority, and the stable sort preserves input order for
    /// full ties.
    fn sort_hits<R>(&self, hits: &mut [SearchHit<R>]) {
        let epsilon = self.config.tie_epsilon;
        hits.sort_by(|a, b| {
            let a_bucket = (a.similarity.value / epsilon).round() as i64;
            let b_bucket = (b.similarity.value / epsilon).round() as i64;
            b_bucket
                .cmp(&a_bucket)
                .then_with(|| b.similarity.priority().cmp(&a.similarity.priority()))
        });
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
