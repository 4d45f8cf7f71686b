use std::collections::HashSet;

use strsim::normalized_levenshtein;

use super::config::SearchConfig;
use super::text_normalizer::normalize;
use super::trigram::trigram_set;
use crate::modules::search::domain::value_objects::{FuzzySignals, MatchKind, SimilarityScore};

/// Score for a normalized-equality match
const EXACT_SCORE: f64 = 1.0;

/// Score for a candidate that starts with the query
const PREFIX_SCORE: f64 = 0.95;

/// Base score for substring containment, before position scaling
const SUBSTRING_BASE: f64 = 0.85;

/// Fraction of the substring score a match at the very end of the candidate
/// loses compared to a match at the start
const SUBSTRING_POSITION_PENALTY: f64 = 0.2;

/// Word-overlap scores grow from this floor toward the substring base
const WORD_MATCH_FLOOR: f64 = 0.65;
const WORD_MATCH_RANGE: f64 = 0.2;

/// Weight for a query word found verbatim among candidate words
const WORD_EXACT_WEIGHT: f64 = 1.0;

/// Weight when a candidate word starts with the query word
const WORD_PREFIX_WEIGHT: f64 = 0.8;
const WORD_PREFIX_MIN_CHARS: usize = 3;

/// Weight when a candidate word merely contains the query word
const WORD_PARTIAL_WEIGHT: f64 = 0.5;
const WORD_PARTIAL_MIN_CHARS: usize = 4;

/// Position-weighted substring score; matches nearer the candidate's start
/// rank higher. `candidate_chars` must be non-zero.
pub(crate) fn substring_score(match_index: usize, candidate_chars: usize) -> f64 {
    let position = match_index as f64 / candidate_chars as f64;
    SUBSTRING_BASE * (1.0 - position * SUBSTRING_POSITION_PENALTY)
}

/// The query side of one search, normalized and trigrammed once so that
/// scoring a whole catalog does not redo the work per candidate
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    normalized: String,
    char_len: usize,
    words: Vec<String>,
    trigrams: HashSet<String>,
}

impl PreparedQuery {
    fn new(query: &str) -> Self {
        let normalized = normalize(query);
        let char_len = normalized.chars().count();
        let words = normalized.split_whitespace().map(str::to_string).collect();
        let trigrams = trigram_set(&normalized);
        Self {
            normalized,
            char_len,
            words,
            trigrams,
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Scores a candidate string against a query with a priority cascade:
/// exact match, then prefix, then positional substring, then word overlap,
/// then a blended trigram/edit-distance fuzzy fallback. The first rule that
/// matches decides the result.
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    config: SearchConfig,
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Normalize and trigram the query once for reuse across many candidates
    pub fn prepare(&self, query: &str) -> PreparedQuery {
        PreparedQuery::new(query)
    }

    /// Score a single pair. Empty query or candidate (after normalization)
    /// yields the degenerate zero score, never an error.
    pub fn score(&self, query: &str, candidate: &str) -> SimilarityScore {
        self.score_prepared(&PreparedQuery::new(query), candidate)
    }

    /// Score a candidate against an already-prepared query
    pub fn score_prepared(&self, query: &PreparedQuery, candidate: &str) -> SimilarityScore {
        let candidate_normalized = normalize(candidate);
        if query.is_empty() || candidate_normalized.is_empty() {
            return SimilarityScore::none();
        }

        if query.normalized == candidate_normalized {
            return SimilarityScore::matched(EXACT_SCORE, MatchKind::Exact);
        }

        if candidate_normalized.starts_with(&query.normalized) {
            return SimilarityScore::matched(PREFIX_SCORE, MatchKind::StartsWith);
        }

        let candidate_chars = candidate_normalized.chars().count();

        if let Some(byte_index) = candidate_normalized.find(&query.normalized) {
            let char_index = candidate_normalized[..byte_index].chars().count();
            return SimilarityScore::matched(
                substring_score(char_index, candidate_chars),
                MatchKind::Includes,
            );
        }

        if let Some(value) = self.word_overlap_score(query, &candidate_normalized) {
            return SimilarityScore::matched(value, MatchKind::WordMatch);
        }

        self.fuzzy_score(query, &candidate_normalized, candidate_chars)
    }

    /// Word-level overlap: each query word contributes its best match weight
    /// against the candidate's words. Prefix and partial matches only count
    /// for query words long enough to be distinctive.
    fn word_overlap_score(&self, query: &PreparedQuery, candidate: &str) -> Option<f64> {
        let candidate_words: Vec<&str> = candidate.split_whitespace().collect();

        let mut matched_weight = 0.0;
        let mut partial_weight = 0.0;

        for word in &query.words {
            let word = word.as_str();
            let word_chars = word.chars().count();

            if candidate_words.iter().any(|cw| *cw == word) {
                matched_weight += WORD_EXACT_WEIGHT;
            } else if word_chars >= WORD_PREFIX_MIN_CHARS
                && candidate_words.iter().any(|cw| cw.starts_with(word))
            {
                matched_weight += WORD_PREFIX_WEIGHT;
            } else if word_chars >= WORD_PARTIAL_MIN_CHARS
                && candidate_words.iter().any(|cw| cw.contains(word))
            {
                partial_weight += WORD_PARTIAL_WEIGHT;
            }
        }

        let total_weight = matched_weight + partial_weight;
        if total_weight > 0.0 {
            let ratio = total_weight / query.words.len() as f64;
            Some((WORD_MATCH_FLOOR + ratio * WORD_MATCH_RANGE).min(SUBSTRING_BASE))
        } else {
            None
        }
    }

    /// Blended fuzzy fallback: trigram Dice and Jaccard overlap plus
    /// normalized Levenshtein, with bonuses for strong trigram agreement and
    /// for queries covering most of the candidate's length.
    fn fuzzy_score(
        &self,
        query: &PreparedQuery,
        candidate: &str,
        candidate_chars: usize,
    ) -> SimilarityScore {
        let config = &self.config;
        let candidate_trigrams = trigram_set(candidate);

        let intersection = query.trigrams.intersection(&candidate_trigrams).count() as f64;
        let set_sizes = (query.trigrams.len() + candidate_trigrams.len()) as f64;
        let union = query.trigrams.union(&candidate_trigrams).count() as f64;

        let dice = if set_sizes > 0.0 {
            2.0 * intersection / set_sizes
        } else {
            0.0
        };
        let jaccard = if union > 0.0 { intersection / union } else { 0.0 };
        let levenshtein = normalized_levenshtein(&query.normalized, candidate);

        let mut value = dice * config.dice_weight
            + jaccard * config.jaccard_weight
            + levenshtein * config.levenshtein_weight;

        if dice > config.dice_bonus_threshold {
            value += config.dice_bonus;
        }

        let length_ratio = query.char_len as f64 / candidate_chars as f64;
        if length_ratio > config.length_bonus_threshold {
            value += config.length_bonus;
        }

        let value = value.min(1.0);

        log::trace!(
            "SCORER: '{}' vs '{}' -> dice={:.3}, jaccard={:.3}, lev={:.3}, score={:.3}",
            query.normalized,
            candidate,
            dice,
            jaccard,
            levenshtein,
            value
        );

        SimilarityScore::fuzzy(
            value,
            FuzzySignals {
                dice,
                jaccard,
                levenshtein,
            },
        )
    }
}
