use serde::{Deserialize, Serialize};

/// How a candidate matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    /// Normalized query and candidate are identical
    Exact,
    /// Candidate starts with the query
    StartsWith,
    /// Candidate contains the query as a substring
    Includes,
    /// Query words overlap candidate words
    WordMatch,
    /// Blended trigram and edit-distance similarity
    Fuzzy,
}

impl MatchKind {
    /// Tie-break priority; the higher kind wins when scores are effectively
    /// equal
    pub fn priority(self) -> u8 {
        match self {
            MatchKind::Exact => 4,
            MatchKind::StartsWith => 3,
            MatchKind::Includes => 2,
            MatchKind::WordMatch => 1,
            MatchKind::Fuzzy => 0,
        }
    }
}

/// Sub-scores behind a fuzzy match, kept for diagnostics and tie-breaking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzySignals {
    pub dice: f64,
    pub jaccard: f64,
    pub levenshtein: f64,
}

/// Outcome of scoring one candidate string against a query
///
/// `value` is always within [0.0, 1.0]. A degenerate comparison (empty query
/// or candidate) carries no kind and scores 0.0; it is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScore {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MatchKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy: Option<FuzzySignals>,
}

impl SimilarityScore {
    /// Degenerate result for empty inputs
    pub fn none() -> Self {
        Self {
            value: 0.0,
            kind: None,
            fuzzy: None,
        }
    }

    pub fn matched(value: f64, kind: MatchKind) -> Self {
        Self {
            value,
            kind: Some(kind),
            fuzzy: None,
        }
    }

    pub fn fuzzy(value: f64, signals: FuzzySignals) -> Self {
        Self {
            value,
            kind: Some(MatchKind::Fuzzy),
            fuzzy: Some(signals),
        }
    }

    /// Whether the comparison produced any match at all
    pub fn is_match(&self) -> bool {
        self.kind.is_some() && self.value > 0.0
    }

    /// Priority of the match kind, 0 for fuzzy and degenerate results
    pub fn priority(&self) -> u8 {
        self.kind.map(MatchKind::priority).unwrap_or(0)
    }
}
