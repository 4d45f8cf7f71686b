use serde::{Deserialize, Serialize};

/// Configuration for the similarity scorer and search engine
///
/// Externalizes the scoring weights, bonuses and thresholds. The defaults are
/// the tuned production values; changing any weight is a deliberate behavior
/// change, not a refactor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    // Fuzzy blend weights
    /// Weight for the trigram Dice coefficient (0.0 to 1.0)
    pub dice_weight: f64,

    /// Weight for the trigram Jaccard coefficient (0.0 to 1.0)
    pub jaccard_weight: f64,

    /// Weight for normalized Levenshtein similarity (0.0 to 1.0)
    pub levenshtein_weight: f64,

    // Fuzzy bonuses
    /// Bonus added when the Dice coefficient exceeds `dice_bonus_threshold`
    pub dice_bonus: f64,

    /// Dice coefficient above which `dice_bonus` applies
    pub dice_bonus_threshold: f64,

    /// Bonus added when query length / candidate length exceeds
    /// `length_bonus_threshold`
    pub length_bonus: f64,

    /// Length ratio above which `length_bonus` applies
    pub length_bonus_threshold: f64,

    // Result selection
    /// Minimum score a record must reach to appear in ranked results
    pub min_score: f64,

    /// Normalized query lengths up to this many chars use the literal
    /// substring bypass instead of the scorer
    pub short_query_max_chars: usize,

    /// Scores within this distance of each other count as tied and fall back
    /// to match-kind priority
    pub tie_epsilon: f64,

    // Execution
    /// Catalog size at which the scoring pass switches to rayon
    pub parallel_threshold: usize,
}

impl SearchConfig {
    /// Creates a configuration with the tuned production defaults
    pub fn new() -> Self {
        Self {
            // Fuzzy blend: trigram overlap dominates, edit distance backs it up
            dice_weight: 0.4,
            jaccard_weight: 0.25,
            levenshtein_weight: 0.25,

            dice_bonus: 0.1,
            dice_bonus_threshold: 0.3,
            length_bonus: 0.1,
            length_bonus_threshold: 0.5,

            min_score: 0.15,
            short_query_max_chars: 2,
            tie_epsilon: 0.01,

            parallel_threshold: 200,
        }
    }

    /// Creates a configuration that never parallelizes, for deterministic
    /// stepping through the sequential path
    #[cfg(test)]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::new()
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in [
            ("dice_weight", self.dice_weight),
            ("jaccard_weight", self.jaccard_weight),
            ("levenshtein_weight", self.levenshtein_weight),
            ("dice_bonus", self.dice_bonus),
            ("length_bonus", self.length_bonus),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(format!("{} must be within 0.0..=1.0, got {}", name, weight));
            }
        }

        // The blend weights set the fuzzy baseline; bonuses may push past 1.0
        // because the final score is clamped, but the baseline itself must not
        let weight_sum = self.dice_weight + self.jaccard_weight + self.levenshtein_weight;
        if weight_sum > 1.0 + f64::EPSILON {
            return Err(format!(
                "Fuzzy blend weights must sum to at most 1.0, got {}",
                weight_sum
            ));
        }

        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(format!(
                "min_score must be within 0.0..=1.0, got {}",
                self.min_score
            ));
        }

        if !(0.0..=1.0).contains(&self.dice_bonus_threshold) {
            return Err(format!(
                "dice_bonus_threshold must be within 0.0..=1.0, got {}",
                self.dice_bonus_threshold
            ));
        }

        if self.length_bonus_threshold <= 0.0 {
            return Err(format!(
                "length_bonus_threshold must be positive, got {}",
                self.length_bonus_threshold
            ));
        }

        if self.tie_epsilon <= 0.0 || self.tie_epsilon > 0.5 {
            return Err(format!(
                "tie_epsilon must be within (0.0, 0.5], got {}",
                self.tie_epsilon
            ));
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for SearchConfig to make test and caller setup easier
#[derive(Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::new(),
        }
    }

    pub fn dice_weight(mut self, weight: f64) -> Self {
        self.config.dice_weight = weight;
        self
    }

    pub fn jaccard_weight(mut self, weight: f64) -> Self {
        self.config.jaccard_weight = weight;
        self
    }

    pub fn levenshtein_weight(mut self, weight: f64) -> Self {
        self.config.levenshtein_weight = weight;
        self
    }

    pub fn dice_bonus(mut self, bonus: f64) -> Self {
        self.config.dice_bonus = bonus;
        self
    }

    pub fn length_bonus(mut self, bonus: f64) -> Self {
        self.config.length_bonus = bonus;
        self
    }

    pub fn min_score(mut self, score: f64) -> Self {
        self.config.min_score = score;
        self
    }

    pub fn short_query_max_chars(mut self, chars: usize) -> Self {
        self.config.short_query_max_chars = chars;
        self
    }

    pub fn tie_epsilon(mut self, epsilon: f64) -> Self {
        self.config.tie_epsilon = epsilon;
        self
    }

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    pub fn build(self) -> Result<SearchConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
