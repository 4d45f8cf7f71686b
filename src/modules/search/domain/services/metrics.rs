use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Metrics for one search invocation
///
/// Observational only; nothing in here feeds back into ranking. The engine
/// logs `report()` at debug level and can hand the struct to callers that
/// want their own dashboards.
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    /// Total duration of the search call
    pub total_duration: Duration,

    /// Duration of each stage by name
    pub stage_durations: HashMap<String, Duration>,

    /// Number of records in the snapshot
    pub input_count: usize,

    /// Number of records that produced a positive score
    pub matched_count: usize,

    /// Number of matches discarded by the score threshold
    pub filtered_count: usize,

    /// Number of hits returned to the caller
    pub output_count: usize,

    /// Whether the short-query bypass handled this search
    pub used_bypass: bool,
}

impl SearchMetrics {
    /// Create empty metrics
    pub fn new() -> Self {
        Self {
            total_duration: Duration::ZERO,
            stage_durations: HashMap::new(),
            input_count: 0,
            matched_count: 0,
            filtered_count: 0,
            output_count: 0,
            used_bypass: false,
        }
    }

    /// Percentage of snapshot records that matched at all
    pub fn match_rate(&self) -> f32 {
        if self.input_count == 0 {
            return 0.0;
        }

        (self.matched_count as f32 / self.input_count as f32) * 100.0
    }

    /// Percentage of matches the threshold discarded
    pub fn filter_rate(&self) -> f32 {
        if self.matched_count == 0 {
            return 0.0;
        }

        (self.filtered_count as f32 / self.matched_count as f32) * 100.0
    }

    /// Records scored per second
    pub fn throughput(&self) -> f32 {
        if self.total_duration.is_zero() {
            return 0.0;
        }

        self.input_count as f32 / self.total_duration.as_secs_f32()
    }

    /// Generate a human-readable report
    pub fn report(&self) -> String {
        let mut lines = vec![
            "=== Search Metrics ===".to_string(),
            format!("Total Duration: {:.2}ms", self.total_duration.as_millis()),
            format!("Path: {}", if self.used_bypass { "bypass" } else { "ranked" }),
            format!("Input Count: {}", self.input_count),
            format!("Matched Count: {} ({:.1}%)", self.matched_count, self.match_rate()),
            format!(
                "Filtered Count: {} ({:.1}%)",
                self.filtered_count,
                self.filter_rate()
            ),
            format!("Output Count: {}", self.output_count),
            format!("Throughput: {:.1} records/sec", self.throughput()),
            "Stage Durations:".to_string(),
        ];

        // Sort stages by duration (slowest first)
        let mut stages: Vec<_> = self.stage_durations.iter().collect();
        stages.sort_by(|a, b| b.1.cmp(a.1));

        for (stage, duration) in stages {
            lines.push(format!("  {}: {:.2}ms", stage, duration.as_millis()));
        }

        lines.join("\n")
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper for timing search stages
pub struct StageTimer {
    stage_name: String,
    start: Instant,
}

impl StageTimer {
    /// Start timing a stage
    pub fn start(stage_name: impl Into<String>) -> Self {
        Self {
            stage_name: stage_name.into(),
            start: Instant::now(),
        }
    }

    /// Stop timing and record the duration in the metrics
    pub fn stop(self, metrics: &mut SearchMetrics) -> Duration {
        let duration = self.start.elapsed();
        metrics.stage_durations.insert(self.stage_name, duration);
        duration
    }

    /// Elapsed time so far without stopping the timer
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
