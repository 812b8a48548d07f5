//! Execution result models

use serde::Serialize;

/// Normalized terminal result of a single code execution
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    /// Human-readable status description, e.g. "Accepted"
    pub status: String,
    /// Best-available output: stdout, else stderr, else compile diagnostics
    pub output: Option<String>,
    /// Wall-clock execution time in seconds
    pub time: Option<f64>,
    /// Peak memory usage in kilobytes
    pub memory: Option<f64>,
}

/// Outcome of one fixture in a batch run
#[derive(Debug, Clone, Serialize)]
pub struct FixtureOutcome {
    pub input: String,
    pub expected: String,
    pub output: Option<String>,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate report for a batch run over all fixtures
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub test_results: Vec<FixtureOutcome>,
    pub score: u32,
    pub passed: u32,
    pub total: u32,
}

impl BatchReport {
    /// Aggregate per-fixture outcomes into a scored report
    pub fn from_outcomes(outcomes: Vec<FixtureOutcome>) -> Self {
        let total = outcomes.len() as u32;
        let passed = outcomes.iter().filter(|o| o.passed).count() as u32;
        let score = if total == 0 {
            0
        } else {
            (f64::from(passed) / f64::from(total) * 100.0).round() as u32
        };

        Self {
            test_results: outcomes,
            score,
            passed,
            total,
        }
    }
}
