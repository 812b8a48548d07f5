//! Execution request DTOs

use serde::Deserialize;
use validator::Validate;

/// Single-submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    /// Source code to execute
    #[validate(length(min = 1, max = 1048576))] // 1MB max
    pub source_code: String,

    /// Language tag; unknown tags run on the fallback environment
    #[validate(length(min = 1, max = 20))]
    pub language: String,

    /// Standard input for the run
    #[validate(length(max = 65536))] // 64KB max
    pub stdin: Option<String>,
}

/// Batch fixture-evaluation request
#[derive(Debug, Deserialize, Validate)]
pub struct RunRequest {
    /// Source code to evaluate against the fixture battery
    #[validate(length(min = 1, max = 1048576))] // 1MB max
    pub code: String,

    /// Language tag; unknown tags run on the fallback environment
    #[validate(length(min = 1, max = 20))]
    pub language: String,
}
