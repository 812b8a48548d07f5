//! Execution response DTOs

use serde::Serialize;

use crate::models::{BatchReport, ExecutionResult};

/// Single-submission response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub result: ExecutionResult,
}

/// Batch run response
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: BatchReport,
}
