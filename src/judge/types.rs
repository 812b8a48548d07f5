//! Wire types for the remote judge API
//!
//! Source, stdin and all output fields travel base64-encoded
//! (`base64_encoded=true` on every call).

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::constants::judge_statuses;
use crate::error::{AppError, AppResult};
use crate::models::ExecutionResult;

/// Submission payload sent to the judge
#[derive(Debug, Clone, Serialize)]
pub struct JudgeSubmission {
    pub language_id: i64,
    pub source_code: String,
    pub stdin: String,
}

impl JudgeSubmission {
    /// Build a payload, base64-encoding source and stdin for transport
    pub fn encode(language_id: i64, source_code: &str, stdin: &str) -> Self {
        Self {
            language_id,
            source_code: BASE64.encode(source_code),
            stdin: BASE64.encode(stdin),
        }
    }
}

/// Correlation token returned by the submission-creation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionToken {
    pub token: String,
}

/// Status block in a judge response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeStatus {
    pub id: i64,
    pub description: String,
}

impl JudgeStatus {
    /// A status is terminal once it is past "In Queue" and "Processing"
    pub fn is_terminal(&self) -> bool {
        self.id != judge_statuses::IN_QUEUE && self.id != judge_statuses::PROCESSING
    }
}

/// Full submission state returned by the status endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct JudgeResponse {
    pub status: JudgeStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    /// Execution time in seconds, as a decimal string
    pub time: Option<String>,
    /// Peak memory in kilobytes
    pub memory: Option<f64>,
}

impl JudgeResponse {
    /// Normalize a terminal judge response into an [`ExecutionResult`]
    ///
    /// Output preference: stdout, else stderr, else compile diagnostics.
    pub fn into_execution_result(self) -> AppResult<ExecutionResult> {
        let stdout = decode_field(self.stdout.as_deref())?;
        let stderr = decode_field(self.stderr.as_deref())?;
        let compile_output = decode_field(self.compile_output.as_deref())?;

        let output = stdout.or(stderr).or(compile_output);
        let time = self.time.as_deref().and_then(|t| t.parse::<f64>().ok());

        Ok(ExecutionResult {
            status: self.status.description,
            output,
            time,
            memory: self.memory,
        })
    }
}

/// Decode an optional base64 text field from a judge response
fn decode_field(field: Option<&str>) -> AppResult<Option<String>> {
    match field {
        None => Ok(None),
        Some(encoded) => {
            // The judge wraps long base64 payloads with newlines
            let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
            if cleaned.is_empty() {
                return Ok(None);
            }
            let bytes = BASE64.decode(cleaned).map_err(|e| {
                AppError::JudgeRejected(format!("Invalid base64 in judge response: {e}"))
            })?;
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        }
    }
}
