//! HTTP client for the Code Arena gateway
//!
//! Every run bumps a request generation; callers render a response only
//! while its generation is still current, so a slow earlier response can
//! never overwrite the result of a newer run.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Result, anyhow};
use serde::Deserialize;

/// Normalized execution result returned by the gateway
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionResult {
    pub status: String,
    pub output: Option<String>,
    pub time: Option<f64>,
    pub memory: Option<f64>,
}

/// Outcome of one fixture in a batch run
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureOutcome {
    pub input: String,
    pub expected: String,
    pub output: Option<String>,
    pub passed: bool,
    pub time: Option<f64>,
    pub error: Option<String>,
}

/// Aggregate batch report
#[derive(Debug, Clone, Deserialize)]
pub struct BatchReport {
    pub test_results: Vec<FixtureOutcome>,
    pub score: u32,
    pub passed: u32,
    pub total: u32,
}

/// Catalog problem summary
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    pub id: u32,
    pub title: String,
    pub difficulty: String,
    pub description: String,
    pub sample_input: String,
    pub sample_output: String,
    pub acceptance: Option<String>,
}

/// Problem detail with starter templates keyed by language
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemDetail {
    pub problem: Problem,
    #[serde(default)]
    pub templates: std::collections::BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    message: String,
}

/// Gateway response envelope; `success: false` carries an error body
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(flatten)]
    data: Option<T>,
    error: Option<ErrorDetails>,
}

/// Handle for one run, used to detect stale responses
#[derive(Debug, Clone, Copy)]
pub struct RunHandle {
    id: u64,
}

/// Client for the gateway's JSON API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    generation: AtomicU64,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new run, superseding any outstanding one
    pub fn begin_run(&self) -> RunHandle {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RunHandle { id }
    }

    /// Whether a run is still the latest one started
    pub fn is_current(&self, run: &RunHandle) -> bool {
        self.generation.load(Ordering::SeqCst) == run.id
    }

    /// Execute a single submission
    pub async fn submit(
        &self,
        source_code: &str,
        language: &str,
        stdin: &str,
    ) -> Result<ExecutionResult> {
        #[derive(Deserialize)]
        struct Body {
            result: ExecutionResult,
        }

        let envelope: Envelope<Body> = self
            .post_json(
                "/api/submit",
                &serde_json::json!({
                    "source_code": source_code,
                    "language": language,
                    "stdin": stdin,
                }),
            )
            .await?;

        Ok(unwrap_envelope(envelope)?.result)
    }

    /// Evaluate a submission against the fixture battery
    pub async fn run(&self, code: &str, language: &str) -> Result<BatchReport> {
        let envelope: Envelope<BatchReport> = self
            .post_json(
                "/api/run",
                &serde_json::json!({
                    "code": code,
                    "language": language,
                }),
            )
            .await?;

        unwrap_envelope(envelope)
    }

    /// Fetch the problem catalog
    pub async fn problems(&self) -> Result<Vec<Problem>> {
        #[derive(Deserialize)]
        struct Body {
            problems: Vec<Problem>,
        }

        let envelope: Envelope<Body> = self.get_json("/api/problems").await?;
        Ok(unwrap_envelope(envelope)?.problems)
    }

    /// Fetch one problem with its starter templates
    pub async fn problem(&self, id: u32) -> Result<ProblemDetail> {
        let envelope: Envelope<ProblemDetail> =
            self.get_json(&format!("/api/problems/{id}")).await?;
        unwrap_envelope(envelope)
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<Envelope<T>> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Ok(response.json().await?)
    }
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T> {
    if envelope.success {
        envelope
            .data
            .ok_or_else(|| anyhow!("Gateway returned an empty success response"))
    } else {
        let message = envelope
            .error
            .map(|e| e.message)
            .unwrap_or_else(|| "Unknown gateway error".to_string());
        Err(anyhow!(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_run_supersedes_older_one() {
        let client = ApiClient::new("http://localhost:3000");

        let first = client.begin_run();
        assert!(client.is_current(&first));

        let second = client.begin_run();
        assert!(!client.is_current(&first));
        assert!(client.is_current(&second));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_error_envelope_unwraps_to_message() {
        let envelope: Envelope<BatchReport> = serde_json::from_str(
            r#"{"success":false,"error":{"code":"EXECUTION_TIMED_OUT","message":"Execution timed out waiting for the judge"}}"#,
        )
        .unwrap();

        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_success_envelope_unwraps_payload() {
        let envelope: Envelope<BatchReport> = serde_json::from_str(
            r#"{"success":true,"test_results":[],"score":0,"passed":0,"total":0}"#,
        )
        .unwrap();

        let report = unwrap_envelope(envelope).unwrap();
        assert_eq!(report.total, 0);
    }
}
