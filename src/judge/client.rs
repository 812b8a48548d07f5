//! HTTP client for the remote judge API

use async_trait::async_trait;

use crate::config::JudgeConfig;
use crate::error::{AppError, AppResult};

use super::types::{JudgeResponse, JudgeSubmission, SubmissionToken};

/// Transport to the remote execution service
///
/// The gateway only depends on this trait so the judge can be mocked in
/// tests and swapped for a self-hosted deployment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JudgeClient: Send + Sync {
    /// Submit code for execution and receive a correlation token
    async fn create_submission(&self, submission: &JudgeSubmission) -> AppResult<SubmissionToken>;

    /// Fetch the current state of a submission by token
    async fn get_submission(&self, token: &str) -> AppResult<JudgeResponse>;
}

/// Judge0 CE client (RapidAPI gateway)
pub struct Judge0Client {
    http: reqwest::Client,
    config: JudgeConfig,
}

impl Judge0Client {
    /// Create a client with the configured per-request timeout
    pub fn new(config: JudgeConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    fn submissions_url(&self) -> String {
        format!(
            "{}/submissions?base64_encoded=true&wait=false",
            self.config.api_url
        )
    }

    fn status_url(&self, token: &str) -> String {
        format!(
            "{}/submissions/{}?base64_encoded=true",
            self.config.api_url, token
        )
    }
}

#[async_trait]
impl JudgeClient for Judge0Client {
    async fn create_submission(&self, submission: &JudgeSubmission) -> AppResult<SubmissionToken> {
        tracing::debug!(
            language_id = submission.language_id,
            "Creating judge submission"
        );

        let token: SubmissionToken = self
            .http
            .post(self.submissions_url())
            .header("X-RapidAPI-Key", &self.config.api_key)
            .header("X-RapidAPI-Host", &self.config.api_host)
            .json(submission)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(token = %token.token, "Judge accepted submission");

        Ok(token)
    }

    async fn get_submission(&self, token: &str) -> AppResult<JudgeResponse> {
        let response: JudgeResponse = self
            .http
            .get(self.status_url(token))
            .header("X-RapidAPI-Key", &self.config.api_key)
            .header("X-RapidAPI-Host", &self.config.api_host)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response)
    }
}
