//! Execution gateway - Orchestrates submit-and-poll against the remote judge

use std::sync::Arc;
use std::time::Duration;

use crate::config::JudgeConfig;
use crate::error::{AppError, AppResult};
use crate::models::{BatchReport, ExecutionResult, FixtureOutcome, TestCase};

use super::client::JudgeClient;
use super::languages::judge_language_id;
use super::types::{JudgeResponse, JudgeSubmission};

/// Gateway that turns a submission into a normalized terminal result
///
/// One poll loop per submission, fixtures strictly sequential in batch
/// mode. The gateway holds no per-request state.
pub struct ExecutionGateway {
    client: Arc<dyn JudgeClient>,
    poll_interval: Duration,
    poll_max_attempts: u32,
}

impl ExecutionGateway {
    /// Create a new gateway over a judge client
    pub fn new(client: Arc<dyn JudgeClient>, config: &JudgeConfig) -> Self {
        Self {
            client,
            poll_interval: config.poll_interval(),
            poll_max_attempts: config.poll_max_attempts,
        }
    }

    /// Execute a single submission and wait for its terminal result
    pub async fn execute(
        &self,
        language: &str,
        source_code: &str,
        stdin: &str,
    ) -> AppResult<ExecutionResult> {
        let language_id = judge_language_id(language);
        tracing::info!(language, language_id, "Submitting code for execution");

        let submission = JudgeSubmission::encode(language_id, source_code, stdin);
        let token = self.client.create_submission(&submission).await?;

        let response = self.poll_until_terminal(&token.token).await?;
        response.into_execution_result()
    }

    /// Poll the judge until the submission leaves the queue
    ///
    /// Exhausting the attempt budget without seeing a terminal status is
    /// reported as [`AppError::ExecutionTimedOut`], never as the
    /// last-observed intermediate status.
    async fn poll_until_terminal(&self, token: &str) -> AppResult<JudgeResponse> {
        for attempt in 1..=self.poll_max_attempts {
            let response = self.client.get_submission(token).await?;

            if response.status.is_terminal() {
                tracing::debug!(
                    token,
                    attempt,
                    status = %response.status.description,
                    "Judge reached terminal status"
                );
                return Ok(response);
            }

            tracing::debug!(
                token,
                attempt,
                status = %response.status.description,
                "Submission still pending"
            );

            if attempt < self.poll_max_attempts {
                tokio::time::sleep(self.poll_interval).await;
            }
        }

        tracing::warn!(token, attempts = self.poll_max_attempts, "Poll budget exhausted");
        Err(AppError::ExecutionTimedOut)
    }

    /// Run a submission against a fixture battery and aggregate a score
    ///
    /// Fixtures are evaluated one after another; a fixture whose execution
    /// fails is recorded as failed and the battery continues.
    pub async fn run_fixtures(
        &self,
        language: &str,
        source_code: &str,
        fixtures: &[TestCase],
    ) -> BatchReport {
        let mut outcomes = Vec::with_capacity(fixtures.len());

        for fixture in fixtures {
            let outcome = match self.execute(language, source_code, &fixture.input).await {
                Ok(result) => Self::judge_fixture(fixture, result),
                Err(e) => {
                    tracing::warn!(input = %fixture.input, error = %e, "Fixture execution failed");
                    FixtureOutcome {
                        input: fixture.input.clone(),
                        expected: fixture.expected_output.clone(),
                        output: None,
                        passed: false,
                        time: None,
                        error: Some("Execution failed".to_string()),
                    }
                }
            };
            outcomes.push(outcome);
        }

        BatchReport::from_outcomes(outcomes)
    }

    /// Compare one fixture's output against its expectation
    ///
    /// Trailing whitespace is ignored for the comparison but preserved in
    /// the reported output.
    fn judge_fixture(fixture: &TestCase, result: ExecutionResult) -> FixtureOutcome {
        let passed = result
            .output
            .as_deref()
            .map(|o| o.trim() == fixture.expected_output)
            .unwrap_or(false);

        FixtureOutcome {
            input: fixture.input.clone(),
            expected: fixture.expected_output.clone(),
            output: result.output,
            passed,
            time: result.time,
            error: None,
        }
    }
}
