//! Execution service

use crate::catalog::FixtureProvider;
use crate::error::AppResult;
use crate::judge::{ExecutionGateway, languages};
use crate::models::{BatchReport, ExecutionResult};

/// Execution service for business logic
pub struct ExecutionService;

impl ExecutionService {
    /// Run a single submission through the gateway
    pub async fn submit(
        gateway: &ExecutionGateway,
        language: &str,
        source_code: &str,
        stdin: &str,
    ) -> AppResult<ExecutionResult> {
        if !languages::is_supported(language) {
            tracing::warn!(language, "Unknown language tag, using fallback environment");
        }

        gateway.execute(language, source_code, stdin).await
    }

    /// Run a submission against the fixture battery and score it
    pub async fn run_battery(
        gateway: &ExecutionGateway,
        fixtures: &dyn FixtureProvider,
        language: &str,
        source_code: &str,
    ) -> BatchReport {
        if !languages::is_supported(language) {
            tracing::warn!(language, "Unknown language tag, using fallback environment");
        }

        gateway.run_fixtures(language, source_code, fixtures.fixtures()).await
    }
}
