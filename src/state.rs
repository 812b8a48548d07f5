//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::catalog::{FixtureProvider, ProblemCatalog};
use crate::config::Config;
use crate::judge::{ExecutionGateway, JudgeClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Gateway to the remote execution service
    pub gateway: ExecutionGateway,

    /// Problem catalog provider
    pub problems: Arc<dyn ProblemCatalog>,

    /// Fixture battery provider for batch runs
    pub fixtures: Arc<dyn FixtureProvider>,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        judge: Arc<dyn JudgeClient>,
        problems: Arc<dyn ProblemCatalog>,
        fixtures: Arc<dyn FixtureProvider>,
        config: Config,
    ) -> Self {
        let gateway = ExecutionGateway::new(judge, &config.judge);

        Self {
            inner: Arc::new(AppStateInner {
                gateway,
                problems,
                fixtures,
            }),
        }
    }

    /// Get a reference to the execution gateway
    pub fn gateway(&self) -> &ExecutionGateway {
        &self.inner.gateway
    }

    /// Get a reference to the problem catalog
    pub fn problems(&self) -> &dyn ProblemCatalog {
        self.inner.problems.as_ref()
    }

    /// Get a reference to the fixture provider
    pub fn fixtures(&self) -> &dyn FixtureProvider {
        self.inner.fixtures.as_ref()
    }
}
