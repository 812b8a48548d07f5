//! Problem service

use crate::catalog::ProblemCatalog;
use crate::error::{AppError, AppResult};
use crate::models::Problem;

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List the full problem catalog
    pub fn list_problems(catalog: &dyn ProblemCatalog) -> Vec<Problem> {
        catalog.list().to_vec()
    }

    /// Fetch one problem by id
    pub fn get_problem(catalog: &dyn ProblemCatalog, id: u32) -> AppResult<Problem> {
        catalog
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Problem {id} not found")))
    }
}
