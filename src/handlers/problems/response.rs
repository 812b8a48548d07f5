//! Problem response DTOs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Problem;

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub success: bool,
    pub problems: Vec<Problem>,
    pub total: usize,
}

/// Single problem response, with starter code per language
#[derive(Debug, Serialize)]
pub struct ProblemDetailResponse {
    pub success: bool,
    pub problem: Problem,
    pub templates: BTreeMap<String, String>,
}
