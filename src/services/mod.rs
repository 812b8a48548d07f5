//! Business logic services

pub mod execution_service;
pub mod problem_service;

pub use execution_service::ExecutionService;
pub use problem_service::ProblemService;
