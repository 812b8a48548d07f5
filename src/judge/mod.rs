//! Remote judge integration
//!
//! This module owns everything that talks to the external code-execution
//! service: language-id mapping, the wire types, the HTTP client and the
//! submit-and-poll gateway that turns a submission into a normalized
//! terminal result.

pub mod client;
pub mod gateway;
pub mod languages;
pub mod types;

pub use client::{Judge0Client, JudgeClient};
pub use gateway::ExecutionGateway;
