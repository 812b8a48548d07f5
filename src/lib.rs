//! Code Arena - Coding Practice Platform
//!
//! This library provides the core functionality for the Code Arena
//! platform, a coding-practice service that proxies submissions to a
//! remote code-execution API and normalizes the results.
//!
//! # Features
//!
//! - Multi-language support (JavaScript, Python, Java, C++, C)
//! - Remote execution via a Judge0-compatible service
//! - Submit-and-poll gateway with a bounded attempt budget
//! - Batch evaluation against a fixture battery with aggregate scoring
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Judge**: Remote execution client and poll gateway
//! - **Catalog**: Read-only problem and fixture providers

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
