//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// JUDGE API DEFAULTS
// =============================================================================

/// Default base URL of the remote execution service
pub const DEFAULT_JUDGE_API_URL: &str = "https://judge0-ce.p.rapidapi.com";

/// Default API host header value for the remote execution service
pub const DEFAULT_JUDGE_API_HOST: &str = "judge0-ce.p.rapidapi.com";

/// Default per-request timeout for judge API calls, in seconds
pub const DEFAULT_JUDGE_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default delay between status polls, in milliseconds
pub const DEFAULT_JUDGE_POLL_INTERVAL_MS: u64 = 1000;

/// Default maximum number of status polls per submission
pub const DEFAULT_JUDGE_POLL_MAX_ATTEMPTS: u32 = 10;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language identifiers
pub mod languages {
    pub const JAVASCRIPT: &str = "javascript";
    pub const PYTHON: &str = "python";
    pub const JAVA: &str = "java";
    pub const CPP: &str = "cpp";
    pub const C: &str = "c";

    /// All supported language identifiers
    pub const ALL: &[&str] = &[JAVASCRIPT, PYTHON, JAVA, CPP, C];
}

/// Judge0 language ids for each supported language
pub mod language_ids {
    pub const JAVASCRIPT: i64 = 63;
    pub const PYTHON: i64 = 71;
    pub const JAVA: i64 = 62;
    pub const CPP: i64 = 54;
    pub const C: i64 = 50;

    /// Fallback id for unknown language tags (Node.js)
    pub const FALLBACK: i64 = JAVASCRIPT;
}

// =============================================================================
// JUDGE STATUSES
// =============================================================================

/// Judge0 status ids relevant to the poll loop
pub mod judge_statuses {
    /// Submission accepted by the judge but not yet scheduled
    pub const IN_QUEUE: i64 = 1;

    /// Submission currently executing
    pub const PROCESSING: i64 = 2;

    /// Terminal status for a correct run
    pub const ACCEPTED: i64 = 3;
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: u64 = 1024 * 1024;

/// Maximum stdin size in bytes (64 KB)
pub const MAX_STDIN_SIZE: u64 = 64 * 1024;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";
