//! Code execution handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Execution routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(handler::submit))
        .route("/run", post(handler::run_battery))
}
