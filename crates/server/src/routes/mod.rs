//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Tools
//! GET  /api/tools              - Tool definitions for an agent
//! POST /api/tools/{name}       - Run a tool with a JSON object of arguments
//!
//! # Directory
//! GET  /api/sites              - Tracked sites and their nicknames
//! ```

mod tools;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the router for all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/tools", get(tools::list_tools))
        .route("/api/tools/{name}", post(tools::run_tool))
        .route("/api/sites", get(tools::list_sites))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Matomo.
async fn health() -> &'static str {
    "ok"
}
