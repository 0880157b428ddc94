//! Tool route handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use matomo_chat_core::TrackedSite;
use serde_json::Value;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::tools::{Tool, ToolExecutor, analytics_tools};

/// List tool definitions.
pub async fn list_tools() -> Json<Vec<Tool>> {
    Json(analytics_tools())
}

/// List tracked sites.
pub async fn list_sites() -> Json<&'static [TrackedSite]> {
    Json(ToolExecutor::list_sites())
}

/// Run one tool.
///
/// The body is a JSON object of arguments. An empty body means all defaults.
#[instrument(skip(state, body))]
pub async fn run_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let input = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {e}")))?
    };

    let result = ToolExecutor::new(state.matomo())
        .execute(&name, &input)
        .await?;

    Ok(Json(result))
}
