//! Tool handlers
//!
//! Listing and invocation of assistant tools. A tool's own failure is a
//! `200` with an error outcome; only unknown tools and unreadable bodies are
//! HTTP errors.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use hrms_service::dto::{ToolListResponse, ToolResult};
use serde_json::Value;

use crate::extractors::CallerSession;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List available tools with their parameter schemas
///
/// GET /tools
pub async fn list_tools(State(state): State<AppState>) -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: state.tools().descriptors(),
    })
}

/// Invoke a tool
///
/// POST /tools/:name
///
/// The body is the JSON arguments object; an empty body means no arguments.
pub async fn invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    session: CallerSession,
    body: Bytes,
) -> ApiResult<Json<ToolResult>> {
    let args = parse_body(&body)?;
    let result = state
        .tools()
        .invoke(state.service_context(), &name, session.as_str(), args)
        .await?;
    Ok(Json(result))
}

fn parse_body(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}
