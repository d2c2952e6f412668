//! Session extractor
//!
//! Resolves the session a request acts on. Fixed deployments ignore the
//! header; per-caller deployments require it.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the caller's session id
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Session id resolved for the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerSession(pub String);

impl CallerSession {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(SESSION_ID_HEADER)
            .and_then(|v| v.to_str().ok());

        let app_state = AppState::from_ref(state);
        let session_id = app_state
            .service_context()
            .session_identity()
            .resolve(header)?;

        Ok(Self(session_id))
    }
}
