//! Authenticated request executor
//!
//! Signs a request with the session's access token. A 401 triggers one
//! refresh and one retry; a 401 on the retry is returned as-is.

use hrms_core::DomainError;
use tracing::{instrument, warn};

use crate::upstream::{DownstreamRequest, DownstreamResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::refresh::TokenRefresher;

/// Executes upstream calls on behalf of a paired session
pub struct RequestExecutor<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RequestExecutor<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send `request` signed for `session_id`
    ///
    /// # Errors
    /// - `NotConnected` if the session has never been paired
    /// - `SessionExpired` if a 401 cannot be recovered by a refresh
    /// - `Transport` if upstream cannot be reached
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn call(
        &self,
        session_id: &str,
        request: &DownstreamRequest,
    ) -> ServiceResult<DownstreamResponse> {
        let session = self
            .ctx
            .session_repo()
            .get(session_id)
            .await?
            .ok_or(DomainError::NotConnected)?;

        let upstream = self.ctx.upstream();
        let response = upstream
            .send(request, &session.token_set.access_token)
            .await?;
        if !response.is_unauthorized() {
            return Ok(response);
        }

        let Some(refresh_token) = session.token_set.refresh_token.as_deref() else {
            warn!("Access token rejected and no refresh token is stored");
            return Err(DomainError::SessionExpired.into());
        };

        let access = match TokenRefresher::new(self.ctx)
            .refresh(session_id, refresh_token)
            .await
        {
            Ok(access) => access,
            Err(ServiceError::RefreshFailed(reason)) => {
                warn!(%reason, "Token refresh failed");
                return Err(DomainError::SessionExpired.into());
            }
            Err(e) => return Err(e),
        };

        upstream.send(request, &access).await
    }
}
