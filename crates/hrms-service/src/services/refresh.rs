//! Token refresh coordinator

use hrms_core::Session;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Exchanges a session's refresh token for a new access token and persists
/// the result in a single write
pub struct TokenRefresher<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TokenRefresher<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Refresh and store the new token set, returning the new access token
    ///
    /// On failure the stored session is left untouched. When upstream does
    /// not rotate the refresh token the current one is kept.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, session_id: &str, refresh_token: &str) -> ServiceResult<String> {
        let token_set = self
            .ctx
            .upstream()
            .refresh(refresh_token)
            .await?
            .rotate(Some(refresh_token.to_string()));

        let access = token_set.access_token.clone();
        // Last writer wins: a redeem that landed since the caller's read is overwritten.
        self.ctx
            .session_repo()
            .put(&Session::new(session_id, token_set))
            .await?;

        info!("Access token refreshed");
        Ok(access)
    }
}
