//! Pairing service
//!
//! Mints one-time codes after a password login and redeems them into a
//! session. A code is consumed by the store's atomic take, so concurrent
//! redeems of the same code have exactly one winner.

use chrono::Utc;
use hrms_core::{DomainError, PairingCode, PairingEntry, Session};
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Pairing service
pub struct PairingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PairingService<'a> {
    /// Create a new PairingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Link the user should open to start pairing
    pub fn connection_link(&self) -> String {
        self.ctx.pairing_config().connect_url()
    }

    /// Log in upstream and park the resulting tokens under a fresh code
    ///
    /// The password is forwarded once and never stored.
    #[instrument(skip(self, password))]
    pub async fn mint(&self, username: &str, password: &str) -> ServiceResult<PairingCode> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ServiceError::validation(
                "username and password are required",
            ));
        }

        let token_set = self
            .ctx
            .upstream()
            .login(username, password)
            .await?
            .into_token_set();

        self.purge_expired().await;

        let attempts = self.ctx.pairing_config().max_mint_attempts.max(1);
        for attempt in 1..=attempts {
            let entry = PairingEntry::new(PairingCode::generate(), token_set.clone());
            if self.ctx.pairing_repo().insert_new(&entry).await? {
                info!("Pairing code minted");
                return Ok(entry.code);
            }
            debug!(attempt, "Pairing code collision, drawing again");
        }

        warn!(attempts, "No free pairing code");
        Err(DomainError::CodeSpaceExhausted { attempts }.into())
    }

    /// Consume a code and bind its tokens to `session_id`
    ///
    /// Malformed, unknown, already redeemed and expired codes all fail the
    /// same way.
    #[instrument(skip(self, code))]
    pub async fn redeem(&self, code: &str, session_id: &str) -> ServiceResult<()> {
        let code = PairingCode::parse(code).map_err(|_| DomainError::InvalidOrExpiredCode)?;

        let entry = self
            .ctx
            .pairing_repo()
            .take(code.as_str())
            .await?
            .ok_or(DomainError::InvalidOrExpiredCode)?;

        if entry.is_expired(self.ctx.pairing_config().code_ttl()) {
            info!("Expired pairing code presented");
            return Err(DomainError::InvalidOrExpiredCode.into());
        }

        self.ctx
            .session_repo()
            .put(&Session::new(session_id, entry.token_set))
            .await?;

        info!("Session linked");
        Ok(())
    }

    /// Drop codes past their lifetime. Failures only cost storage, so they
    /// are logged and otherwise ignored.
    async fn purge_expired(&self) {
        let Some(cutoff) = self
            .ctx
            .pairing_config()
            .code_ttl()
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        else {
            return;
        };
        match self.ctx.pairing_repo().purge_expired(cutoff).await {
            Ok(0) => {}
            Ok(removed) => debug!(removed, "Purged expired pairing codes"),
            Err(e) => warn!(error = %e, "Failed to purge expired pairing codes"),
        }
    }
}
