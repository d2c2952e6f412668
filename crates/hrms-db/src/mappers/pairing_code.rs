//! Pairing entry <-> model mapper

use chrono::{DateTime, Utc};
use hrms_core::entities::{PairingEntry, TokenSet};
use hrms_core::error::DomainError;
use hrms_core::value_objects::PairingCode;

use crate::models::PairingCodeModel;

/// Convert PairingCodeModel to PairingEntry entity
impl TryFrom<PairingCodeModel> for PairingEntry {
    type Error = DomainError;

    fn try_from(model: PairingCodeModel) -> Result<Self, Self::Error> {
        let code = PairingCode::parse(&model.code).map_err(|e| {
            DomainError::StoreUnavailable(format!("malformed pairing code row: {e}"))
        })?;
        Ok(PairingEntry {
            code,
            token_set: TokenSet::new(model.access_token, model.refresh_token),
            created_at: model.created_at,
        })
    }
}

/// Borrowed values for inserting a pairing entry
pub struct PairingCodeInsert<'a> {
    pub code: &'a str,
    pub access_token: &'a str,
    pub refresh_token: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

impl<'a> PairingCodeInsert<'a> {
    pub fn new(entry: &'a PairingEntry) -> Self {
        Self {
            code: entry.code.as_str(),
            access_token: &entry.token_set.access_token,
            refresh_token: entry.token_set.refresh_token.as_deref(),
            created_at: entry.created_at,
        }
    }
}
