//! Session <-> model mapper

use hrms_core::entities::{Session, TokenSet};

use crate::models::UserSessionModel;

/// Convert UserSessionModel to Session entity
impl From<UserSessionModel> for Session {
    fn from(model: UserSessionModel) -> Self {
        Session {
            session_id: model.session_id,
            token_set: TokenSet::new(model.access_token, model.refresh_token),
        }
    }
}

/// Borrowed values for upserting a session
pub struct SessionUpsert<'a> {
    pub session_id: &'a str,
    pub access_token: &'a str,
    pub refresh_token: Option<&'a str>,
}

impl<'a> SessionUpsert<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session_id: &session.session_id,
            access_token: &session.token_set.access_token,
            refresh_token: session.token_set.refresh_token.as_deref(),
        }
    }
}
