//! Database models - SQLx-compatible structs for PostgreSQL tables

mod pairing_code;
mod user_session;

pub use pairing_code::PairingCodeModel;
pub use user_session::UserSessionModel;
