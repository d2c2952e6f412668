//! # hrms-core
//!
//! Domain layer containing token sets, pairing entries, sessions, value objects,
//! and the credential store traits.
//! This crate has zero dependencies on infrastructure (database, HTTP client, web framework).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{parse_token_grant, PairingEntry, Session, TokenGrant, TokenSet};
pub use error::DomainError;
pub use traits::{PairingRepository, RepoResult, SessionRepository};
pub use value_objects::{PairingCode, PairingCodeError, SessionIdentity, DEFAULT_SESSION_ID};
