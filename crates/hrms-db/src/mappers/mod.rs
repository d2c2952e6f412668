//! Entity to model mappers
//!
//! Conversions between domain entities (hrms-core) and database models.
//! - `TryFrom<PairingCodeModel>` / `From<UserSessionModel>`: rows to domain objects
//! - `*Insert` structs: borrow entity data for binding

mod pairing_code;
mod user_session;

pub use pairing_code::PairingCodeInsert;
pub use user_session::SessionUpsert;
