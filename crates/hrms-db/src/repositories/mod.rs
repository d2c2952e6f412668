//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in hrms-core.
//! Every trait method maps to exactly one SQL statement, so each is atomic.

mod error;
mod pairing;
mod session;

pub use pairing::PgPairingRepository;
pub use session::PgSessionRepository;
