//! Value objects - immutable types that represent domain concepts

mod pairing_code;
mod session_identity;

pub use pairing_code::{PairingCode, PairingCodeError};
pub use session_identity::{SessionIdentity, DEFAULT_SESSION_ID};
