//! Domain entities - records that own a token set

mod pairing;
mod session;
mod token;

pub use pairing::PairingEntry;
pub use session::Session;
pub use token::{parse_token_grant, TokenGrant, TokenSet};
