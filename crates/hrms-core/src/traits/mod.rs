//! Repository traits (ports)

mod repositories;

pub use repositories::{PairingRepository, RepoResult, SessionRepository};
