//! Business logic services
//!
//! Pairing, token refresh and authenticated execution against the
//! upstream HR backend.

pub mod context;
pub mod error;
pub mod executor;
pub mod pairing;
pub mod refresh;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use executor::RequestExecutor;
pub use pairing::PairingService;
pub use refresh::TokenRefresher;
