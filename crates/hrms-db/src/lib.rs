//! # hrms-db
//!
//! Credential store implementing the repository traits from `hrms-core`.
//!
//! ## Overview
//!
//! - PostgreSQL connection pool and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repositories for pairing codes and sessions
//! - An in-process store for single-instance deployments and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hrms_db::CredentialStore;
//!
//! async fn example(config: &hrms_common::DatabaseConfig) -> Result<(), hrms_core::DomainError> {
//!     let store = CredentialStore::connect(config).await?;
//!     let sessions = store.session_repo();
//!     let pairings = store.pairing_repo();
//!     // Use the repositories...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use memory::MemoryCredentialStore;
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{PgPairingRepository, PgSessionRepository};
pub use schema::ensure_schema;
pub use store::CredentialStore;
