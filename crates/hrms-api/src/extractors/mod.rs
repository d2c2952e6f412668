//! Axum extractors for request handling

mod session;

pub use session::{CallerSession, SESSION_ID_HEADER};
