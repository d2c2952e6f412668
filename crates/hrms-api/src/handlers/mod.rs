//! Route handlers
//!
//! All HTTP request handlers organized by surface.

pub mod connect;
pub mod health;
pub mod tools;
