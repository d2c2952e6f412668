//! Integration test utilities for the HRMS connector
//!
//! This crate provides helpers for running end-to-end tests against the
//! HTTP surface with an in-memory store and a mock upstream.

pub mod fixtures;
pub mod helpers;
pub mod mock_upstream;

pub use fixtures::*;
pub use helpers::*;
pub use mock_upstream::{MockUpstream, RecordedRequest, Scripted};
