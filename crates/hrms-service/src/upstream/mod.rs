//! HTTP client for the upstream HR backend

pub mod client;
pub mod request;

pub use client::UpstreamClient;
pub use request::{DownstreamRequest, DownstreamResponse};
