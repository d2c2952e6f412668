//! # hrms-service
//!
//! Application layer: pairing, token refresh, authenticated upstream calls
//! and the assistant-facing tools built on them.

pub mod dto;
pub mod services;
pub mod tools;
pub mod upstream;

pub use services::{
    PairingService, RequestExecutor, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, TokenRefresher,
};
pub use tools::{Tool, ToolRegistry};
pub use upstream::{DownstreamRequest, DownstreamResponse, UpstreamClient};
