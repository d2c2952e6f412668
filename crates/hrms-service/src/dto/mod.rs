//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Validated tool argument DTOs and the connect form
//! - Response DTOs for tool results, tool listings and health checks

pub mod requests;
pub mod responses;

pub use requests::{
    AttendanceHistoryArgs, AttendanceListArgs, ConnectForm, CreateAttendanceArgs,
    LinkAccountArgs, ListHolidaysArgs, MonthlyAttendanceArgs, SalaryInfoArgs,
};

pub use responses::{
    HealthChecks, HealthResponse, ReadinessResponse, ToolDescriptor, ToolListResponse, ToolResult,
};
