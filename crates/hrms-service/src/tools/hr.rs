//! HR data tools
//!
//! Thin wrappers over upstream endpoints. The upstream body is handed back
//! verbatim with its status code.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use validator::Validate;

use crate::dto::{
    AttendanceHistoryArgs, AttendanceListArgs, CreateAttendanceArgs, ListHolidaysArgs,
    MonthlyAttendanceArgs, SalaryInfoArgs, ToolResult,
};
use crate::services::{RequestExecutor, ServiceContext, ServiceError, ServiceResult};
use crate::upstream::DownstreamRequest;

use super::{parse_args, Tool};

/// Validated arguments that know how to become an upstream request
pub trait UpstreamCall: DeserializeOwned + Validate + Send {
    fn into_request(self, path: &str) -> ServiceResult<DownstreamRequest>;
}

impl UpstreamCall for ListHolidaysArgs {
    fn into_request(self, path: &str) -> ServiceResult<DownstreamRequest> {
        Ok(DownstreamRequest::get(path)
            .query("page", self.page)
            .query_opt("year", self.year))
    }
}

impl UpstreamCall for AttendanceListArgs {
    fn into_request(self, path: &str) -> ServiceResult<DownstreamRequest> {
        Ok(DownstreamRequest::get(path)
            .query("page", self.page)
            .query_opt("search", self.search)
            .query_opt("ordering", self.ordering))
    }
}

impl UpstreamCall for MonthlyAttendanceArgs {
    fn into_request(self, path: &str) -> ServiceResult<DownstreamRequest> {
        Ok(DownstreamRequest::get(path)
            .query("month", self.month)
            .query("year", self.year)
            .query("page", self.page)
            .query_opt("search", self.search)
            .query_opt("ordering", self.ordering)
            .query_opt("userid", self.userid))
    }
}

impl UpstreamCall for AttendanceHistoryArgs {
    fn into_request(self, path: &str) -> ServiceResult<DownstreamRequest> {
        Ok(DownstreamRequest::get(path)
            .query("page", self.page)
            .query_opt("start_date", self.start_date)
            .query_opt("end_date", self.end_date)
            .query_opt("search", self.search)
            .query_opt("ordering", self.ordering))
    }
}

impl UpstreamCall for SalaryInfoArgs {
    fn into_request(self, path: &str) -> ServiceResult<DownstreamRequest> {
        Ok(DownstreamRequest::get(path)
            .query_opt("userid", self.userid)
            .query_opt("month", self.month)
            .query_opt("year", self.year))
    }
}

impl UpstreamCall for CreateAttendanceArgs {
    fn into_request(self, path: &str) -> ServiceResult<DownstreamRequest> {
        let body = serde_json::to_value(&self)
            .map_err(|e| ServiceError::validation(format!("invalid arguments: {e}")))?;
        Ok(DownstreamRequest::post(path).json(body))
    }
}

/// Tool backed by a single upstream endpoint
pub struct EndpointTool<A> {
    name: &'static str,
    description: &'static str,
    path: &'static str,
    schema: fn() -> Value,
    args: PhantomData<fn() -> A>,
}

impl<A> EndpointTool<A> {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        schema: fn() -> Value,
    ) -> Self {
        Self {
            name,
            description,
            path,
            schema,
            args: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        self.path
    }
}

#[async_trait]
impl<A: UpstreamCall + 'static> Tool for EndpointTool<A> {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn parameters_schema(&self) -> Value {
        (self.schema)()
    }

    async fn execute(
        &self,
        ctx: &ServiceContext,
        session_id: &str,
        args: Value,
    ) -> ServiceResult<ToolResult> {
        let request = parse_args::<A>(args)?.into_request(self.path)?;
        let response = RequestExecutor::new(ctx).call(session_id, &request).await?;
        Ok(ToolResult::from(response))
    }
}

// ============================================================================
// Tool definitions
// ============================================================================

pub fn list_holidays() -> EndpointTool<ListHolidaysArgs> {
    EndpointTool::new(
        "list_holidays",
        "Get the list of company holidays, optionally for a specific year.",
        "/api/holidays/",
        holidays_schema,
    )
}

pub fn list_attendance() -> EndpointTool<AttendanceListArgs> {
    EndpointTool::new(
        "list_attendance",
        "Get attendance records.",
        "/api/attendance/",
        attendance_list_schema,
    )
}

pub fn get_monthly_attendance() -> EndpointTool<MonthlyAttendanceArgs> {
    EndpointTool::new(
        "get_monthly_attendance",
        "Get the monthly attendance summary for an employee.",
        "/api/attendance/monthly/",
        monthly_attendance_schema,
    )
}

pub fn get_my_attendance_history() -> EndpointTool<AttendanceHistoryArgs> {
    EndpointTool::new(
        "get_my_attendance_history",
        "Get the logged-in employee's attendance history.",
        "/api/attendance/my-attendance/",
        attendance_history_schema,
    )
}

pub fn get_today_attendance() -> EndpointTool<AttendanceListArgs> {
    EndpointTool::new(
        "get_today_attendance",
        "Get today's attendance for the logged-in employee.",
        "/api/attendance/today/",
        attendance_list_schema,
    )
}

pub fn get_user_salary_info() -> EndpointTool<SalaryInfoArgs> {
    EndpointTool::new(
        "get_user_salary_info",
        "Get salary info. The backend enforces role-based visibility rules.",
        "/api/payroll/user-salary-info/",
        salary_info_schema,
    )
}

pub fn create_attendance() -> EndpointTool<CreateAttendanceArgs> {
    EndpointTool::new(
        "create_attendance",
        "Create an attendance record (admin only). Required: employee, date (YYYY-MM-DD). \
         Date-time fields use ISO format, e.g. 2026-02-17T09:30:00Z.",
        "/api/attendance/",
        create_attendance_schema,
    )
}

fn page_property() -> Value {
    json!({ "type": "integer", "minimum": 1, "default": 1, "description": "Page number for pagination." })
}

fn month_property() -> Value {
    json!({ "type": "integer", "minimum": 1, "maximum": 12, "description": "Month number (1-12)." })
}

fn holidays_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "year": { "type": "integer", "description": "Only holidays of this year." },
            "page": page_property()
        },
        "required": []
    })
}

fn attendance_list_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "search": { "type": "string", "description": "Search term." },
            "ordering": { "type": "string", "description": "Ordering field." },
            "page": page_property()
        },
        "required": []
    })
}

fn monthly_attendance_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "month": month_property(),
            "year": { "type": "integer", "description": "Year, e.g. 2026." },
            "search": { "type": "string", "description": "Search term." },
            "ordering": { "type": "string", "description": "Ordering field." },
            "page": page_property(),
            "userid": { "type": "integer", "description": "Employee id (admin only)." }
        },
        "required": ["month", "year"]
    })
}

fn attendance_history_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "start_date": { "type": "string", "description": "Start date (YYYY-MM-DD)." },
            "end_date": { "type": "string", "description": "End date (YYYY-MM-DD)." },
            "search": { "type": "string", "description": "Search term." },
            "ordering": { "type": "string", "description": "Ordering field." },
            "page": page_property()
        },
        "required": []
    })
}

fn salary_info_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "userid": { "type": "integer", "description": "Employee id." },
            "month": month_property(),
            "year": { "type": "integer", "description": "Year, e.g. 2026." }
        },
        "required": []
    })
}

fn create_attendance_schema() -> Value {
    let text = json!({ "type": "string" });
    json!({
        "type": "object",
        "properties": {
            "employee": { "type": "integer", "description": "Employee id." },
            "date": { "type": "string", "description": "Date (YYYY-MM-DD)." },
            "in_time": text,
            "out_time": text,
            "office_in_time": text,
            "office_out_time": text,
            "home_in_time": text,
            "home_out_time": text,
            "office_working_hours": text,
            "orignal_total_time": { "type": "integer", "description": "Total minutes worked." },
            "day_type": text,
            "day_text": text,
            "text": text,
            "is_working_from_home": { "type": "boolean" }
        },
        "required": ["employee", "date"]
    })
}
