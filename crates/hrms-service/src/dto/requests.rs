//! Request DTOs
//!
//! Tool arguments implement `Deserialize` and `Validate`; everything is
//! checked before any upstream call is made.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Pairing Requests
// ============================================================================

/// Login form posted to the connect page
///
/// Both fields are optional at the wire level so a missing field can be
/// reported as a 400 page rather than a framework rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ConnectForm {
    /// Username and password, when both are present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some((username, password))
    }
}

/// Arguments of `link_account_with_code`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LinkAccountArgs {
    #[serde(alias = "code")]
    #[validate(length(min = 1, message = "'sync_code' is required"))]
    pub sync_code: String,
}

// ============================================================================
// Read Tool Requests
// ============================================================================

fn first_page() -> i64 {
    1
}

/// Arguments of `list_holidays`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListHolidaysArgs {
    pub year: Option<i64>,

    #[serde(default = "first_page")]
    #[validate(range(min = 1, message = "'page' must be at least 1"))]
    pub page: i64,
}

/// Search, ordering and paging shared by the attendance listings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttendanceListArgs {
    pub search: Option<String>,
    pub ordering: Option<String>,

    #[serde(default = "first_page")]
    #[validate(range(min = 1, message = "'page' must be at least 1"))]
    pub page: i64,
}

/// Arguments of `get_monthly_attendance`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MonthlyAttendanceArgs {
    #[validate(range(min = 1, max = 12, message = "'month' must be between 1 and 12."))]
    pub month: i64,
    pub year: i64,
    pub search: Option<String>,
    pub ordering: Option<String>,

    #[serde(default = "first_page")]
    #[validate(range(min = 1, message = "'page' must be at least 1"))]
    pub page: i64,

    pub userid: Option<i64>,
}

/// Arguments of `get_my_attendance_history`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttendanceHistoryArgs {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,

    #[serde(default = "first_page")]
    #[validate(range(min = 1, message = "'page' must be at least 1"))]
    pub page: i64,
}

/// Arguments of `get_user_salary_info`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SalaryInfoArgs {
    pub userid: Option<i64>,

    #[validate(range(min = 1, max = 12, message = "'month' must be between 1 and 12."))]
    pub month: Option<i64>,

    pub year: Option<i64>,
}

// ============================================================================
// Write Tool Requests
// ============================================================================

/// Arguments of `create_attendance`, forwarded as the request body
///
/// Absent fields are omitted from the body rather than sent as null.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateAttendanceArgs {
    pub employee: i64,

    #[validate(length(min = 1, message = "'date' is required"))]
    pub date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_in_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_out_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_in_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_out_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_working_hours: Option<String>,

    /// Upstream spells this field `orignal_total_time`
    #[serde(
        rename = "orignal_total_time",
        alias = "original_total_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_total_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_working_from_home: Option<bool>,
}
