// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry enum values as plain strings so that parse failures are
//! reported per field. Responses are owned copies of snapshot data.

use crate::auth::Principal;
use crate::capabilities::ConsoleCapabilities;
use crate::editor::EmployeeDraft;
use peopleos::{
    DailyPresence, DepartmentSummary, EmployeeStats, Outcome, PermissionStats, StatusCount,
};
use peopleos_activity::ActivityLog;
use peopleos_domain::{
    AttendanceEvent, AttendanceStatus, Employee, EmployeeFilters, EmployeeId, LeaveRequest,
    PayrollCycle, PerformanceReview, Role, ShiftAssignment,
};
use serde::{Deserialize, Serialize};

/// API request to sign in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// API response for a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed-in user.
    pub principal: Principal,
    /// Controls the console may show.
    pub capabilities: ConsoleCapabilities,
}

/// API request to create an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The editor values.
    #[serde(flatten)]
    pub employee: EmployeeDraft,
    /// Hire date (`YYYY-MM-DD`); today when omitted.
    #[serde(default)]
    pub hired_at: Option<String>,
}

/// API request to create a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    /// Department name.
    pub name: String,
    /// Short description.
    pub description: String,
}

/// API request to create a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    /// Job title.
    pub title: String,
    /// Department name.
    pub department: String,
    /// Permission level (`Admin` or `Staff`).
    pub permission: String,
}

/// API request to set or clear an employee's role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssignRoleRequest {
    /// The role to assign; absent or empty clears it.
    #[serde(default)]
    pub role_id: Option<String>,
}

/// API request to clock in or out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEventRequest {
    /// The employee clocking.
    pub employee_id: String,
    /// `CLOCK_IN` or `CLOCK_OUT`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Optional note.
    #[serde(default)]
    pub note: Option<String>,
}

/// API request to file a leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitLeaveRequest {
    /// The requesting employee.
    pub employee_id: String,
    /// First day (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last day (`YYYY-MM-DD`).
    pub end_date: String,
    /// Stated reason.
    pub reason: String,
}

/// API request to decide a leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDecisionRequest {
    /// `Pending`, `Approved` or `Declined`.
    pub status: String,
}

/// API response for any command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Whether the command changed anything.
    pub outcome: Outcome,
    /// Id of the entity the command created, if any.
    pub created_id: Option<String>,
    /// The activity entry the command cascaded, if any.
    pub activity: Option<ActivityLog>,
    /// A human-readable summary.
    pub message: String,
}

/// One employee's current presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceInfo {
    /// `IN` or `OUT`.
    pub status: AttendanceStatus,
    /// The event the status was derived from.
    pub last_event: Option<AttendanceEvent>,
}

/// API response for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Headline counts.
    pub stats: EmployeeStats,
    /// Counts per employment status.
    pub status_distribution: Vec<StatusCount>,
    /// Percentage of Active employees.
    pub engagement_rate: u64,
    /// Employees currently clocked in.
    pub clocked_in: usize,
    /// Attendance events per day.
    pub weekly_presence: Vec<DailyPresence>,
    /// Largest departments.
    pub top_departments: Vec<DepartmentSummary>,
    /// Newest activity entries.
    pub recent_activity: Vec<ActivityLog>,
    /// Leave requests awaiting a decision.
    pub pending_leave_requests: usize,
    /// Upcoming payroll cycle.
    pub next_payroll: Option<PayrollCycle>,
    /// Controls the console may show.
    pub capabilities: ConsoleCapabilities,
}

/// One row of the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRow {
    /// The employee record.
    #[serde(flatten)]
    pub employee: Employee,
    /// Resolved role title.
    pub role_title: Option<String>,
    /// Current presence.
    pub attendance: AttendanceStatus,
}

/// API response for the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    /// Filters in effect.
    pub filters: EmployeeFilters,
    /// Employees passing the filters.
    pub employees: Vec<EmployeeRow>,
    /// Headline counts across all employees.
    pub stats: EmployeeStats,
    /// Department names for the filter picker.
    pub departments: Vec<String>,
}

/// API response for one employee's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfileResponse {
    /// The employee record.
    pub employee: Employee,
    /// Resolved role.
    pub role: Option<Role>,
    /// Current presence.
    pub attendance: PresenceInfo,
    /// Newest clock events.
    pub recent_events: Vec<AttendanceEvent>,
    /// Next scheduled shift.
    pub next_shift: Option<ShiftAssignment>,
    /// Latest performance review.
    pub review: Option<PerformanceReview>,
    /// Activity entries naming the employee.
    pub mentions: Vec<ActivityLog>,
}

/// API response for the employee editor form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorResponse {
    /// Prefilled values.
    pub draft: EmployeeDraft,
    /// Department names for the picker.
    pub departments: Vec<String>,
    /// Roles of the selected department.
    pub roles: Vec<Role>,
}

/// API response for departments and roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    /// One summary per department.
    pub departments: Vec<DepartmentSummary>,
    /// All roles.
    pub roles: Vec<Role>,
    /// Admin vs staff split.
    pub permission_stats: PermissionStats,
}

/// A shift with its employee's name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRow {
    /// The shift.
    #[serde(flatten)]
    pub shift: ShiftAssignment,
    /// Employee display name.
    pub employee_name: String,
}

/// API response for payroll, schedule and reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationsResponse {
    /// Cycles by payout date.
    pub payroll: Vec<PayrollCycle>,
    /// Upcoming payroll cycle.
    pub next_payroll: Option<PayrollCycle>,
    /// Net payroll this year.
    pub year_to_date_net: u64,
    /// Shifts from today on.
    pub upcoming_shifts: Vec<ShiftRow>,
    /// Performance reviews.
    pub reviews: Vec<PerformanceReview>,
    /// Entry to surface as an operations alert.
    pub alert: Option<ActivityLog>,
}

/// One employee in the attendance roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Employee id.
    pub employee_id: EmployeeId,
    /// Employee name.
    pub name: String,
    /// Current presence.
    #[serde(flatten)]
    pub presence: PresenceInfo,
}

/// API response for attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceResponse {
    /// Presence of every employee.
    pub roster: Vec<RosterEntry>,
    /// All clock events, newest first.
    pub events: Vec<AttendanceEvent>,
    /// Attendance events per day.
    pub weekly_presence: Vec<DailyPresence>,
}

/// A leave request with its employee's name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRow {
    /// The request.
    #[serde(flatten)]
    pub request: LeaveRequest,
    /// Employee display name.
    pub employee_name: String,
}

/// API response for leave requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestsResponse {
    /// Requests, newest first.
    pub requests: Vec<LeaveRow>,
    /// Whether the caller may decide them.
    pub can_decide: bool,
}
