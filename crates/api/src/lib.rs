// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! The API boundary for the `PeopleOS` console.
//!
//! This crate turns console requests into store commands and snapshots into
//! page responses. It owns the principal model, the page gate, the employee
//! editor, and the mapping of domain errors to API errors. It does not know
//! about HTTP.

mod auth;
mod capabilities;
mod editor;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{Authenticator, AuthorizationService, Principal, UserRole};
pub use capabilities::{
    AccessDecision, Capability, ConsoleCapabilities, LEAVE_DECIDERS, Page, compute_capabilities,
    gate,
};
pub use editor::{
    DEFAULT_DEPARTMENT, DEFAULT_LOCATION, DEFAULT_PROJECTS, DEFAULT_SALARY, EmployeeDraft,
};
pub use error::{
    ApiError, AuthError, FieldError, translate_domain_error, translate_validation_errors,
};
pub use handlers::{
    DASHBOARD_RECENT_ACTIVITY, DASHBOARD_TOP_DEPARTMENTS, OPERATIONS_UPCOMING_SHIFTS, assign_role,
    attendance, clock_event, create_department, create_employee, create_role, dashboard,
    decide_leave_request, editor_form, get_employee, list_departments, list_employees,
    list_leave_requests, login, operations, remove_employee, set_filters, submit_leave_request,
    today, update_employee,
};
pub use request_response::{
    AssignRoleRequest, AttendanceResponse, ClockEventRequest, CommandResponse,
    CreateDepartmentRequest, CreateEmployeeRequest, CreateRoleRequest, DashboardResponse,
    DepartmentsResponse, EditorResponse, EmployeeListResponse, EmployeeProfileResponse,
    EmployeeRow, LeaveDecisionRequest, LeaveRequestsResponse, LeaveRow, LoginRequest,
    LoginResponse, OperationsResponse, PresenceInfo, RosterEntry, ShiftRow, SubmitLeaveRequest,
};
