// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Read handlers take a snapshot and never touch the store. Command handlers
//! authorize, parse the request, and dispatch exactly one command.

use std::str::FromStr;

use peopleos::{
    AttendanceSnapshot, Clock, EmployeeProfile, FALLBACK_DISPLAY_NAME, IdGenerator, Outcome,
    Presence, State, Store, Views,
};
use peopleos_domain::{
    AttendanceEvent, ClockEventType, Employee, EmployeeId, FilterUpdate, LeaveRequestId,
    LeaveStatus, NewDepartment, NewEmployee, NewRole, PermissionLevel, Role, RoleId, parse_date,
};
use time::{Date, UtcOffset};
use tracing::debug;

use crate::auth::{Authenticator, AuthorizationService, Principal};
use crate::capabilities::{ConsoleCapabilities, LEAVE_DECIDERS, Page, compute_capabilities};
use crate::editor::EmployeeDraft;
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AssignRoleRequest, AttendanceResponse, ClockEventRequest, CommandResponse,
    CreateDepartmentRequest, CreateEmployeeRequest, CreateRoleRequest, DashboardResponse,
    DepartmentsResponse, EditorResponse, EmployeeListResponse, EmployeeProfileResponse,
    EmployeeRow, LeaveDecisionRequest, LeaveRequestsResponse, LeaveRow, LoginRequest,
    LoginResponse, OperationsResponse, PresenceInfo, RosterEntry, ShiftRow, SubmitLeaveRequest,
};

/// Departments shown on the dashboard.
pub const DASHBOARD_TOP_DEPARTMENTS: usize = 5;
/// Activity entries shown on the dashboard.
pub const DASHBOARD_RECENT_ACTIVITY: usize = 6;
/// Upcoming shifts shown on the operations page.
pub const OPERATIONS_UPCOMING_SHIFTS: usize = 5;

/// Returns the current UTC calendar date of a store's clock.
#[must_use]
pub fn today<C: Clock + ?Sized>(clock: &C) -> Date {
    clock.now().to_offset(UtcOffset::UTC).date()
}

/// Authenticates a console user.
///
/// # Errors
///
/// Returns an error if the credentials do not match an account.
pub fn login(
    authenticator: &Authenticator,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let principal: Principal = authenticator.authenticate(&request.email, &request.password)?;
    let capabilities: ConsoleCapabilities = compute_capabilities(&principal);

    Ok(LoginResponse {
        principal,
        capabilities,
    })
}

// ========================================================================
// Read handlers
// ========================================================================

/// Builds the dashboard.
///
/// # Errors
///
/// Never fails for a signed-in principal; the result type matches the other
/// page handlers.
pub fn dashboard(
    principal: &Principal,
    state: &State,
    today: Date,
) -> Result<DashboardResponse, ApiError> {
    AuthorizationService::authorize_page(principal, Page::Dashboard)?;

    let views: Views<'_> = state.views();
    Ok(DashboardResponse {
        stats: views.stats(),
        status_distribution: views.status_distribution(),
        engagement_rate: views.engagement_rate(),
        clocked_in: views.attendance_snapshot().clocked_in(),
        weekly_presence: views.weekly_presence(today),
        top_departments: views.top_departments(DASHBOARD_TOP_DEPARTMENTS),
        recent_activity: views
            .recent_activity(DASHBOARD_RECENT_ACTIVITY)
            .into_iter()
            .cloned()
            .collect(),
        pending_leave_requests: state
            .leave_requests
            .iter()
            .filter(|request| request.status == LeaveStatus::Pending)
            .count(),
        next_payroll: views.next_payroll().cloned(),
        capabilities: compute_capabilities(principal),
    })
}

/// Lists employees passing the snapshot's filters.
///
/// # Errors
///
/// Returns an error if the principal may not open the employee directory.
pub fn list_employees(
    principal: &Principal,
    state: &State,
) -> Result<EmployeeListResponse, ApiError> {
    AuthorizationService::authorize_page(principal, Page::Employees)?;

    let views: Views<'_> = state.views();
    let snapshot: AttendanceSnapshot<'_> = views.attendance_snapshot();
    let employees: Vec<EmployeeRow> = views
        .filtered_employees()
        .into_iter()
        .map(|employee| EmployeeRow {
            role_title: views.role_of(employee).map(|role| role.title.clone()),
            attendance: snapshot.status_of(&employee.id),
            employee: employee.clone(),
        })
        .collect();

    Ok(EmployeeListResponse {
        filters: state.filters.clone(),
        employees,
        stats: views.stats(),
        departments: department_names(state),
    })
}

/// Returns one employee's profile.
///
/// # Errors
///
/// Returns an error if the principal may not open profiles or the employee
/// does not exist.
pub fn get_employee(
    principal: &Principal,
    state: &State,
    employee_id: &EmployeeId,
    today: Date,
) -> Result<EmployeeProfileResponse, ApiError> {
    AuthorizationService::authorize_page(principal, Page::EmployeeProfile)?;

    let profile: EmployeeProfile<'_> = state
        .views()
        .employee_profile(employee_id, today)
        .ok_or_else(|| employee_not_found(employee_id))?;

    Ok(EmployeeProfileResponse {
        employee: profile.employee.clone(),
        role: profile.role.cloned(),
        attendance: presence_info(profile.presence),
        recent_events: profile.recent_events.into_iter().cloned().collect(),
        next_shift: profile.next_shift.cloned(),
        review: profile.review.cloned(),
        mentions: profile.mentions.into_iter().cloned().collect(),
    })
}

/// Prefills the employee editor.
///
/// With an `employee_id` the form edits that employee; without one it is a
/// blank new-employee form. A `department` re-selects the department and its
/// first role.
///
/// # Errors
///
/// Returns an error if the principal may not open the editor or the
/// employee does not exist.
pub fn editor_form(
    principal: &Principal,
    state: &State,
    employee_id: Option<&EmployeeId>,
    department: Option<&str>,
) -> Result<EditorResponse, ApiError> {
    let mut draft: EmployeeDraft = if let Some(employee_id) = employee_id {
        AuthorizationService::authorize_page(principal, Page::EditEmployee)?;
        let employee: &Employee = state
            .employee(employee_id)
            .ok_or_else(|| employee_not_found(employee_id))?;
        EmployeeDraft::for_employee(employee)
    } else {
        AuthorizationService::authorize_page(principal, Page::NewEmployee)?;
        EmployeeDraft::blank(state)
    };

    if let Some(department) = department {
        draft.change_department(state, department);
    }

    let roles: Vec<Role> = state
        .views()
        .roles_for_department(&draft.department)
        .into_iter()
        .cloned()
        .collect();

    Ok(EditorResponse {
        draft,
        departments: department_names(state),
        roles,
    })
}

/// Lists departments, roles and the permission split.
///
/// # Errors
///
/// Returns an error if the principal may not open the departments page.
pub fn list_departments(
    principal: &Principal,
    state: &State,
) -> Result<DepartmentsResponse, ApiError> {
    AuthorizationService::authorize_page(principal, Page::Departments)?;

    let views: Views<'_> = state.views();
    Ok(DepartmentsResponse {
        departments: views.department_summaries(),
        roles: state.roles.clone(),
        permission_stats: views.permission_stats(),
    })
}

/// Builds the payroll, schedule and review overview.
///
/// # Errors
///
/// Returns an error if the principal may not open the operations page.
pub fn operations(
    principal: &Principal,
    state: &State,
    today: Date,
) -> Result<OperationsResponse, ApiError> {
    AuthorizationService::authorize_page(principal, Page::Operations)?;

    let views: Views<'_> = state.views();
    let upcoming_shifts: Vec<ShiftRow> = views
        .upcoming_shifts(today)
        .into_iter()
        .take(OPERATIONS_UPCOMING_SHIFTS)
        .map(|shift| ShiftRow {
            employee_name: display_name(state, &shift.employee_id),
            shift: shift.clone(),
        })
        .collect();

    Ok(OperationsResponse {
        payroll: views.payroll_timeline().into_iter().cloned().collect(),
        next_payroll: views.next_payroll().cloned(),
        year_to_date_net: views.year_to_date_net(today.year()),
        upcoming_shifts,
        reviews: state.performance.clone(),
        alert: views.ops_alert().cloned(),
    })
}

/// Returns the attendance roster and event history.
///
/// Attendance is open to every signed-in principal.
#[must_use]
pub fn attendance(state: &State, today: Date) -> AttendanceResponse {
    let views: Views<'_> = state.views();
    let snapshot: AttendanceSnapshot<'_> = views.attendance_snapshot();

    AttendanceResponse {
        roster: state
            .employees
            .iter()
            .map(|employee| RosterEntry {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                presence: presence_info(snapshot.presence_of(&employee.id)),
            })
            .collect(),
        events: state.attendance.clone(),
        weekly_presence: views.weekly_presence(today),
    }
}

/// Lists leave requests, newest first.
#[must_use]
pub fn list_leave_requests(principal: &Principal, state: &State) -> LeaveRequestsResponse {
    LeaveRequestsResponse {
        requests: state
            .leave_requests
            .iter()
            .map(|request| LeaveRow {
                employee_name: display_name(state, &request.employee_id),
                request: request.clone(),
            })
            .collect(),
        can_decide: principal.has_role(LEAVE_DECIDERS),
    }
}

// ========================================================================
// Command handlers
// ========================================================================

/// Merges new values into the employee directory filters.
///
/// # Errors
///
/// Returns an error if the principal may not open the employee directory.
pub fn set_filters<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    update: FilterUpdate,
) -> Result<CommandResponse, ApiError> {
    AuthorizationService::authorize_page(principal, Page::Employees)?;

    let outcome: Outcome = store.set_filters(update);
    Ok(command_response(store, outcome, None, "Filters updated"))
}

/// Creates an employee from an editor draft.
///
/// # Errors
///
/// Returns an error if the principal may not create employees, the hire date
/// does not parse, or the draft fails validation.
pub fn create_employee<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    request: CreateEmployeeRequest,
) -> Result<CommandResponse, ApiError> {
    AuthorizationService::authorize_create_employee(principal)?;

    let hired_at: Date = match request.hired_at.as_deref() {
        Some(value) => parse_field_date("hired_at", value)?,
        None => today(store.clock()),
    };
    let employee: NewEmployee = request.employee.into_new_employee(hired_at)?;
    let name: String = employee.name.clone();

    let outcome: Outcome = store.add_employee(employee);
    let created_id: Option<String> = store
        .state()
        .employees
        .first()
        .map(|employee| employee.id.to_string());

    Ok(command_response(
        store,
        outcome,
        created_id,
        &format!("Added {name}"),
    ))
}

/// Replaces an employee's fields with an editor draft.
///
/// # Errors
///
/// Returns an error if the principal may not edit employees, the employee
/// does not exist, or the draft fails validation.
pub fn update_employee<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    employee_id: &EmployeeId,
    draft: EmployeeDraft,
) -> Result<CommandResponse, ApiError> {
    AuthorizationService::authorize_edit_employee(principal)?;

    let existing: &Employee = store
        .state()
        .employee(employee_id)
        .ok_or_else(|| employee_not_found(employee_id))?;
    let employee: Employee = draft.apply_to(existing)?;
    let name: String = employee.name.clone();

    let outcome: Outcome = store.update_employee(employee);
    Ok(command_response(
        store,
        outcome,
        None,
        &format!("Updated {name}"),
    ))
}

/// Removes an employee.
///
/// An unknown id is not an error; the response reports `unchanged`.
///
/// # Errors
///
/// Returns an error if the principal may not edit employees.
pub fn remove_employee<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    employee_id: &EmployeeId,
) -> Result<CommandResponse, ApiError> {
    AuthorizationService::authorize_edit_employee(principal)?;

    let outcome: Outcome = store.remove_employee(employee_id.clone());
    Ok(command_response(
        store,
        outcome,
        None,
        &format!("Removed employee {employee_id}"),
    ))
}

/// Creates a department.
///
/// # Errors
///
/// Returns an error if the principal may not manage departments or the name
/// is blank.
pub fn create_department<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    request: &CreateDepartmentRequest,
) -> Result<CommandResponse, ApiError> {
    AuthorizationService::authorize_manage_departments(principal)?;

    let name: String = required_text("name", &request.name)?;
    let department: NewDepartment = NewDepartment {
        name: name.clone(),
        description: request.description.trim().to_string(),
    };

    let outcome: Outcome = store.add_department(department);
    let created_id: Option<String> = store
        .state()
        .departments
        .first()
        .map(|department| department.id.to_string());

    Ok(command_response(
        store,
        outcome,
        created_id,
        &format!("Created department {name}"),
    ))
}

/// Creates a role.
///
/// # Errors
///
/// Returns an error if the principal may not manage departments, the title
/// is blank, or the permission does not parse.
pub fn create_role<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    request: &CreateRoleRequest,
) -> Result<CommandResponse, ApiError> {
    AuthorizationService::authorize_manage_departments(principal)?;

    let title: String = required_text("title", &request.title)?;
    let permission: PermissionLevel =
        PermissionLevel::from_str(&request.permission).map_err(|e| translate_domain_error(&e))?;
    let role: NewRole = NewRole {
        title: title.clone(),
        department: request.department.trim().to_string(),
        permission,
    };

    let outcome: Outcome = store.add_role(role);
    let created_id: Option<String> = store.state().roles.first().map(|role| role.id.to_string());

    Ok(command_response(
        store,
        outcome,
        created_id,
        &format!("Created role {title}"),
    ))
}

/// Sets or clears an employee's role.
///
/// # Errors
///
/// Returns an error if the principal may not manage departments.
pub fn assign_role<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    employee_id: &EmployeeId,
    request: AssignRoleRequest,
) -> Result<CommandResponse, ApiError> {
    AuthorizationService::authorize_manage_departments(principal)?;

    let role_id: Option<RoleId> = request
        .role_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .map(RoleId::from);
    let message: String = role_id.as_ref().map_or_else(
        || format!("Cleared role of {employee_id}"),
        |role_id| format!("Assigned {role_id} to {employee_id}"),
    );

    let outcome: Outcome = store.assign_role_to_employee(employee_id.clone(), role_id);
    Ok(command_response(store, outcome, None, &message))
}

/// Records a clock event.
///
/// Any signed-in principal may clock any employee in or out.
///
/// # Errors
///
/// Returns an error if the employee id is blank or the event type does not
/// parse.
pub fn clock_event<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    request: ClockEventRequest,
) -> Result<CommandResponse, ApiError> {
    let employee_id: EmployeeId =
        EmployeeId::from(required_text("employee_id", &request.employee_id)?);
    let event_type: ClockEventType =
        ClockEventType::from_str(&request.event_type).map_err(|e| translate_domain_error(&e))?;
    debug!(user = %principal.id, employee = %employee_id, %event_type, "Clock event requested");

    let outcome: Outcome = store.clock_event(employee_id, event_type, request.note);
    let created_id: Option<String> = store
        .state()
        .attendance
        .first()
        .map(|event: &AttendanceEvent| event.id.to_string());

    Ok(command_response(
        store,
        outcome,
        created_id,
        &format!("Recorded {event_type}"),
    ))
}

/// Files a pending leave request.
///
/// Any signed-in principal may submit leave.
///
/// # Errors
///
/// Returns an error if the employee id is blank, a date does not parse, or
/// the end date falls before the start date.
pub fn submit_leave_request<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    request: &SubmitLeaveRequest,
) -> Result<CommandResponse, ApiError> {
    let employee_id: EmployeeId =
        EmployeeId::from(required_text("employee_id", &request.employee_id)?);
    let start_date: Date = parse_field_date("start_date", &request.start_date)?;
    let end_date: Date = parse_field_date("end_date", &request.end_date)?;
    if end_date < start_date {
        return Err(ApiError::InvalidInput {
            field: String::from("end_date"),
            message: String::from("End date must not be before the start date."),
        });
    }
    debug!(user = %principal.id, employee = %employee_id, "Leave submission requested");

    let outcome: Outcome = store.submit_leave_request(
        employee_id,
        start_date,
        end_date,
        request.reason.trim().to_string(),
    );
    let created_id: Option<String> = store
        .state()
        .leave_requests
        .first()
        .map(|request| request.id.to_string());

    Ok(command_response(
        store,
        outcome,
        created_id,
        "Leave request submitted",
    ))
}

/// Approves, declines or reopens a leave request.
///
/// # Errors
///
/// Returns an error if the principal may not decide leave or the status
/// does not parse.
pub fn decide_leave_request<C: Clock, G: IdGenerator>(
    store: &mut Store<C, G>,
    principal: &Principal,
    request_id: &LeaveRequestId,
    request: &LeaveDecisionRequest,
) -> Result<CommandResponse, ApiError> {
    AuthorizationService::authorize_decide_leave(principal)?;

    let status: LeaveStatus =
        LeaveStatus::from_str(&request.status).map_err(|e| translate_domain_error(&e))?;

    let outcome: Outcome = store.update_leave_request_status(request_id.clone(), status);
    Ok(command_response(
        store,
        outcome,
        None,
        &format!("Leave request {request_id} set to {status}"),
    ))
}

// ========================================================================
// Helpers
// ========================================================================

fn command_response<C: Clock, G: IdGenerator>(
    store: &Store<C, G>,
    outcome: Outcome,
    created_id: Option<String>,
    message: &str,
) -> CommandResponse {
    match outcome {
        Outcome::Applied => CommandResponse {
            outcome,
            created_id,
            activity: store.last_activity().cloned(),
            message: message.to_string(),
        },
        Outcome::Unchanged => CommandResponse {
            outcome,
            created_id: None,
            activity: None,
            message: String::from("Nothing matched; no changes made"),
        },
    }
}

fn presence_info(presence: Presence<'_>) -> PresenceInfo {
    PresenceInfo {
        status: presence.status,
        last_event: presence.last_event.cloned(),
    }
}

fn department_names(state: &State) -> Vec<String> {
    state
        .departments
        .iter()
        .map(|department| department.name.clone())
        .collect()
}

fn display_name(state: &State, employee_id: &EmployeeId) -> String {
    state
        .employee(employee_id)
        .map_or(FALLBACK_DISPLAY_NAME, |employee| employee.name.as_str())
        .to_string()
}

fn employee_not_found(employee_id: &EmployeeId) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Employee"),
        message: format!("Employee {employee_id} not found"),
    }
}

fn required_text(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} is required"),
        });
    }
    Ok(trimmed.to_string())
}

fn parse_field_date(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}
