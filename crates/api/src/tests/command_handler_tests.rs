// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use peopleos::{FixedClock, Outcome, SequentialIds, Store};
use peopleos_activity::{ActivityCategory, ActivityLog};
use peopleos_domain::{
    ClockEventType, EmployeeId, FilterUpdate, LeaveRequestId, LeaveStatus, PermissionLevel,
    RoleId, StatusFilter,
};
use time::macros::date;

use crate::tests::helpers::{
    TODAY, create_test_admin, create_test_employee, create_test_hr, create_test_manager,
    create_test_store, create_valid_draft,
};
use crate::{
    ApiError, AssignRoleRequest, ClockEventRequest, CommandResponse, CreateDepartmentRequest,
    CreateEmployeeRequest, CreateRoleRequest, EmployeeDraft, LeaveDecisionRequest,
    SubmitLeaveRequest, assign_role, clock_event, create_department, create_employee,
    create_role, decide_leave_request, remove_employee, set_filters, submit_leave_request,
    update_employee,
};

fn create_request(hired_at: Option<&str>) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        employee: create_valid_draft(),
        hired_at: hired_at.map(String::from),
    }
}

#[test]
fn test_create_employee_prepends_with_fresh_id() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let response: CommandResponse =
        create_employee(&mut store, &create_test_manager(), create_request(None)).unwrap();

    assert_eq!(response.outcome, Outcome::Applied);
    assert_eq!(response.created_id.as_deref(), Some("emp-1"));
    assert!(response.activity.is_none());
    let first = &store.state().employees[0];
    assert_eq!(first.name, "Jordan Reyes");
    assert_eq!(first.hired_at, TODAY);
    assert_eq!(store.state().employees.len(), 6);
}

#[test]
fn test_create_employee_uses_requested_hire_date() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    create_employee(
        &mut store,
        &create_test_admin(),
        create_request(Some("2025-09-01")),
    )
    .unwrap();

    assert_eq!(store.state().employees[0].hired_at, date!(2025 - 09 - 01));
}

#[test]
fn test_create_employee_rejects_bad_hire_date() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> = create_employee(
        &mut store,
        &create_test_admin(),
        create_request(Some("09/01/2025")),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "hired_at"
    ));
    assert_eq!(store.state().employees.len(), 5);
}

#[test]
fn test_create_employee_denied_for_employee_role() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> =
        create_employee(&mut store, &create_test_employee(), create_request(None));

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert_eq!(store.state().employees.len(), 5);
}

#[test]
fn test_invalid_draft_leaves_store_untouched() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();
    let request: CreateEmployeeRequest = CreateEmployeeRequest {
        employee: EmployeeDraft {
            salary: 10_000,
            ..create_valid_draft()
        },
        hired_at: None,
    };

    let result: Result<CommandResponse, ApiError> =
        create_employee(&mut store, &create_test_admin(), request);

    assert!(matches!(result, Err(ApiError::ValidationFailed { .. })));
    assert_eq!(store.state().employees.len(), 5);
}

#[test]
fn test_update_employee_replaces_record() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();
    let employee_id: EmployeeId = EmployeeId::new("EMP-2402");
    let draft: EmployeeDraft = EmployeeDraft {
        location: String::from("Munich, DE"),
        ..EmployeeDraft::for_employee(store.state().employee(&employee_id).unwrap())
    };

    let response: CommandResponse =
        update_employee(&mut store, &create_test_hr(), &employee_id, draft).unwrap();

    assert_eq!(response.outcome, Outcome::Applied);
    let updated = store.state().employee(&employee_id).unwrap();
    assert_eq!(updated.location, "Munich, DE");
    assert_eq!(updated.hired_at, date!(2021 - 10 - 12));
}

#[test]
fn test_update_unknown_employee_is_not_found() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> = update_employee(
        &mut store,
        &create_test_admin(),
        &EmployeeId::new("EMP-0000"),
        create_valid_draft(),
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_update_employee_denied_for_manager() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> = update_employee(
        &mut store,
        &create_test_manager(),
        &EmployeeId::new("EMP-2402"),
        create_valid_draft(),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_remove_unknown_employee_reports_unchanged() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let response: CommandResponse =
        remove_employee(&mut store, &create_test_admin(), &EmployeeId::new("EMP-0000")).unwrap();

    assert_eq!(response.outcome, Outcome::Unchanged);
    assert!(response.activity.is_none());
    assert_eq!(store.state().employees.len(), 5);
}

#[test]
fn test_remove_employee_applies() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let response: CommandResponse =
        remove_employee(&mut store, &create_test_hr(), &EmployeeId::new("EMP-2405")).unwrap();

    assert_eq!(response.outcome, Outcome::Applied);
    assert!(store.state().employee(&EmployeeId::new("EMP-2405")).is_none());
}

#[test]
fn test_set_filters_merges_fields() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();
    let update: FilterUpdate = FilterUpdate {
        search: Some(String::from("engineer")),
        status: Some(StatusFilter::All),
        department: None,
    };

    let response: CommandResponse =
        set_filters(&mut store, &create_test_manager(), update).unwrap();

    assert_eq!(response.outcome, Outcome::Applied);
    assert_eq!(store.state().filters.search, "engineer");
}

#[test]
fn test_create_department_and_role() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();
    let admin = create_test_admin();

    let department: CommandResponse = create_department(
        &mut store,
        &admin,
        &CreateDepartmentRequest {
            name: String::from(" Finance "),
            description: String::from("Budgets and forecasting"),
        },
    )
    .unwrap();
    let role: CommandResponse = create_role(
        &mut store,
        &admin,
        &CreateRoleRequest {
            title: String::from("Controller"),
            department: String::from("Finance"),
            permission: String::from("Admin"),
        },
    )
    .unwrap();

    assert_eq!(department.created_id.as_deref(), Some("dept-1"));
    assert_eq!(role.created_id.as_deref(), Some("role-2"));
    assert_eq!(store.state().departments[0].name, "Finance");
    assert_eq!(store.state().roles[0].permission, PermissionLevel::Admin);
}

#[test]
fn test_create_role_rejects_unknown_permission() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> = create_role(
        &mut store,
        &create_test_hr(),
        &CreateRoleRequest {
            title: String::from("Controller"),
            department: String::from("Finance"),
            permission: String::from("Owner"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "permission"
    ));
}

#[test]
fn test_create_department_rejects_blank_name() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> = create_department(
        &mut store,
        &create_test_admin(),
        &CreateDepartmentRequest {
            name: String::from("  "),
            description: String::new(),
        },
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    assert_eq!(store.state().departments.len(), 4);
}

#[test]
fn test_assign_role_sets_and_clears() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();
    let admin = create_test_admin();
    let employee_id: EmployeeId = EmployeeId::new("EMP-2403");

    assign_role(
        &mut store,
        &admin,
        &employee_id,
        AssignRoleRequest {
            role_id: Some(String::from("role-growth-strategist")),
        },
    )
    .unwrap();
    assert_eq!(
        store.state().employee(&employee_id).unwrap().role_id,
        Some(RoleId::new("role-growth-strategist"))
    );

    assign_role(
        &mut store,
        &admin,
        &employee_id,
        AssignRoleRequest {
            role_id: Some(String::from(" ")),
        },
    )
    .unwrap();
    assert_eq!(store.state().employee(&employee_id).unwrap().role_id, None);
}

#[test]
fn test_clock_event_open_to_employee_role() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let response: CommandResponse = clock_event(
        &mut store,
        &create_test_employee(),
        ClockEventRequest {
            employee_id: String::from("EMP-2404"),
            event_type: String::from("CLOCK_IN"),
            note: Some(String::from("  Dubai office ")),
        },
    )
    .unwrap();

    assert_eq!(response.created_id.as_deref(), Some("att-1"));
    let activity: ActivityLog = response.activity.unwrap();
    assert_eq!(activity.title, "Omar Essam clocked in");
    assert_eq!(activity.category, ActivityCategory::Attendance);
    let event = &store.state().attendance[0];
    assert_eq!(event.event_type, ClockEventType::ClockIn);
    assert_eq!(event.note.as_deref(), Some("Dubai office"));
}

#[test]
fn test_clock_event_rejects_unknown_type() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> = clock_event(
        &mut store,
        &create_test_employee(),
        ClockEventRequest {
            employee_id: String::from("EMP-2404"),
            event_type: String::from("clock_in"),
            note: None,
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "type"
    ));
    assert_eq!(store.state().attendance.len(), 4);
}

#[test]
fn test_clock_event_request_uses_type_key() {
    let request: ClockEventRequest = serde_json::from_str(
        r#"{"employee_id":"EMP-2401","type":"CLOCK_OUT"}"#,
    )
    .unwrap();

    assert_eq!(request.event_type, "CLOCK_OUT");
    assert_eq!(request.note, None);
}

#[test]
fn test_submit_leave_request_creates_pending_request() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let response: CommandResponse = submit_leave_request(
        &mut store,
        &create_test_employee(),
        &SubmitLeaveRequest {
            employee_id: String::from("EMP-2403"),
            start_date: String::from("2025-07-07"),
            end_date: String::from("2025-07-11"),
            reason: String::from("Family visit"),
        },
    )
    .unwrap();

    assert_eq!(response.created_id.as_deref(), Some("leave-1"));
    let request = &store.state().leave_requests[0];
    assert_eq!(request.status, LeaveStatus::Pending);
    assert_eq!(request.start_date, date!(2025 - 07 - 07));
    assert_eq!(
        response.activity.map(|entry| entry.category),
        Some(ActivityCategory::Leave)
    );
}

#[test]
fn test_submit_leave_request_rejects_reversed_range() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> = submit_leave_request(
        &mut store,
        &create_test_employee(),
        &SubmitLeaveRequest {
            employee_id: String::from("EMP-2403"),
            start_date: String::from("2025-07-11"),
            end_date: String::from("2025-07-07"),
            reason: String::from("Family visit"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "end_date"
    ));
    assert_eq!(store.state().leave_requests.len(), 2);
}

#[test]
fn test_decide_leave_request() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();
    let request_id: LeaveRequestId = LeaveRequestId::new("leave-1");

    let response: CommandResponse = decide_leave_request(
        &mut store,
        &create_test_manager(),
        &request_id,
        &LeaveDecisionRequest {
            status: String::from("Approved"),
        },
    )
    .unwrap();

    assert_eq!(response.outcome, Outcome::Applied);
    assert_eq!(
        response.activity.map(|entry| entry.title),
        Some(String::from("Leave request approved"))
    );
    assert_eq!(store.state().leave_requests[0].status, LeaveStatus::Approved);
}

#[test]
fn test_decide_leave_request_denied_for_employee_role() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let result: Result<CommandResponse, ApiError> = decide_leave_request(
        &mut store,
        &create_test_employee(),
        &LeaveRequestId::new("leave-1"),
        &LeaveDecisionRequest {
            status: String::from("Declined"),
        },
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert_eq!(store.state().leave_requests[0].status, LeaveStatus::Pending);
}

#[test]
fn test_decide_unknown_leave_request_is_unchanged() {
    let mut store: Store<FixedClock, SequentialIds> = create_test_store();

    let response: CommandResponse = decide_leave_request(
        &mut store,
        &create_test_admin(),
        &LeaveRequestId::new("leave-404"),
        &LeaveDecisionRequest {
            status: String::from("Declined"),
        },
    )
    .unwrap();

    assert_eq!(response.outcome, Outcome::Unchanged);
    assert!(response.activity.is_none());
}
