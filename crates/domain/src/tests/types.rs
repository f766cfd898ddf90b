// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AttendanceEvent, AttendanceEventId, AttendanceStatus, ClockEventType, DepartmentFilter,
    DomainError, EmployeeFilters, EmployeeId, EmployeeStatus, FilterUpdate, LeaveStatus,
    NewEmployee, PermissionLevel, RoleId, ShiftStatus, StatusFilter,
};
use time::macros::{date, datetime};

fn create_test_new_employee() -> NewEmployee {
    NewEmployee {
        name: String::from("Test Person"),
        department: String::from("Engineering"),
        email: String::from("test@example.com"),
        location: String::from("Remote"),
        status: EmployeeStatus::Active,
        hired_at: date!(2024 - 03 - 01),
        salary: 120_000,
        projects: 1,
        role_id: Some(RoleId::new("role-eng-staff-fe")),
        avatar: None,
    }
}

#[test]
fn test_employee_status_round_trips_display_strings() {
    for status in EmployeeStatus::ALL {
        let parsed: EmployeeStatus = status.as_str().parse().unwrap();
        assert_eq!(parsed, status);
    }
    assert_eq!(EmployeeStatus::OnLeave.to_string(), "On Leave");
}

#[test]
fn test_employee_status_rejects_unknown_value() {
    let result: Result<EmployeeStatus, DomainError> = "OnLeave".parse();
    assert_eq!(
        result,
        Err(DomainError::InvalidEmployeeStatus(String::from("OnLeave")))
    );
}

#[test]
fn test_employee_status_serializes_with_space() {
    let json: String = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
    assert_eq!(json, "\"On Leave\"");
}

#[test]
fn test_permission_level_defaults_to_staff() {
    assert_eq!(PermissionLevel::default(), PermissionLevel::Staff);
    assert_eq!("Admin".parse::<PermissionLevel>().unwrap(), PermissionLevel::Admin);
}

#[test]
fn test_status_filter_all_is_a_sentinel() {
    let filter: StatusFilter = "All".parse().unwrap();
    assert_eq!(filter, StatusFilter::All);
    assert!(filter.matches(EmployeeStatus::Inactive));
}

#[test]
fn test_status_filter_matches_exactly() {
    let filter: StatusFilter = "On Leave".parse().unwrap();
    assert!(filter.matches(EmployeeStatus::OnLeave));
    assert!(!filter.matches(EmployeeStatus::Active));
}

#[test]
fn test_status_filter_serde_uses_plain_strings() {
    let json: String = serde_json::to_string(&StatusFilter::All).unwrap();
    assert_eq!(json, "\"All\"");

    let parsed: StatusFilter = serde_json::from_str("\"Inactive\"").unwrap();
    assert_eq!(parsed, StatusFilter::Only(EmployeeStatus::Inactive));

    assert!(serde_json::from_str::<StatusFilter>("\"Retired\"").is_err());
}

#[test]
fn test_department_filter_matches_exact_name_only() {
    let filter: DepartmentFilter = DepartmentFilter::from("Engineering");
    assert!(filter.matches("Engineering"));
    assert!(!filter.matches("engineering"));
    assert!(DepartmentFilter::from("All").matches("anything"));
}

#[test]
fn test_default_filters_pass_everything() {
    let filters: EmployeeFilters = EmployeeFilters::default();
    assert_eq!(filters.search, "");
    assert_eq!(filters.status, StatusFilter::All);
    assert_eq!(filters.department, DepartmentFilter::All);
}

#[test]
fn test_filter_merge_keeps_unspecified_fields() {
    let filters: EmployeeFilters = EmployeeFilters {
        search: String::from("neena"),
        status: StatusFilter::Only(EmployeeStatus::Active),
        department: DepartmentFilter::from("Product"),
    };

    let merged: EmployeeFilters = filters.merged(FilterUpdate {
        search: None,
        status: Some(StatusFilter::All),
        department: None,
    });

    assert_eq!(merged.search, "neena");
    assert_eq!(merged.status, StatusFilter::All);
    assert_eq!(merged.department, DepartmentFilter::from("Product"));
}

#[test]
fn test_filter_update_deserializes_partial_payload() {
    let update: FilterUpdate = serde_json::from_str(r#"{"department":"Growth"}"#).unwrap();
    assert_eq!(update.search, None);
    assert_eq!(update.status, None);
    assert_eq!(
        update.department,
        Some(DepartmentFilter::Named(String::from("Growth")))
    );
}

#[test]
fn test_new_employee_with_id_keeps_every_field() {
    let employee = create_test_new_employee().with_id(EmployeeId::new("emp-1"));
    assert_eq!(employee.id.as_str(), "emp-1");
    assert_eq!(employee.name, "Test Person");
    assert_eq!(employee.salary, 120_000);
    assert_eq!(employee.role_id, Some(RoleId::new("role-eng-staff-fe")));
}

#[test]
fn test_ids_serialize_transparently() {
    let json: String = serde_json::to_string(&EmployeeId::new("EMP-2401")).unwrap();
    assert_eq!(json, "\"EMP-2401\"");
    assert_eq!(EmployeeId::from("EMP-2401").to_string(), "EMP-2401");
}

#[test]
fn test_clock_event_type_wire_format() {
    assert_eq!(
        serde_json::to_string(&ClockEventType::ClockIn).unwrap(),
        "\"CLOCK_IN\""
    );
    assert_eq!(
        "CLOCK_OUT".parse::<ClockEventType>().unwrap(),
        ClockEventType::ClockOut
    );
    assert_eq!(ClockEventType::ClockOut.verb(), "clocked out");
}

#[test]
fn test_attendance_status_follows_event_type() {
    assert_eq!(AttendanceStatus::from(ClockEventType::ClockIn), AttendanceStatus::In);
    assert_eq!(AttendanceStatus::from(ClockEventType::ClockOut), AttendanceStatus::Out);
    assert_eq!(AttendanceStatus::default(), AttendanceStatus::Out);
}

#[test]
fn test_attendance_event_json_uses_type_key() {
    let event: AttendanceEvent = AttendanceEvent {
        id: AttendanceEventId::new("att-1"),
        employee_id: EmployeeId::new("EMP-2402"),
        event_type: ClockEventType::ClockIn,
        timestamp: datetime!(2025-01-08 09:00 UTC),
        note: Some(String::from("Berlin hub")),
    };

    let value: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "CLOCK_IN");
    assert_eq!(value["employee_id"], "EMP-2402");
    assert_eq!(value["timestamp"], "2025-01-08T09:00:00Z");
}

#[test]
fn test_leave_status_parse_and_display() {
    assert_eq!("Declined".parse::<LeaveStatus>().unwrap(), LeaveStatus::Declined);
    assert_eq!(LeaveStatus::Approved.to_string(), "Approved");
    assert!("approved".parse::<LeaveStatus>().is_err());
}

#[test]
fn test_shift_status_in_progress_has_space() {
    assert_eq!(
        "In Progress".parse::<ShiftStatus>().unwrap(),
        ShiftStatus::InProgress
    );
    assert_eq!(
        serde_json::to_string(&ShiftStatus::InProgress).unwrap(),
        "\"In Progress\""
    );
}
