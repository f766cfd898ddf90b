// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    apply_with_test_effects, create_new_employee, create_seeded_state, create_test_clock,
};
use crate::{Command, Outcome, SequentialIds, State, TransitionResult, apply};
use peopleos_domain::{
    AttendanceStatus, ClockEventType, DepartmentFilter, Employee, EmployeeId, EmployeeStatus,
    FilterUpdate, NewDepartment, NewRole, PermissionLevel, RoleId, StatusFilter,
};

#[test]
fn test_add_employee_prepends_with_generated_id() {
    let state: State = create_seeded_state();
    let command: Command = Command::AddEmployee {
        employee: create_new_employee("Lena Ortiz", "Growth", Some("role-growth-strategist")),
    };

    let result: TransitionResult = apply_with_test_effects(&state, command);

    assert_eq!(result.outcome, Outcome::Applied);
    assert_eq!(result.new_state.employees.len(), 6);
    assert_eq!(result.new_state.employees[0].id.as_str(), "emp-1");
    assert_eq!(result.new_state.employees[0].name, "Lena Ortiz");
    assert_eq!(result.new_state.employees[1].id.as_str(), "EMP-2401");
    assert!(result.activity.is_none());
}

#[test]
fn test_repeated_adds_yield_distinct_ids_most_recent_first() {
    let clock = create_test_clock();
    let mut ids: SequentialIds = SequentialIds::new();
    let mut state: State = State::new();

    for name in ["First Hire", "Second Hire", "Third Hire"] {
        let command: Command = Command::AddEmployee {
            employee: create_new_employee(name, "Engineering", None),
        };
        state = apply(&state, command, &clock, &mut ids).new_state;
    }

    let names: Vec<&str> = state.employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Third Hire", "Second Hire", "First Hire"]);
    assert_ne!(state.employees[0].id, state.employees[1].id);
    assert_ne!(state.employees[1].id, state.employees[2].id);
    assert_ne!(state.employees[0].id, state.employees[2].id);
}

#[test]
fn test_apply_leaves_input_state_untouched() {
    let state: State = create_seeded_state();
    let before: State = state.clone();

    let _ = apply_with_test_effects(
        &state,
        Command::RemoveEmployee {
            employee_id: EmployeeId::new("EMP-2401"),
        },
    );

    assert_eq!(state, before);
}

#[test]
fn test_update_employee_replaces_matching_record() {
    let state: State = create_seeded_state();
    let mut updated: Employee = state.employees[2].clone();
    updated.status = EmployeeStatus::OnLeave;
    updated.salary = 121_000;

    let result: TransitionResult = apply_with_test_effects(
        &state,
        Command::UpdateEmployee {
            employee: updated.clone(),
        },
    );

    assert_eq!(result.outcome, Outcome::Applied);
    assert_eq!(result.new_state.employees[2], updated);
    assert_eq!(result.new_state.employees.len(), state.employees.len());
}

#[test]
fn test_update_unknown_employee_is_a_no_op() {
    let state: State = create_seeded_state();
    let mut ghost: Employee = state.employees[0].clone();
    ghost.id = EmployeeId::new("EMP-9999");

    let result: TransitionResult =
        apply_with_test_effects(&state, Command::UpdateEmployee { employee: ghost });

    assert_eq!(result.outcome, Outcome::Unchanged);
    assert_eq!(result.new_state, state);
}

#[test]
fn test_remove_employee_is_idempotent() {
    let state: State = create_seeded_state();
    let command: Command = Command::RemoveEmployee {
        employee_id: EmployeeId::new("EMP-2403"),
    };

    let first: TransitionResult = apply_with_test_effects(&state, command.clone());
    let second: TransitionResult = apply_with_test_effects(&first.new_state, command);

    assert_eq!(first.outcome, Outcome::Applied);
    assert_eq!(first.new_state.employees.len(), 4);
    assert_eq!(second.outcome, Outcome::Unchanged);
    assert_eq!(second.new_state, first.new_state);
}

#[test]
fn test_remove_employee_leaves_references_dangling() {
    let state: State = create_seeded_state();

    let result: TransitionResult = apply_with_test_effects(
        &state,
        Command::RemoveEmployee {
            employee_id: EmployeeId::new("EMP-2402"),
        },
    );

    assert_eq!(result.new_state.attendance, state.attendance);
    assert_eq!(result.new_state.leave_requests, state.leave_requests);
    assert_eq!(result.new_state.activity, state.activity);
}

#[test]
fn test_set_filters_merges_supplied_fields_only() {
    let state: State = create_seeded_state();

    let searched: TransitionResult = apply_with_test_effects(
        &state,
        Command::SetFilters {
            update: FilterUpdate {
                search: Some(String::from("pri")),
                ..FilterUpdate::default()
            },
        },
    );
    let narrowed: TransitionResult = apply_with_test_effects(
        &searched.new_state,
        Command::SetFilters {
            update: FilterUpdate {
                status: Some(StatusFilter::Only(EmployeeStatus::Active)),
                department: Some(DepartmentFilter::from("People Ops")),
                ..FilterUpdate::default()
            },
        },
    );

    let filters = &narrowed.new_state.filters;
    assert_eq!(filters.search, "pri");
    assert_eq!(filters.status, StatusFilter::Only(EmployeeStatus::Active));
    assert_eq!(
        filters.department,
        DepartmentFilter::Named(String::from("People Ops"))
    );
}

#[test]
fn test_add_department_and_role_prepend() {
    let state: State = create_seeded_state();

    let with_department: TransitionResult = apply_with_test_effects(
        &state,
        Command::AddDepartment {
            department: NewDepartment {
                name: String::from("Finance"),
                description: String::from("Keeps the books."),
            },
        },
    );
    let with_role: TransitionResult = apply_with_test_effects(
        &with_department.new_state,
        Command::AddRole {
            role: NewRole {
                title: String::from("Controller"),
                department: String::from("Finance"),
                permission: PermissionLevel::Admin,
            },
        },
    );

    assert_eq!(with_role.new_state.departments.len(), 5);
    assert_eq!(with_role.new_state.departments[0].name, "Finance");
    assert_eq!(with_role.new_state.departments[0].id.as_str(), "dept-1");
    assert_eq!(with_role.new_state.roles.len(), 6);
    assert_eq!(with_role.new_state.roles[0].title, "Controller");
    assert_eq!(with_role.new_state.roles[0].id.as_str(), "role-1");
}

#[test]
fn test_assign_role_sets_and_clears() {
    let state: State = create_seeded_state();
    let employee_id: EmployeeId = EmployeeId::new("EMP-2403");

    let assigned: TransitionResult = apply_with_test_effects(
        &state,
        Command::AssignRole {
            employee_id: employee_id.clone(),
            role_id: Some(RoleId::new("role-eng-ml-lead")),
        },
    );
    let cleared: TransitionResult = apply_with_test_effects(
        &assigned.new_state,
        Command::AssignRole {
            employee_id: employee_id.clone(),
            role_id: None,
        },
    );

    assert_eq!(
        assigned.new_state.employee(&employee_id).unwrap().role_id,
        Some(RoleId::new("role-eng-ml-lead"))
    );
    assert_eq!(cleared.new_state.employee(&employee_id).unwrap().role_id, None);
}

#[test]
fn test_assign_role_to_unknown_employee_is_a_no_op() {
    let state: State = create_seeded_state();

    let result: TransitionResult = apply_with_test_effects(
        &state,
        Command::AssignRole {
            employee_id: EmployeeId::new("EMP-0000"),
            role_id: Some(RoleId::new("role-people-partner")),
        },
    );

    assert_eq!(result.outcome, Outcome::Unchanged);
    assert_eq!(result.new_state, state);
}

#[test]
fn test_attendance_status_follows_array_order_not_timestamps() {
    let mut clock = create_test_clock();
    let mut ids: SequentialIds = SequentialIds::new();
    let employee_id: EmployeeId = EmployeeId::new("E1");

    let clocked_in: State = apply(
        &State::new(),
        Command::ClockEvent {
            employee_id: employee_id.clone(),
            event_type: ClockEventType::ClockIn,
            note: None,
        },
        &clock,
        &mut ids,
    )
    .new_state;
    // Clock-out recorded with an earlier timestamp still wins: it is first.
    clock.advance(time::Duration::hours(-1));
    let clocked_out: State = apply(
        &clocked_in,
        Command::ClockEvent {
            employee_id: employee_id.clone(),
            event_type: ClockEventType::ClockOut,
            note: None,
        },
        &clock,
        &mut ids,
    )
    .new_state;

    let snapshot = clocked_out.views().attendance_snapshot();
    let presence = snapshot.presence_of(&employee_id);
    assert_eq!(presence.status, AttendanceStatus::Out);
    assert_eq!(
        presence.last_event.map(|event| event.event_type),
        Some(ClockEventType::ClockOut)
    );
    assert_eq!(presence.last_event, clocked_out.attendance.first());
}
