// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cascade::{
    clock_activity, display_name, leave_decision_activity, leave_submitted_activity,
};
use crate::command::Command;
use crate::effects::{Clock, IdGenerator};
use crate::state::{State, TransitionResult};
use peopleos_activity::ActivityLog;
use peopleos_domain::{
    ActivityId, AttendanceEvent, AttendanceEventId, DepartmentId, EmployeeId, LeaveRequest,
    LeaveRequestId, LeaveStatus, RoleId,
};
use time::OffsetDateTime;

/// Id prefix for employees.
pub const EMPLOYEE_ID_PREFIX: &str = "emp";
/// Id prefix for departments.
pub const DEPARTMENT_ID_PREFIX: &str = "dept";
/// Id prefix for roles.
pub const ROLE_ID_PREFIX: &str = "role";
/// Id prefix for attendance events.
pub const ATTENDANCE_ID_PREFIX: &str = "att";
/// Id prefix for activity entries.
pub const ACTIVITY_ID_PREFIX: &str = "log";
/// Id prefix for leave requests.
pub const LEAVE_ID_PREFIX: &str = "leave";

/// Applies a command to the current state, producing the next state.
///
/// The input state is never modified. Commands that target a missing
/// employee or leave request yield `Outcome::Unchanged` and a state equal to
/// the input; nothing else can fail. Commands that cascade an activity entry
/// return it alongside a state that already contains both the primary change
/// and the entry.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `clock` - Source of timestamps for created records
/// * `ids` - Source of fresh ids for created records
#[allow(clippy::too_many_lines)]
pub fn apply<C, G>(state: &State, command: Command, clock: &C, ids: &mut G) -> TransitionResult
where
    C: Clock + ?Sized,
    G: IdGenerator + ?Sized,
{
    match command {
        Command::AddEmployee { employee } => {
            let id: EmployeeId = EmployeeId::new(ids.next_id(EMPLOYEE_ID_PREFIX));

            let mut new_state: State = state.clone();
            new_state.employees.insert(0, employee.with_id(id));

            TransitionResult::applied(new_state, None)
        }
        Command::UpdateEmployee { employee } => {
            let Some(index) = state.employees.iter().position(|e| e.id == employee.id) else {
                return TransitionResult::unchanged(state);
            };

            let mut new_state: State = state.clone();
            new_state.employees[index] = employee;

            TransitionResult::applied(new_state, None)
        }
        Command::RemoveEmployee { employee_id } => {
            if state.employee(&employee_id).is_none() {
                return TransitionResult::unchanged(state);
            }

            let mut new_state: State = state.clone();
            new_state.employees.retain(|e| e.id != employee_id);

            TransitionResult::applied(new_state, None)
        }
        Command::SetFilters { update } => {
            let mut new_state: State = state.clone();
            new_state.filters = state.filters.merged(update);

            TransitionResult::applied(new_state, None)
        }
        Command::AddDepartment { department } => {
            let id: DepartmentId = DepartmentId::new(ids.next_id(DEPARTMENT_ID_PREFIX));

            let mut new_state: State = state.clone();
            new_state.departments.insert(0, department.with_id(id));

            TransitionResult::applied(new_state, None)
        }
        Command::AddRole { role } => {
            let id: RoleId = RoleId::new(ids.next_id(ROLE_ID_PREFIX));

            let mut new_state: State = state.clone();
            new_state.roles.insert(0, role.with_id(id));

            TransitionResult::applied(new_state, None)
        }
        Command::AssignRole {
            employee_id,
            role_id,
        } => {
            let Some(index) = state.employees.iter().position(|e| e.id == employee_id) else {
                return TransitionResult::unchanged(state);
            };

            let mut new_state: State = state.clone();
            new_state.employees[index].role_id = role_id;

            TransitionResult::applied(new_state, None)
        }
        Command::ClockEvent {
            employee_id,
            event_type,
            note,
        } => {
            let timestamp: OffsetDateTime = clock.now();
            let event: AttendanceEvent = AttendanceEvent {
                id: AttendanceEventId::new(ids.next_id(ATTENDANCE_ID_PREFIX)),
                employee_id,
                event_type,
                timestamp,
                note: note
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty()),
            };

            let name: &str = display_name(state, &event.employee_id);
            let activity: ActivityLog = clock_activity(
                name,
                &event,
                ActivityId::new(ids.next_id(ACTIVITY_ID_PREFIX)),
            );

            let mut new_state: State = state.clone();
            new_state.attendance.insert(0, event);
            new_state.activity.insert(0, activity.clone());

            TransitionResult::applied(new_state, Some(activity))
        }
        Command::SubmitLeaveRequest {
            employee_id,
            start_date,
            end_date,
            reason,
        } => {
            let request: LeaveRequest = LeaveRequest {
                id: LeaveRequestId::new(ids.next_id(LEAVE_ID_PREFIX)),
                employee_id,
                start_date,
                end_date,
                reason,
                status: LeaveStatus::Pending,
                requested_at: clock.now(),
            };

            let name: &str = display_name(state, &request.employee_id);
            let activity: ActivityLog = leave_submitted_activity(
                name,
                &request,
                ActivityId::new(ids.next_id(ACTIVITY_ID_PREFIX)),
            );

            let mut new_state: State = state.clone();
            new_state.leave_requests.insert(0, request);
            new_state.activity.insert(0, activity.clone());

            TransitionResult::applied(new_state, Some(activity))
        }
        Command::UpdateLeaveRequestStatus { request_id, status } => {
            // The decision entry reads the request as it was before the update.
            let Some(index) = state.leave_requests.iter().position(|r| r.id == request_id)
            else {
                return TransitionResult::unchanged(state);
            };
            let original: &LeaveRequest = &state.leave_requests[index];

            let name: &str = display_name(state, &original.employee_id);
            let activity: ActivityLog = leave_decision_activity(
                name,
                original,
                status,
                ActivityId::new(ids.next_id(ACTIVITY_ID_PREFIX)),
                clock.now(),
            );

            let mut new_state: State = state.clone();
            new_state.leave_requests[index].status = status;
            new_state.activity.insert(0, activity.clone());

            TransitionResult::applied(new_state, Some(activity))
        }
    }
}
