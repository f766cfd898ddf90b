// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use peopleos_domain::{
    ClockEventType, Employee, EmployeeId, FilterUpdate, LeaveRequestId, LeaveStatus,
    NewDepartment, NewEmployee, NewRole, RoleId,
};
use time::Date;

/// A command represents caller intent as data only.
///
/// Commands are the only way to request state changes. Each one either
/// applies completely or leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an employee with a fresh id, placed first.
    AddEmployee {
        /// The employee fields.
        employee: NewEmployee,
    },
    /// Replace the employee with the same id.
    UpdateEmployee {
        /// The full replacement record.
        employee: Employee,
    },
    /// Remove an employee. References to it elsewhere are left dangling.
    RemoveEmployee {
        /// The employee to remove.
        employee_id: EmployeeId,
    },
    /// Merge fields into the employee list filters.
    SetFilters {
        /// The fields to change.
        update: FilterUpdate,
    },
    /// Create a department with a fresh id, placed first.
    AddDepartment {
        /// The department fields.
        department: NewDepartment,
    },
    /// Create a role with a fresh id, placed first.
    AddRole {
        /// The role fields.
        role: NewRole,
    },
    /// Set or clear an employee's role.
    AssignRole {
        /// The employee to change.
        employee_id: EmployeeId,
        /// The role to assign; `None` clears it.
        role_id: Option<RoleId>,
    },
    /// Record a clock event and its activity entry.
    ClockEvent {
        /// The employee clocking in or out.
        employee_id: EmployeeId,
        /// Clock direction.
        event_type: ClockEventType,
        /// Optional note; blank notes are dropped.
        note: Option<String>,
    },
    /// Create a pending leave request and its activity entry.
    SubmitLeaveRequest {
        /// The requesting employee.
        employee_id: EmployeeId,
        /// First day of leave.
        start_date: Date,
        /// Last day of leave.
        end_date: Date,
        /// Stated reason.
        reason: String,
    },
    /// Decide a leave request and record the decision as activity.
    UpdateLeaveRequestStatus {
        /// The request to update.
        request_id: LeaveRequestId,
        /// The new status.
        status: LeaveStatus,
    },
}

impl Command {
    /// Returns a stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddEmployee { .. } => "AddEmployee",
            Self::UpdateEmployee { .. } => "UpdateEmployee",
            Self::RemoveEmployee { .. } => "RemoveEmployee",
            Self::SetFilters { .. } => "SetFilters",
            Self::AddDepartment { .. } => "AddDepartment",
            Self::AddRole { .. } => "AddRole",
            Self::AssignRole { .. } => "AssignRole",
            Self::ClockEvent { .. } => "ClockEvent",
            Self::SubmitLeaveRequest { .. } => "SubmitLeaveRequest",
            Self::UpdateLeaveRequestStatus { .. } => "UpdateLeaveRequestStatus",
        }
    }
}
