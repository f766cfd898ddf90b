// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::views::Views;
use peopleos_activity::ActivityLog;
use peopleos_domain::{
    AttendanceEvent, Department, Employee, EmployeeFilters, EmployeeId, LeaveRequest,
    LeaveRequestId, PayrollCycle, PerformanceReview, Role, ShiftAssignment,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The complete state of every collection and the employee filters.
///
/// Every collection is ordered newest-first: created entities are placed at
/// index 0. A `State` is never edited in place once published; each command
/// yields a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct State {
    /// Employees.
    pub employees: Vec<Employee>,
    /// Employee list view state.
    pub filters: EmployeeFilters,
    /// Departments.
    pub departments: Vec<Department>,
    /// Roles.
    pub roles: Vec<Role>,
    /// Attendance events.
    pub attendance: Vec<AttendanceEvent>,
    /// Activity log entries.
    pub activity: Vec<ActivityLog>,
    /// Leave requests.
    pub leave_requests: Vec<LeaveRequest>,
    /// Payroll cycles.
    pub payroll: Vec<PayrollCycle>,
    /// Shift assignments.
    pub schedule: Vec<ShiftAssignment>,
    /// Performance reviews.
    pub performance: Vec<PerformanceReview>,
}

impl State {
    /// Creates a state with every collection empty and default filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the seed state, with relative timestamps anchored at `now`.
    #[must_use]
    pub fn seeded(now: OffsetDateTime) -> Self {
        Catalog::seed(now)
    }

    /// Builds the lookup maps and returns the derivation surface.
    #[must_use]
    pub fn views(&self) -> Views<'_> {
        Views::new(self)
    }

    /// Finds an employee by id.
    #[must_use]
    pub fn employee(&self, employee_id: &EmployeeId) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|employee| &employee.id == employee_id)
    }

    /// Finds a leave request by id.
    #[must_use]
    pub fn leave_request(&self, request_id: &LeaveRequestId) -> Option<&LeaveRequest> {
        self.leave_requests
            .iter()
            .find(|request| &request.id == request_id)
    }

    /// Renders collection sizes for log lines.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "employees={},departments={},roles={},attendance={},activity={},leave_requests={}",
            self.employees.len(),
            self.departments.len(),
            self.roles.len(),
            self.attendance.len(),
            self.activity.len(),
            self.leave_requests.len()
        )
    }
}

/// Whether a command changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The command applied; a new state was produced.
    Applied,
    /// The command targeted an id that does not exist; nothing changed.
    Unchanged,
}

/// The result of applying one command.
///
/// The primary mutation and its cascaded activity entry (if any) are both
/// already present in `new_state`; there is no intermediate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the command.
    pub new_state: State,
    /// The activity entry the command cascaded, already prepended to
    /// `new_state.activity`.
    pub activity: Option<ActivityLog>,
    /// Whether the command applied.
    pub outcome: Outcome,
}

impl TransitionResult {
    pub(crate) const fn applied(new_state: State, activity: Option<ActivityLog>) -> Self {
        Self {
            new_state,
            activity,
            outcome: Outcome::Applied,
        }
    }

    pub(crate) fn unchanged(state: &State) -> Self {
        Self {
            new_state: state.clone(),
            activity: None,
            outcome: Outcome::Unchanged,
        }
    }
}
