// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::effects::{Clock, IdGenerator, SystemClock, UuidIds};
use crate::state::{Outcome, State, TransitionResult};
use peopleos_activity::ActivityLog;
use peopleos_domain::{
    ClockEventType, Employee, EmployeeId, FilterUpdate, LeaveRequestId, LeaveStatus,
    NewDepartment, NewEmployee, NewRole, RoleId,
};
use std::sync::Arc;
use time::Date;
use tracing::{debug, info};

/// The single owner of the current snapshot.
///
/// Commands go through `&mut self`, so a `Store` has exactly one writer at a
/// time. Readers take an `Arc<State>` from [`Store::snapshot`]; the snapshot
/// they hold is never modified, and each applied command swaps in a new one.
#[derive(Debug)]
pub struct Store<C = SystemClock, G = UuidIds> {
    current: Arc<State>,
    clock: C,
    ids: G,
    last_activity: Option<ActivityLog>,
}

impl Store {
    /// A store holding the seed catalog, anchored at the current time.
    #[must_use]
    pub fn seeded() -> Self {
        let clock: SystemClock = SystemClock;
        Self::with_state(State::seeded(clock.now()), clock, UuidIds)
    }

    /// A store with every collection empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_state(State::new(), SystemClock, UuidIds)
    }
}

impl<C: Clock, G: IdGenerator> Store<C, G> {
    /// Creates a store from an initial state and its effects.
    #[must_use]
    pub fn with_state(state: State, clock: C, ids: G) -> Self {
        Self {
            current: Arc::new(state),
            clock,
            ids,
            last_activity: None,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<State> {
        Arc::clone(&self.current)
    }

    /// Borrows the current snapshot.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.current
    }

    /// The store's clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The store's clock, for tests that need to move time.
    pub const fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// The activity entry cascaded by the most recent dispatch, if any.
    #[must_use]
    pub const fn last_activity(&self) -> Option<&ActivityLog> {
        self.last_activity.as_ref()
    }

    /// Applies one command and publishes the resulting snapshot.
    ///
    /// The primary change and its activity entry become visible together.
    /// A not-found command leaves the current snapshot in place.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let name: &'static str = command.name();
        debug!(command = name, "Dispatching command");

        let result: TransitionResult = apply(&self.current, command, &self.clock, &mut self.ids);
        self.last_activity = result.activity;

        match result.outcome {
            Outcome::Applied => {
                self.current = Arc::new(result.new_state);
                info!(
                    command = name,
                    state = %self.current.summary(),
                    "Command applied"
                );
            }
            Outcome::Unchanged => {
                debug!(command = name, "Command target not found; state unchanged");
            }
        }

        result.outcome
    }

    /// Adds an employee with a fresh id.
    pub fn add_employee(&mut self, employee: NewEmployee) -> Outcome {
        self.dispatch(Command::AddEmployee { employee })
    }

    /// Replaces the employee with the same id.
    pub fn update_employee(&mut self, employee: Employee) -> Outcome {
        self.dispatch(Command::UpdateEmployee { employee })
    }

    /// Removes an employee.
    pub fn remove_employee(&mut self, employee_id: EmployeeId) -> Outcome {
        self.dispatch(Command::RemoveEmployee { employee_id })
    }

    /// Merges fields into the employee filters.
    pub fn set_filters(&mut self, update: FilterUpdate) -> Outcome {
        self.dispatch(Command::SetFilters { update })
    }

    /// Adds a department with a fresh id.
    pub fn add_department(&mut self, department: NewDepartment) -> Outcome {
        self.dispatch(Command::AddDepartment { department })
    }

    /// Adds a role with a fresh id.
    pub fn add_role(&mut self, role: NewRole) -> Outcome {
        self.dispatch(Command::AddRole { role })
    }

    /// Sets or clears an employee's role.
    pub fn assign_role_to_employee(
        &mut self,
        employee_id: EmployeeId,
        role_id: Option<RoleId>,
    ) -> Outcome {
        self.dispatch(Command::AssignRole {
            employee_id,
            role_id,
        })
    }

    /// Records a clock event.
    pub fn clock_event(
        &mut self,
        employee_id: EmployeeId,
        event_type: ClockEventType,
        note: Option<String>,
    ) -> Outcome {
        self.dispatch(Command::ClockEvent {
            employee_id,
            event_type,
            note,
        })
    }

    /// Files a pending leave request.
    pub fn submit_leave_request(
        &mut self,
        employee_id: EmployeeId,
        start_date: Date,
        end_date: Date,
        reason: String,
    ) -> Outcome {
        self.dispatch(Command::SubmitLeaveRequest {
            employee_id,
            start_date,
            end_date,
            reason,
        })
    }

    /// Decides a leave request.
    pub fn update_leave_request_status(
        &mut self,
        request_id: LeaveRequestId,
        status: LeaveStatus,
    ) -> Outcome {
        self.dispatch(Command::UpdateLeaveRequestStatus { request_id, status })
    }
}
