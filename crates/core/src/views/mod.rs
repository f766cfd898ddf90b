// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only derivations over one state snapshot.
//!
//! A [`Views`] is built from a `&State` and never outlives it, so nothing
//! derived here can go stale: a new snapshot needs a new `Views`. The id
//! lookup maps are built once in [`Views::new`] and shared by every
//! derivation.

mod attendance;
mod departments;
mod employees;
mod operations;
mod profile;

pub use attendance::{AttendanceSnapshot, DailyPresence, Presence};
pub use departments::{DepartmentSummary, PermissionStats};
pub use employees::{EmployeeStats, StatusCount};
pub use profile::{EmployeeProfile, PROFILE_MENTIONS, PROFILE_RECENT_EVENTS};

use crate::state::State;
use peopleos_domain::{Employee, EmployeeId, Role, RoleId};
use std::collections::HashMap;

/// Derivations over a single snapshot.
#[derive(Debug)]
pub struct Views<'a> {
    state: &'a State,
    roles: HashMap<&'a RoleId, &'a Role>,
    employees: HashMap<&'a EmployeeId, &'a Employee>,
}

impl<'a> Views<'a> {
    /// Builds the role and employee lookup maps for `state`.
    #[must_use]
    pub fn new(state: &'a State) -> Self {
        let roles: HashMap<&'a RoleId, &'a Role> =
            state.roles.iter().map(|role| (&role.id, role)).collect();
        let employees: HashMap<&'a EmployeeId, &'a Employee> = state
            .employees
            .iter()
            .map(|employee| (&employee.id, employee))
            .collect();

        Self {
            state,
            roles,
            employees,
        }
    }

    /// The snapshot these views read.
    #[must_use]
    pub const fn state(&self) -> &'a State {
        self.state
    }

    /// Resolves a role id.
    #[must_use]
    pub fn role(&self, role_id: &RoleId) -> Option<&'a Role> {
        self.roles.get(role_id).copied()
    }

    /// Resolves an employee id.
    #[must_use]
    pub fn employee(&self, employee_id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.get(employee_id).copied()
    }

    /// Resolves an employee's role, if it has one that exists.
    #[must_use]
    pub fn role_of(&self, employee: &Employee) -> Option<&'a Role> {
        employee
            .role_id
            .as_ref()
            .and_then(|role_id| self.role(role_id))
    }
}
