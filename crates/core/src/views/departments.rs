// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::Views;
use peopleos_domain::{DepartmentId, Employee, PermissionLevel, Role};
use serde::{Deserialize, Serialize};

/// Headcount breakdown for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// Department id.
    pub id: DepartmentId,
    /// Department name.
    pub name: String,
    /// Department description.
    pub description: String,
    /// Employees whose department name matches.
    pub headcount: usize,
    /// Members whose resolved role has Admin permission.
    pub admins: usize,
    /// `headcount - admins`, never negative.
    pub staff: usize,
}

/// Organisation-wide permission split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionStats {
    /// Employees with an Admin role.
    pub admins: usize,
    /// Everyone else, including employees without a resolvable role.
    pub staff: usize,
}

impl<'a> Views<'a> {
    /// The effective permission of an employee; unresolved roles are Staff.
    #[must_use]
    pub fn permission_of(&self, employee: &Employee) -> PermissionLevel {
        self.role_of(employee)
            .map_or(PermissionLevel::Staff, |role| role.permission)
    }

    /// One summary per department, in collection order.
    #[must_use]
    pub fn department_summaries(&self) -> Vec<DepartmentSummary> {
        self.state
            .departments
            .iter()
            .map(|department| {
                let members: Vec<&Employee> = self
                    .state
                    .employees
                    .iter()
                    .filter(|employee| employee.department == department.name)
                    .collect();
                let admins: usize = members
                    .iter()
                    .filter(|employee| self.permission_of(employee) == PermissionLevel::Admin)
                    .count();

                DepartmentSummary {
                    id: department.id.clone(),
                    name: department.name.clone(),
                    description: department.description.clone(),
                    headcount: members.len(),
                    admins,
                    staff: members.len().saturating_sub(admins),
                }
            })
            .collect()
    }

    /// The `limit` largest departments by headcount; ties keep collection
    /// order.
    #[must_use]
    pub fn top_departments(&self, limit: usize) -> Vec<DepartmentSummary> {
        let mut summaries: Vec<DepartmentSummary> = self.department_summaries();
        summaries.sort_by_key(|s| std::cmp::Reverse(s.headcount));
        summaries.truncate(limit);
        summaries
    }

    /// Admin vs staff counts across all employees.
    #[must_use]
    pub fn permission_stats(&self) -> PermissionStats {
        let admins: usize = self
            .state
            .employees
            .iter()
            .filter(|employee| self.permission_of(employee) == PermissionLevel::Admin)
            .count();

        PermissionStats {
            admins,
            staff: self.state.employees.len() - admins,
        }
    }

    /// Roles belonging to the named department, in collection order.
    #[must_use]
    pub fn roles_for_department(&self, department: &str) -> Vec<&'a Role> {
        self.state
            .roles
            .iter()
            .filter(|role| role.department == department)
            .collect()
    }
}
