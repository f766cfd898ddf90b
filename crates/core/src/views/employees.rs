// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::Views;
use peopleos_domain::{Employee, EmployeeFilters, EmployeeStatus};
use serde::{Deserialize, Serialize};

/// Headline employee counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeStats {
    /// All employees.
    pub total: usize,
    /// Employees with status Active.
    pub active: usize,
    /// Employees with status On Leave.
    pub on_leave: usize,
    /// Mean salary rounded to the nearest integer; 0 with no employees.
    pub avg_salary: u64,
}

/// Number of employees with one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// The status.
    pub status: EmployeeStatus,
    /// Employees with it.
    pub count: usize,
}

/// Integer division rounding halves up. `denominator` must be non-zero.
const fn rounded_div(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

impl<'a> Views<'a> {
    /// Employees passing the snapshot's current filters, in collection order.
    #[must_use]
    pub fn filtered_employees(&self) -> Vec<&'a Employee> {
        self.employees_matching(&self.state.filters)
    }

    /// Employees passing `filters`, in collection order.
    ///
    /// The department and status filters match exactly unless they are the
    /// `All` sentinel. A blank search matches everything; otherwise the
    /// search text must appear, case-insensitively, in the employee's name
    /// or resolved role title.
    #[must_use]
    pub fn employees_matching(&self, filters: &EmployeeFilters) -> Vec<&'a Employee> {
        let needle: Option<String> = if filters.search.trim().is_empty() {
            None
        } else {
            Some(filters.search.to_lowercase())
        };

        self.state
            .employees
            .iter()
            .filter(|employee| filters.department.matches(&employee.department))
            .filter(|employee| filters.status.matches(employee.status))
            .filter(|employee| {
                needle.as_deref().is_none_or(|needle| {
                    employee.name.to_lowercase().contains(needle)
                        || self
                            .role_of(employee)
                            .is_some_and(|role| role.title.to_lowercase().contains(needle))
                })
            })
            .collect()
    }

    /// Counts and average salary across all employees.
    #[must_use]
    pub fn stats(&self) -> EmployeeStats {
        let employees: &[Employee] = &self.state.employees;
        let total: usize = employees.len();
        let salaries: u64 = employees.iter().map(|e| u64::from(e.salary)).sum();

        EmployeeStats {
            total,
            active: self.count_with_status(EmployeeStatus::Active),
            on_leave: self.count_with_status(EmployeeStatus::OnLeave),
            avg_salary: if total == 0 {
                0
            } else {
                rounded_div(salaries, total as u64)
            },
        }
    }

    /// Employee counts for every status, in display order.
    #[must_use]
    pub fn status_distribution(&self) -> Vec<StatusCount> {
        EmployeeStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: self.count_with_status(status),
            })
            .collect()
    }

    /// Share of employees who are Active, as a rounded percentage.
    #[must_use]
    pub fn engagement_rate(&self) -> u64 {
        let total: u64 = self.state.employees.len() as u64;
        if total == 0 {
            return 0;
        }
        rounded_div(self.count_with_status(EmployeeStatus::Active) as u64 * 100, total)
    }

    fn count_with_status(&self, status: EmployeeStatus) -> usize {
        self.state
            .employees
            .iter()
            .filter(|employee| employee.status == status)
            .count()
    }
}
