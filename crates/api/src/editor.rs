// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The employee editor form.
//!
//! A draft holds raw form values. It is validated as a whole and only then
//! turned into a payload for the store, with text fields trimmed.

use crate::error::{ApiError, translate_validation_errors};
use peopleos::{State, Views};
use peopleos_domain::{
    Employee, EmployeeFields, EmployeeStatus, NewEmployee, RoleId, validate_employee_fields,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// Department used when no departments exist.
pub const DEFAULT_DEPARTMENT: &str = "Engineering";
/// Location prefilled for new employees.
pub const DEFAULT_LOCATION: &str = "Remote";
/// Salary prefilled for new employees.
pub const DEFAULT_SALARY: i64 = 120_000;
/// Project count prefilled for new employees.
pub const DEFAULT_PROJECTS: i64 = 1;

/// Raw employee editor values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// Full name, untrimmed.
    pub name: String,
    /// Work email, untrimmed.
    pub email: String,
    /// Office or `Remote`.
    pub location: String,
    /// Department name.
    pub department: String,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Annual salary.
    pub salary: i64,
    /// Active project count.
    pub projects: i64,
    /// Selected role; an empty selection is `None`.
    #[serde(default)]
    pub role_id: Option<RoleId>,
    /// Avatar data or reference.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Size in bytes of a newly attached photo, if one was attached.
    #[serde(default)]
    pub photo_bytes: Option<usize>,
}

impl EmployeeDraft {
    /// A blank form: the first department, its first role, and the usual
    /// starting values.
    #[must_use]
    pub fn blank(state: &State) -> Self {
        let department: String = state
            .departments
            .first()
            .map_or_else(|| DEFAULT_DEPARTMENT.to_string(), |d| d.name.clone());
        let role_id: Option<RoleId> = first_role_id(state, &department);

        Self {
            name: String::new(),
            email: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            department,
            status: EmployeeStatus::Active,
            salary: DEFAULT_SALARY,
            projects: DEFAULT_PROJECTS,
            role_id,
            avatar: None,
            photo_bytes: None,
        }
    }

    /// A form prefilled from an existing employee.
    #[must_use]
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            location: employee.location.clone(),
            department: employee.department.clone(),
            status: employee.status,
            salary: i64::from(employee.salary),
            projects: i64::from(employee.projects),
            role_id: employee.role_id.clone(),
            avatar: employee.avatar.clone(),
            photo_bytes: None,
        }
    }

    /// Switches department and selects that department's first role.
    pub fn change_department(&mut self, state: &State, department: &str) {
        self.department = department.to_string();
        self.role_id = first_role_id(state, department);
    }

    /// Checks every field against the editor policy.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ValidationFailed` listing every violated field.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_employee_fields(&EmployeeFields {
            name: &self.name,
            email: &self.email,
            location: &self.location,
            salary: self.salary,
            projects: self.projects,
            avatar_bytes: self.photo_bytes,
        })
        .map_err(translate_validation_errors)
    }

    /// Validates the draft and builds a payload for a new employee.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or a number does not fit.
    pub fn into_new_employee(self, hired_at: Date) -> Result<NewEmployee, ApiError> {
        self.validate()?;
        let salary: u32 = to_u32("salary", self.salary)?;
        let projects: u32 = to_u32("projects", self.projects)?;

        Ok(NewEmployee {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            location: self.location.trim().to_string(),
            department: self.department,
            status: self.status,
            hired_at,
            salary,
            projects,
            role_id: self.role_id.filter(|id| !id.as_str().is_empty()),
            avatar: self.avatar.filter(|avatar| !avatar.is_empty()),
        })
    }

    /// Validates the draft and applies it over an existing employee.
    ///
    /// The id and hire date are kept. A draft without an avatar keeps the
    /// existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or a number does not fit.
    pub fn apply_to(self, existing: &Employee) -> Result<Employee, ApiError> {
        let fallback_avatar: Option<String> = existing.avatar.clone();
        let payload: NewEmployee = self.into_new_employee(existing.hired_at)?;

        Ok(Employee {
            avatar: payload.avatar.clone().or(fallback_avatar),
            ..payload.with_id(existing.id.clone())
        })
    }
}

fn first_role_id(state: &State, department: &str) -> Option<RoleId> {
    Views::new(state)
        .roles_for_department(department)
        .first()
        .map(|role| role.id.clone())
}

fn to_u32(field: &str, value: i64) -> Result<u32, ApiError> {
    u32::try_from(value).map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("{value} is out of range"),
    })
}
