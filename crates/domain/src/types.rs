// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{DepartmentId, EmployeeId, RoleId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EmployeeStatus {
    /// Currently working.
    #[default]
    Active,
    /// Temporarily away.
    #[serde(rename = "On Leave")]
    OnLeave,
    /// No longer working.
    Inactive,
}

impl EmployeeStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::OnLeave, Self::Inactive];

    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Inactive => "Inactive",
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "On Leave" => Ok(Self::OnLeave),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidEmployeeStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission level granted by a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PermissionLevel {
    /// Department administrator.
    Admin,
    /// Regular staff.
    #[default]
    Staff,
}

impl PermissionLevel {
    /// Converts this permission level to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Staff => "Staff",
        }
    }
}

impl FromStr for PermissionLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Staff" => Ok(Self::Staff),
            _ => Err(DomainError::InvalidPermission(s.to_string())),
        }
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An employee record.
///
/// `department` holds a department *name*, not an id, and `role_id` is a weak
/// reference into the role collection. Neither is checked by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Department name.
    pub department: String,
    /// Work email.
    pub email: String,
    /// Office or city.
    pub location: String,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Date of hire.
    pub hired_at: Date,
    /// Annual salary.
    pub salary: u32,
    /// Number of active projects.
    pub projects: u32,
    /// Assigned role, if any.
    pub role_id: Option<RoleId>,
    /// Opaque avatar blob or reference.
    pub avatar: Option<String>,
}

/// Employee fields supplied by a caller when creating an employee.
///
/// The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Full name.
    pub name: String,
    /// Department name.
    pub department: String,
    /// Work email.
    pub email: String,
    /// Office or city.
    pub location: String,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Date of hire.
    pub hired_at: Date,
    /// Annual salary.
    pub salary: u32,
    /// Number of active projects.
    pub projects: u32,
    /// Assigned role, if any.
    pub role_id: Option<RoleId>,
    /// Opaque avatar blob or reference.
    pub avatar: Option<String>,
}

impl NewEmployee {
    /// Attaches an id, producing a full employee record.
    #[must_use]
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            department: self.department,
            email: self.email,
            location: self.location,
            status: self.status,
            hired_at: self.hired_at,
            salary: self.salary,
            projects: self.projects,
            role_id: self.role_id,
            avatar: self.avatar,
        }
    }
}

/// A department.
///
/// Names are unique by convention only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department identifier.
    pub id: DepartmentId,
    /// Department name.
    pub name: String,
    /// Short description.
    pub description: String,
}

/// Department fields supplied by a caller when creating a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDepartment {
    /// Department name.
    pub name: String,
    /// Short description.
    pub description: String,
}

impl NewDepartment {
    /// Attaches an id, producing a full department record.
    #[must_use]
    pub fn with_id(self, id: DepartmentId) -> Department {
        Department {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// A role: a permission template within a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: RoleId,
    /// Job title.
    pub title: String,
    /// Department name this role belongs to.
    pub department: String,
    /// Permission level granted.
    pub permission: PermissionLevel,
}

/// Role fields supplied by a caller when creating a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRole {
    /// Job title.
    pub title: String,
    /// Department name this role belongs to.
    pub department: String,
    /// Permission level granted.
    pub permission: PermissionLevel,
}

impl NewRole {
    /// Attaches an id, producing a full role record.
    #[must_use]
    pub fn with_id(self, id: RoleId) -> Role {
        Role {
            id,
            title: self.title,
            department: self.department,
            permission: self.permission,
        }
    }
}

/// The sentinel filter value that passes everything through.
pub const FILTER_ALL: &str = "All";

/// Status filter: a specific status or the `All` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    /// Pass-through.
    #[default]
    All,
    /// Only employees with this status.
    Only(EmployeeStatus),
}

impl StatusFilter {
    /// Returns whether the status passes this filter.
    #[must_use]
    pub fn matches(&self, status: EmployeeStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == FILTER_ALL {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        match value {
            StatusFilter::All => Self::from(FILTER_ALL),
            StatusFilter::Only(status) => Self::from(status.as_str()),
        }
    }
}

/// Department filter: a department name or the `All` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DepartmentFilter {
    /// Pass-through.
    #[default]
    All,
    /// Only employees whose department name matches exactly.
    Named(String),
}

impl DepartmentFilter {
    /// Returns whether the department name passes this filter.
    #[must_use]
    pub fn matches(&self, department: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == department,
        }
    }
}

impl From<String> for DepartmentFilter {
    fn from(value: String) -> Self {
        if value == FILTER_ALL {
            Self::All
        } else {
            Self::Named(value)
        }
    }
}

impl From<&str> for DepartmentFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<DepartmentFilter> for String {
    fn from(value: DepartmentFilter) -> Self {
        match value {
            DepartmentFilter::All => Self::from(FILTER_ALL),
            DepartmentFilter::Named(name) => name,
        }
    }
}

/// Transient employee list view state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeFilters {
    /// Case-insensitive search text matched against name or role title.
    pub search: String,
    /// Status filter.
    pub status: StatusFilter,
    /// Department filter.
    pub department: DepartmentFilter,
}

impl EmployeeFilters {
    /// Merges the supplied fields; unspecified fields keep their value.
    #[must_use]
    pub fn merged(&self, update: FilterUpdate) -> Self {
        Self {
            search: update.search.unwrap_or_else(|| self.search.clone()),
            status: update.status.unwrap_or(self.status),
            department: update
                .department
                .unwrap_or_else(|| self.department.clone()),
        }
    }
}

/// A partial filter update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterUpdate {
    /// New search text.
    #[serde(default)]
    pub search: Option<String>,
    /// New status filter.
    #[serde(default)]
    pub status: Option<StatusFilter>,
    /// New department filter.
    #[serde(default)]
    pub department: Option<DepartmentFilter>,
}
