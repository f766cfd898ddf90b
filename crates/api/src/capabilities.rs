// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page gating and capability computation for the console.
//!
//! Capabilities tell the console which controls to show. They are advisory
//! only and do not replace the checks in
//! [`crate::auth::AuthorizationService`].

use crate::auth::{Principal, UserRole};
use serde::{Deserialize, Serialize};

const EVERYONE: &[UserRole] = &UserRole::ALL;
const PEOPLE_READERS: &[UserRole] = &[UserRole::Admin, UserRole::Hr, UserRole::Manager];
const PEOPLE_EDITORS: &[UserRole] = &[UserRole::Admin, UserRole::Hr];

/// Roles that may approve or decline leave.
pub const LEAVE_DECIDERS: &[UserRole] = PEOPLE_READERS;

/// Console pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Home dashboard.
    Dashboard,
    /// Employee directory.
    Employees,
    /// New-employee editor.
    NewEmployee,
    /// Single employee profile.
    EmployeeProfile,
    /// Existing-employee editor.
    EditEmployee,
    /// Departments and roles.
    Departments,
    /// Payroll, schedule and reviews.
    Operations,
}

impl Page {
    /// Converts this page to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Employees => "employees",
            Self::NewEmployee => "new_employee",
            Self::EmployeeProfile => "employee_profile",
            Self::EditEmployee => "edit_employee",
            Self::Departments => "departments",
            Self::Operations => "operations",
        }
    }

    /// Roles allowed to open this page.
    #[must_use]
    pub const fn allowed_roles(&self) -> &'static [UserRole] {
        match self {
            Self::Dashboard => EVERYONE,
            Self::Employees | Self::NewEmployee | Self::EmployeeProfile | Self::Operations => {
                PEOPLE_READERS
            }
            Self::EditEmployee | Self::Departments => PEOPLE_EDITORS,
        }
    }
}

/// What the console should do when a page is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Show the page.
    Allowed,
    /// Nobody is signed in.
    RedirectToLogin,
    /// Signed in, but the role may not open the page.
    RedirectToHome,
}

/// Decides whether a page may be shown.
#[must_use]
pub fn gate(principal: Option<&Principal>, page: Page) -> AccessDecision {
    match principal {
        None => AccessDecision::RedirectToLogin,
        Some(principal) if principal.has_role(page.allowed_roles()) => AccessDecision::Allowed,
        Some(_) => AccessDecision::RedirectToHome,
    }
}

/// A capability flag.
///
/// Serializes as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(Self::from_bool)
    }
}

/// Controls the console may show for one principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleCapabilities {
    /// Employee directory and profiles.
    pub can_view_employees: Capability,
    /// New-employee editor.
    pub can_create_employee: Capability,
    /// Edit and remove employees.
    pub can_edit_employee: Capability,
    /// Departments, roles and role assignment.
    pub can_manage_departments: Capability,
    /// Payroll, schedule and reviews.
    pub can_view_operations: Capability,
    /// Approve or decline leave.
    pub can_decide_leave: Capability,
}

/// Computes the capabilities of a principal.
#[must_use]
pub fn compute_capabilities(principal: &Principal) -> ConsoleCapabilities {
    let allows = |page: Page| Capability::from_bool(principal.has_role(page.allowed_roles()));

    ConsoleCapabilities {
        can_view_employees: allows(Page::Employees),
        can_create_employee: allows(Page::NewEmployee),
        can_edit_employee: allows(Page::EditEmployee),
        can_manage_departments: allows(Page::Departments),
        can_view_operations: allows(Page::Operations),
        can_decide_leave: Capability::from_bool(principal.has_role(LEAVE_DECIDERS)),
    }
}
