// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.
//!
//! The credential check here is a stand-in for a real identity provider: the
//! accounts are fixed and the passwords are compared in plain text. It exists
//! so the console can be exercised end to end, not to protect anything.

use crate::capabilities::{LEAVE_DECIDERS, Page};
use crate::error::AuthError;
use peopleos_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

/// Console user roles.
///
/// Roles gate which pages and commands a principal may use. They are
/// unrelated to an employee's [`peopleos_domain::PermissionLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access.
    Admin,
    /// People operations.
    Hr,
    /// Team leads: read access to people and operations.
    Manager,
    /// Everyone else: dashboard only.
    Employee,
}

impl UserRole {
    /// Every role.
    pub const ALL: [Self; 4] = [Self::Admin, Self::Hr, Self::Manager, Self::Employee];

    /// Converts this role to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Hr => "hr",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "hr" => Ok(Self::Hr),
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            _ => Err(DomainError::InvalidUserRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated console user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Console role.
    pub role: UserRole,
    /// Team the user belongs to.
    pub department: String,
}

impl Principal {
    /// Returns whether the principal holds one of `roles`.
    #[must_use]
    pub fn has_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }
}

#[derive(Debug, Clone)]
struct ConsoleAccount {
    principal: Principal,
    password: String,
}

/// Checks console credentials against a fixed account list.
#[derive(Debug, Clone)]
pub struct Authenticator {
    accounts: Vec<ConsoleAccount>,
}

impl Authenticator {
    /// The four demo accounts, one per role.
    #[must_use]
    pub fn with_seed_accounts() -> Self {
        let accounts: Vec<ConsoleAccount> = [
            (
                "user-admin",
                "Aria Patel",
                "aria@astrion.io",
                "admin123",
                UserRole::Admin,
                "People Operations",
            ),
            (
                "user-hr",
                "Nia Gomez",
                "nia@astrion.io",
                "peopleops",
                UserRole::Hr,
                "HR Programs",
            ),
            (
                "user-manager",
                "Marcus Lee",
                "marcus@astrion.io",
                "lead123",
                UserRole::Manager,
                "Revenue Operations",
            ),
            (
                "user-employee",
                "Priya Shah",
                "priya@astrion.io",
                "teamwork",
                UserRole::Employee,
                "Product Design",
            ),
        ]
        .into_iter()
        .map(|(id, name, email, password, role, department)| ConsoleAccount {
            principal: Principal {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                role,
                department: department.to_string(),
            },
            password: password.to_string(),
        })
        .collect();

        Self { accounts }
    }

    /// Authenticates an email and password.
    ///
    /// The email is trimmed and compared case-insensitively; the password is
    /// compared exactly.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no account matches.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
        let email: String = email.trim().to_lowercase();

        let account: &ConsoleAccount = self
            .accounts
            .iter()
            .find(|account| account.principal.email == email && account.password == password)
            .ok_or_else(|| {
                debug!(email = %email, "Rejected console login");
                AuthError::InvalidCredentials
            })?;

        info!(
            user = %account.principal.id,
            role = %account.principal.role,
            "Console login"
        );
        Ok(account.principal.clone())
    }

    /// Resolves a previously authenticated principal by account id.
    ///
    /// The claimed role must match the account's role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the id is unknown or the
    /// role does not match.
    pub fn resolve(&self, id: &str, role: UserRole) -> Result<Principal, AuthError> {
        let principal: &Principal = self
            .accounts
            .iter()
            .map(|account| &account.principal)
            .find(|principal| principal.id == id)
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Unknown user: {id}"),
            })?;

        if principal.role != role {
            return Err(AuthError::AuthenticationFailed {
                reason: format!("User {id} does not hold role {role}"),
            });
        }

        Ok(principal.clone())
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Every check follows the console's page table, so a principal who can see
/// a page can also issue the commands that page issues.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the principal may view a page.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal's role is not allowed on the page.
    pub fn authorize_page(principal: &Principal, page: Page) -> Result<(), AuthError> {
        Self::require(principal, page.as_str(), page.allowed_roles())
    }

    /// Checks that the principal may create employees.
    ///
    /// # Errors
    ///
    /// Returns an error unless the principal can open the new-employee page.
    pub fn authorize_create_employee(principal: &Principal) -> Result<(), AuthError> {
        Self::require(principal, "create_employee", Page::NewEmployee.allowed_roles())
    }

    /// Checks that the principal may update or remove employees.
    ///
    /// # Errors
    ///
    /// Returns an error unless the principal can open the edit-employee page.
    pub fn authorize_edit_employee(principal: &Principal) -> Result<(), AuthError> {
        Self::require(principal, "edit_employee", Page::EditEmployee.allowed_roles())
    }

    /// Checks that the principal may create departments and roles and
    /// assign roles.
    ///
    /// # Errors
    ///
    /// Returns an error unless the principal can open the departments page.
    pub fn authorize_manage_departments(principal: &Principal) -> Result<(), AuthError> {
        Self::require(
            principal,
            "manage_departments",
            Page::Departments.allowed_roles(),
        )
    }

    /// Checks that the principal may approve or decline leave.
    ///
    /// # Errors
    ///
    /// Returns an error for the employee role.
    pub fn authorize_decide_leave(principal: &Principal) -> Result<(), AuthError> {
        Self::require(principal, "decide_leave", LEAVE_DECIDERS)
    }

    fn require(principal: &Principal, action: &str, roles: &[UserRole]) -> Result<(), AuthError> {
        if principal.has_role(roles) {
            return Ok(());
        }

        let required_roles: Vec<&str> = roles.iter().map(UserRole::as_str).collect();
        Err(AuthError::Unauthorized {
            action: action.to_string(),
            required_roles: required_roles.join(", "),
        })
    }
}
