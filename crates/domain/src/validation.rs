// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee editor field policy.
//!
//! The store accepts any structurally valid payload. These rules belong to the
//! editor that builds the payload and are applied before a command is issued.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// Lowest salary the editor accepts.
pub const MIN_SALARY: i64 = 50_000;

/// Largest avatar upload the editor accepts, in bytes.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// Raw editor fields, before trimming and conversion.
///
/// Numbers are signed because the form can hold values the policy rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeFields<'a> {
    /// Full name.
    pub name: &'a str,
    /// Work email.
    pub email: &'a str,
    /// Office or city.
    pub location: &'a str,
    /// Annual salary.
    pub salary: i64,
    /// Number of active projects.
    pub projects: i64,
    /// Size of a newly attached avatar upload, if any.
    pub avatar_bytes: Option<usize>,
}

/// Validates editor fields, collecting every violation.
///
/// # Arguments
///
/// * `fields` - The raw editor fields
///
/// # Returns
///
/// * `Ok(())` if every field satisfies the policy
/// * `Err(Vec<DomainError>)` with one `InvalidField` per violated field, in
///   form order
///
/// # Errors
///
/// Returns an error if:
/// - The name, email or location is blank
/// - The email is not shaped like `local@domain.tld`
/// - The salary is below [`MIN_SALARY`]
/// - The project count is negative
/// - The avatar upload exceeds [`MAX_AVATAR_BYTES`]
pub fn validate_employee_fields(fields: &EmployeeFields<'_>) -> Result<(), Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();

    if fields.name.trim().is_empty() {
        errors.push(invalid("name", "Full name is required."));
    }

    let email: &str = fields.email.trim();
    if email.is_empty() {
        errors.push(invalid("email", "Email is required."));
    } else if !is_valid_email(email) {
        errors.push(invalid("email", "Enter a valid email address."));
    }

    if fields.location.trim().is_empty() {
        errors.push(invalid("location", "Location is required."));
    }

    if fields.salary < MIN_SALARY {
        errors.push(invalid("salary", "Salary must be at least 50,000."));
    }

    if fields.projects < 0 {
        errors.push(invalid("projects", "Projects cannot be negative."));
    }

    if fields.avatar_bytes.is_some_and(|size| size > MAX_AVATAR_BYTES) {
        errors.push(invalid("photo", "Profile image must be 2MB or smaller."));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that an address looks like `local@domain.tld`.
///
/// No whitespace anywhere, exactly one `@`, a non-empty local part, and a
/// domain containing a dot with at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

fn invalid(field: &'static str, message: &str) -> DomainError {
    DomainError::InvalidField {
        field,
        message: message.to_string(),
    }
}
