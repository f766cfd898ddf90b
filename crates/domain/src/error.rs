// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing or validating domain values.
///
/// The state engine itself never produces these: commands are applied or
/// ignored, never rejected. They surface at the boundaries that turn text
/// into typed values, and from the employee editor field policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Employee status is not one of the known values.
    InvalidEmployeeStatus(String),
    /// Permission level is not one of the known values.
    InvalidPermission(String),
    /// Clock event type is not one of the known values.
    InvalidClockEventType(String),
    /// Leave status is not one of the known values.
    InvalidLeaveStatus(String),
    /// Payroll status is not one of the known values.
    InvalidPayrollStatus(String),
    /// Shift type is not one of the known values.
    InvalidShiftType(String),
    /// Shift status is not one of the known values.
    InvalidShiftStatus(String),
    /// Review rating is not one of the known values.
    InvalidReviewRating(String),
    /// Activity category is not one of the known values.
    InvalidActivityCategory(String),
    /// Activity severity is not one of the known values.
    InvalidActivitySeverity(String),
    /// Console user role is not one of the known values.
    InvalidUserRole(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// An editor field violated the field policy.
    InvalidField {
        /// The field name.
        field: &'static str,
        /// The human-readable violation message.
        message: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmployeeStatus(value) => {
                write!(f, "Invalid employee status: '{value}'")
            }
            Self::InvalidPermission(value) => write!(f, "Invalid permission level: '{value}'"),
            Self::InvalidClockEventType(value) => {
                write!(f, "Invalid clock event type: '{value}'")
            }
            Self::InvalidLeaveStatus(value) => write!(f, "Invalid leave status: '{value}'"),
            Self::InvalidPayrollStatus(value) => write!(f, "Invalid payroll status: '{value}'"),
            Self::InvalidShiftType(value) => write!(f, "Invalid shift type: '{value}'"),
            Self::InvalidShiftStatus(value) => write!(f, "Invalid shift status: '{value}'"),
            Self::InvalidReviewRating(value) => write!(f, "Invalid review rating: '{value}'"),
            Self::InvalidActivityCategory(value) => {
                write!(f, "Invalid activity category: '{value}'")
            }
            Self::InvalidActivitySeverity(value) => {
                write!(f, "Invalid activity severity: '{value}'")
            }
            Self::InvalidUserRole(value) => write!(f, "Invalid user role: '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidField { field, message } => {
                write!(f, "Invalid {field}: {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
