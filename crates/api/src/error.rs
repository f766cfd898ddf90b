// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use peopleos_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The email and password did not match a console account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The caller could not be identified.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    /// The caller's role does not permit the action.
    #[error("Unauthorized: '{action}' requires one of: {required_roles}")]
    Unauthorized {
        action: String,
        required_roles: String,
    },
}

/// One violated editor field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field name.
    pub field: String,
    /// The message shown next to the field.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the caller's role does not permit the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The roles allowed to perform it.
        required_roles: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// One or more editor fields failed validation.
    ValidationFailed {
        /// Every violated field, in form order.
        errors: Vec<FieldError>,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_roles,
            } => {
                write!(f, "Unauthorized: '{action}' requires one of: {required_roles}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ValidationFailed { errors } => {
                let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Validation failed: {}", details.join("; "))
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_roles,
            } => Self::Unauthorized {
                action,
                required_roles,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    let field: &str = match err {
        DomainError::InvalidPermission(_) => "permission",
        DomainError::InvalidClockEventType(_) => "type",
        DomainError::InvalidEmployeeStatus(_)
        | DomainError::InvalidLeaveStatus(_)
        | DomainError::InvalidPayrollStatus(_)
        | DomainError::InvalidShiftStatus(_) => "status",
        DomainError::InvalidShiftType(_) => "shift_type",
        DomainError::InvalidReviewRating(_) => "rating",
        DomainError::InvalidActivityCategory(_) => "category",
        DomainError::InvalidActivitySeverity(_) => "severity",
        DomainError::InvalidUserRole(_) => "role",
        DomainError::DateParseError { .. } => "date",
        DomainError::InvalidField { field, message } => {
            return ApiError::InvalidInput {
                field: (*field).to_string(),
                message: message.clone(),
            };
        }
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a batch of editor field violations into a single API error.
#[must_use]
pub fn translate_validation_errors(errors: Vec<DomainError>) -> ApiError {
    ApiError::ValidationFailed {
        errors: errors
            .into_iter()
            .map(|err| match translate_domain_error(&err) {
                ApiError::InvalidInput { field, message } => FieldError { field, message },
                other => FieldError {
                    field: String::from("form"),
                    message: other.to_string(),
                },
            })
            .collect(),
    }
}
