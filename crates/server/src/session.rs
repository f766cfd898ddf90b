// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller extraction for the server.
//!
//! The console sends the signed-in account id and role on every request.
//! The pair is checked against the account list before any handler runs.

use std::str::FromStr;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use peopleos_api::{Principal, UserRole};
use tracing::{debug, warn};

use crate::{AppState, HttpError};

/// Header carrying the caller's account id.
pub const USER_HEADER: &str = "x-peopleos-user";
/// Header carrying the caller's console role.
pub const ROLE_HEADER: &str = "x-peopleos-role";

/// Extractor for the calling principal.
///
/// # Errors
///
/// Rejects with HTTP 401 if either header is missing or not valid text,
/// the role is unknown, or the account does not hold that role.
pub struct Caller(pub Principal);

impl FromRequestParts<AppState> for Caller {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user: &str = header(parts, USER_HEADER)?;
        let role: UserRole = UserRole::from_str(header(parts, ROLE_HEADER)?).map_err(|e| {
            warn!(error = %e, "Unknown role header");
            SessionError::InvalidHeader(ROLE_HEADER)
        })?;

        let principal: Principal = state.authenticator.resolve(user, role).map_err(|e| {
            warn!(error = %e, "Caller resolution failed");
            SessionError::UnknownCaller(e.to_string())
        })?;

        debug!(user = %principal.id, role = %principal.role, "Caller resolved");
        Ok(Self(principal))
    }
}

fn header<'a>(parts: &'a Parts, name: &'static str) -> Result<&'a str, SessionError> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| {
            debug!(header = name, "Missing caller header");
            SessionError::MissingHeader(name)
        })?
        .to_str()
        .map_err(|_| {
            warn!(header = name, "Invalid caller header encoding");
            SessionError::InvalidHeader(name)
        })
}

/// Caller extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// A caller header is missing.
    MissingHeader(&'static str),
    /// A caller header is not valid.
    InvalidHeader(&'static str),
    /// The account id and role do not match an account.
    UnknownCaller(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingHeader(name) => format!("Missing {name} header"),
            Self::InvalidHeader(name) => format!("Invalid {name} header"),
            Self::UnknownCaller(reason) => reason,
        };

        HttpError {
            status: StatusCode::UNAUTHORIZED,
            code: "unauthenticated",
            message,
            fields: Vec::new(),
        }
        .into_response()
    }
}
