// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance events and leave requests.

use crate::error::DomainError;
use crate::ids::{AttendanceEventId, EmployeeId, LeaveRequestId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Direction of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockEventType {
    /// Employee started working.
    ClockIn,
    /// Employee stopped working.
    ClockOut,
}

impl ClockEventType {
    /// Converts this event type to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClockIn => "CLOCK_IN",
            Self::ClockOut => "CLOCK_OUT",
        }
    }

    /// Returns the past-tense verb used in activity titles.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::ClockIn => "clocked in",
            Self::ClockOut => "clocked out",
        }
    }
}

impl FromStr for ClockEventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLOCK_IN" => Ok(Self::ClockIn),
            "CLOCK_OUT" => Ok(Self::ClockOut),
            _ => Err(DomainError::InvalidClockEventType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ClockEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence status derived from an employee's most recent event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    /// Clocked in.
    In,
    /// Clocked out, or never clocked in.
    #[default]
    Out,
}

impl From<ClockEventType> for AttendanceStatus {
    fn from(value: ClockEventType) -> Self {
        match value {
            ClockEventType::ClockIn => Self::In,
            ClockEventType::ClockOut => Self::Out,
        }
    }
}

/// A clock-in or clock-out record.
///
/// Events are append-only and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// Unique event identifier.
    pub id: AttendanceEventId,
    /// The employee this event belongs to. Not validated.
    pub employee_id: EmployeeId,
    /// Clock direction.
    #[serde(rename = "type")]
    pub event_type: ClockEventType,
    /// When the event happened.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Decision state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LeaveStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Approved.
    Approved,
    /// Declined.
    Declined,
}

impl LeaveStatus {
    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Declined => "Declined",
        }
    }
}

impl FromStr for LeaveStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Declined" => Ok(Self::Declined),
            _ => Err(DomainError::InvalidLeaveStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leave request.
///
/// Only `status` changes after creation. `start_date <= end_date` is not
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique request identifier.
    pub id: LeaveRequestId,
    /// Requesting employee. Not validated.
    pub employee_id: EmployeeId,
    /// First day of leave.
    pub start_date: Date,
    /// Last day of leave.
    pub end_date: Date,
    /// Stated reason.
    pub reason: String,
    /// Decision state.
    pub status: LeaveStatus,
    /// When the request was submitted.
    #[serde(with = "time::serde::rfc3339")]
    pub requested_at: OffsetDateTime,
}
