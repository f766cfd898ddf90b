// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-mostly operational records: payroll, shifts, reviews.
//!
//! No command mutates these; they exist for derived views such as the next
//! shift of an employee or the next payroll cycle.

use crate::error::DomainError;
use crate::ids::{EmployeeId, PayrollCycleId, ReviewId, ShiftId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Processing state of a payroll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayrollStatus {
    /// Being prepared.
    Draft,
    /// Being processed.
    Processing,
    /// Approved for payout.
    Approved,
    /// Paid out.
    Paid,
}

impl PayrollStatus {
    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Processing => "Processing",
            Self::Approved => "Approved",
            Self::Paid => "Paid",
        }
    }
}

impl FromStr for PayrollStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Processing" => Ok(Self::Processing),
            "Approved" => Ok(Self::Approved),
            "Paid" => Ok(Self::Paid),
            _ => Err(DomainError::InvalidPayrollStatus(s.to_string())),
        }
    }
}

/// A payroll cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCycle {
    /// Unique cycle identifier.
    pub id: PayrollCycleId,
    /// Display label, e.g. "Jun 16 — Jun 30".
    pub label: String,
    /// First day of the pay period.
    pub period_start: Date,
    /// Last day of the pay period.
    pub period_end: Date,
    /// Last day for changes.
    pub cut_off_date: Date,
    /// Payout day.
    pub payout_date: Date,
    /// Processing state.
    pub status: PayrollStatus,
    /// Gross total across all employees.
    pub total_gross: u64,
    /// Net total across all employees.
    pub total_net: u64,
}

/// Time-of-day slot of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Morning slot.
    Morning,
    /// Midday slot.
    Midday,
    /// Evening slot.
    Evening,
    /// Night slot.
    Night,
}

impl FromStr for ShiftType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(Self::Morning),
            "Midday" => Ok(Self::Midday),
            "Evening" => Ok(Self::Evening),
            "Night" => Ok(Self::Night),
            _ => Err(DomainError::InvalidShiftType(s.to_string())),
        }
    }
}

/// Progress of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftStatus {
    /// Not started yet.
    Scheduled,
    /// Running now.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Done.
    Completed,
    /// Not attended.
    Missed,
}

impl FromStr for ShiftStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Missed" => Ok(Self::Missed),
            _ => Err(DomainError::InvalidShiftStatus(s.to_string())),
        }
    }
}

/// A shift assigned to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Unique shift identifier.
    pub id: ShiftId,
    /// Assigned employee. Not validated.
    pub employee_id: EmployeeId,
    /// Day of the shift.
    pub shift_date: Date,
    /// Time-of-day slot.
    pub shift_type: ShiftType,
    /// Where the shift takes place.
    pub location: String,
    /// Progress.
    pub status: ShiftStatus,
    /// Optional notes.
    pub notes: Option<String>,
}

/// Outcome rating of a performance review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewRating {
    /// Exceeds expectations.
    Exceeds,
    /// Strong.
    Strong,
    /// Solid.
    Solid,
    /// Developing.
    Developing,
}

impl FromStr for ReviewRating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Exceeds" => Ok(Self::Exceeds),
            "Strong" => Ok(Self::Strong),
            "Solid" => Ok(Self::Solid),
            "Developing" => Ok(Self::Developing),
            _ => Err(DomainError::InvalidReviewRating(s.to_string())),
        }
    }
}

/// A performance review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Reviewed employee. Not validated.
    pub employee_id: EmployeeId,
    /// Reviewer's name.
    pub reviewer: String,
    /// Review focus area.
    pub focus: String,
    /// Outcome rating.
    pub rating: ReviewRating,
    /// When the review was submitted.
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    /// Next scheduled check-in.
    pub next_check_in: Date,
    /// Notable achievements.
    pub highlights: Vec<String>,
}
