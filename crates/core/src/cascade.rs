// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity entries derived from primary mutations.
//!
//! Each builder describes one command in human-readable form. Names are
//! resolved against the state the command was applied to.

use crate::state::State;
use peopleos_activity::{ActivityCategory, ActivityLog, ActivitySeverity};
use peopleos_domain::{ActivityId, AttendanceEvent, EmployeeId, LeaveRequest, LeaveStatus};
use time::OffsetDateTime;

/// Display name used when an employee id does not resolve.
pub const FALLBACK_DISPLAY_NAME: &str = "Team member";

/// Resolves an employee's display name, falling back to
/// [`FALLBACK_DISPLAY_NAME`].
pub fn display_name<'a>(state: &'a State, employee_id: &EmployeeId) -> &'a str {
    state
        .employee(employee_id)
        .map_or(FALLBACK_DISPLAY_NAME, |employee| employee.name.as_str())
}

/// Describes a clock event.
///
/// The note, when present, becomes the detail; otherwise a generic presence
/// sentence is used.
pub fn clock_activity(name: &str, event: &AttendanceEvent, id: ActivityId) -> ActivityLog {
    let detail: String = event
        .note
        .clone()
        .unwrap_or_else(|| format!("{name} updated presence"));

    ActivityLog::new(
        id,
        format!("{name} {}", event.event_type.verb()),
        detail,
        ActivityCategory::Attendance,
        ActivitySeverity::Info,
        event.timestamp,
    )
}

/// Describes a newly submitted leave request.
pub fn leave_submitted_activity(
    name: &str,
    request: &LeaveRequest,
    id: ActivityId,
) -> ActivityLog {
    ActivityLog::new(
        id,
        format!("{name} submitted leave"),
        format!("{} → {}", request.start_date, request.end_date),
        ActivityCategory::Leave,
        ActivitySeverity::Warning,
        request.requested_at,
    )
}

/// Describes a leave decision.
///
/// `request` is the request as it was before the decision; only its dates are
/// read. Approvals are informational, anything else is critical.
pub fn leave_decision_activity(
    name: &str,
    request: &LeaveRequest,
    status: LeaveStatus,
    id: ActivityId,
    timestamp: OffsetDateTime,
) -> ActivityLog {
    let severity: ActivitySeverity = if status == LeaveStatus::Approved {
        ActivitySeverity::Info
    } else {
        ActivitySeverity::Critical
    };

    ActivityLog::new(
        id,
        format!("Leave request {}", status.as_str().to_lowercase()),
        format!("{name} · {} → {}", request.start_date, request.end_date),
        ActivityCategory::Leave,
        severity,
        timestamp,
    )
}
