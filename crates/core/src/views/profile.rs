// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Presence, Views};
use peopleos_activity::ActivityLog;
use peopleos_domain::{
    AttendanceEvent, Employee, EmployeeId, PerformanceReview, Role, ShiftAssignment,
};
use serde::Serialize;
use time::Date;

/// Activity entries shown on a profile.
pub const PROFILE_MENTIONS: usize = 4;
/// Attendance events shown on a profile.
pub const PROFILE_RECENT_EVENTS: usize = 5;

/// Everything the profile page shows about one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeProfile<'a> {
    /// The employee record.
    pub employee: &'a Employee,
    /// The assigned role, if it still resolves.
    pub role: Option<&'a Role>,
    /// Current clock status.
    pub presence: Presence<'a>,
    /// Newest clock events first.
    pub recent_events: Vec<&'a AttendanceEvent>,
    /// Earliest shift on or after today.
    pub next_shift: Option<&'a ShiftAssignment>,
    /// First performance review on file.
    pub review: Option<&'a PerformanceReview>,
    /// Activity entries naming the employee.
    pub mentions: Vec<&'a ActivityLog>,
}

impl<'a> Views<'a> {
    /// Assembles the profile of one employee; `None` for unknown ids.
    #[must_use]
    pub fn employee_profile(
        &self,
        employee_id: &EmployeeId,
        today: Date,
    ) -> Option<EmployeeProfile<'a>> {
        let employee: &'a Employee = self.employee(employee_id)?;

        Some(EmployeeProfile {
            employee,
            role: self.role_of(employee),
            presence: self.attendance_snapshot().presence_of(employee_id),
            recent_events: self.recent_events_for(employee_id, PROFILE_RECENT_EVENTS),
            next_shift: self.next_shift_for(employee_id, today),
            review: self.review_for(employee_id),
            mentions: self.activity_mentioning(&employee.name, PROFILE_MENTIONS),
        })
    }
}
