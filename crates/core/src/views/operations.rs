// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::Views;
use peopleos_activity::{ActivityCategory, ActivityLog};
use peopleos_domain::{EmployeeId, PayrollCycle, PayrollStatus, PerformanceReview, ShiftAssignment};
use time::Date;

impl<'a> Views<'a> {
    /// Shifts on or after `today`, earliest first.
    #[must_use]
    pub fn upcoming_shifts(&self, today: Date) -> Vec<&'a ShiftAssignment> {
        let mut shifts: Vec<&'a ShiftAssignment> = self
            .state
            .schedule
            .iter()
            .filter(|shift| shift.shift_date >= today)
            .collect();
        shifts.sort_by_key(|shift| shift.shift_date);
        shifts
    }

    /// The employee's earliest shift on or after `today`.
    #[must_use]
    pub fn next_shift_for(
        &self,
        employee_id: &EmployeeId,
        today: Date,
    ) -> Option<&'a ShiftAssignment> {
        self.upcoming_shifts(today)
            .into_iter()
            .find(|shift| &shift.employee_id == employee_id)
    }

    /// The employee's first performance review in collection order.
    #[must_use]
    pub fn review_for(&self, employee_id: &EmployeeId) -> Option<&'a PerformanceReview> {
        self.state
            .performance
            .iter()
            .find(|review| &review.employee_id == employee_id)
    }

    /// Payroll cycles ordered by payout date.
    #[must_use]
    pub fn payroll_timeline(&self) -> Vec<&'a PayrollCycle> {
        let mut cycles: Vec<&'a PayrollCycle> = self.state.payroll.iter().collect();
        cycles.sort_by_key(|cycle| cycle.payout_date);
        cycles
    }

    /// The earliest-paying cycle that is not yet paid, or the earliest cycle
    /// if all are paid.
    #[must_use]
    pub fn next_payroll(&self) -> Option<&'a PayrollCycle> {
        let timeline: Vec<&'a PayrollCycle> = self.payroll_timeline();
        timeline
            .iter()
            .find(|cycle| cycle.status != PayrollStatus::Paid)
            .or_else(|| timeline.first())
            .copied()
    }

    /// Net payroll for cycles whose period ends in `year`.
    #[must_use]
    pub fn year_to_date_net(&self, year: i32) -> u64 {
        self.state
            .payroll
            .iter()
            .filter(|cycle| cycle.period_end.year() == year)
            .map(|cycle| cycle.total_net)
            .sum()
    }

    /// The first `limit` activity entries, newest first.
    #[must_use]
    pub fn recent_activity(&self, limit: usize) -> Vec<&'a ActivityLog> {
        self.state.activity.iter().take(limit).collect()
    }

    /// The first `limit` activity entries whose title or detail contains
    /// `text`.
    #[must_use]
    pub fn activity_mentioning(&self, text: &str, limit: usize) -> Vec<&'a ActivityLog> {
        self.state
            .activity
            .iter()
            .filter(|entry| entry.mentions(text))
            .take(limit)
            .collect()
    }

    /// The newest system entry, falling back to the newest entry of any kind.
    #[must_use]
    pub fn ops_alert(&self) -> Option<&'a ActivityLog> {
        self.state
            .activity
            .iter()
            .find(|entry| entry.category == ActivityCategory::System)
            .or_else(|| self.state.activity.first())
    }
}
