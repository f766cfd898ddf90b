// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::Views;
use peopleos_domain::{AttendanceEvent, AttendanceStatus, EmployeeId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use time::{Date, UtcOffset};

/// Days covered by [`Views::weekly_presence`].
const PRESENCE_WINDOW_DAYS: usize = 7;

/// Where an employee currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presence<'a> {
    /// `In` if the latest event is a clock-in, otherwise `Out`.
    pub status: AttendanceStatus,
    /// The event the status was derived from.
    pub last_event: Option<&'a AttendanceEvent>,
}

impl Presence<'_> {
    const ABSENT: Self = Self {
        status: AttendanceStatus::Out,
        last_event: None,
    };
}

/// Latest attendance event per employee.
///
/// "Latest" means nearest the head of the collection, not greatest
/// timestamp.
#[derive(Debug, Clone, Default)]
pub struct AttendanceSnapshot<'a> {
    latest: HashMap<&'a EmployeeId, &'a AttendanceEvent>,
}

impl<'a> AttendanceSnapshot<'a> {
    /// Builds the snapshot in a single pass over `events`, keeping the first
    /// event seen for each employee.
    #[must_use]
    pub fn from_events(events: &'a [AttendanceEvent]) -> Self {
        let mut latest: HashMap<&'a EmployeeId, &'a AttendanceEvent> = HashMap::new();
        for event in events {
            latest.entry(&event.employee_id).or_insert(event);
        }
        Self { latest }
    }

    /// The employee's presence; employees with no events are out.
    #[must_use]
    pub fn presence_of(&self, employee_id: &EmployeeId) -> Presence<'a> {
        self.latest
            .get(employee_id)
            .map_or(Presence::ABSENT, |event| Presence {
                status: AttendanceStatus::from(event.event_type),
                last_event: Some(*event),
            })
    }

    /// The employee's status.
    #[must_use]
    pub fn status_of(&self, employee_id: &EmployeeId) -> AttendanceStatus {
        self.presence_of(employee_id).status
    }

    /// Employees currently clocked in.
    #[must_use]
    pub fn clocked_in(&self) -> usize {
        self.latest
            .values()
            .filter(|event| AttendanceStatus::from(event.event_type) == AttendanceStatus::In)
            .count()
    }
}

/// Attendance events recorded on one UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPresence {
    /// The day.
    pub date: Date,
    /// Events that day.
    pub count: usize,
}

impl<'a> Views<'a> {
    /// Latest attendance event per employee.
    #[must_use]
    pub fn attendance_snapshot(&self) -> AttendanceSnapshot<'a> {
        AttendanceSnapshot::from_events(&self.state.attendance)
    }

    /// Event counts for the seven most recent days with activity.
    ///
    /// Returned oldest first. If fewer than seven days have events, days
    /// before the earliest one are added with a count of zero; with no
    /// events at all, the window ends at `today`.
    #[must_use]
    pub fn weekly_presence(&self, today: Date) -> Vec<DailyPresence> {
        let mut per_day: BTreeMap<Date, usize> = BTreeMap::new();
        for event in &self.state.attendance {
            *per_day
                .entry(event.timestamp.to_offset(UtcOffset::UTC).date())
                .or_default() += 1;
        }

        let mut days: Vec<DailyPresence> = per_day
            .into_iter()
            .rev()
            .take(PRESENCE_WINDOW_DAYS)
            .map(|(date, count)| DailyPresence { date, count })
            .collect();
        if days.is_empty() {
            days.push(DailyPresence {
                date: today,
                count: 0,
            });
        }

        while days.len() < PRESENCE_WINDOW_DAYS {
            let Some(earliest) = days.last().and_then(|day| day.date.previous_day()) else {
                break;
            };
            days.push(DailyPresence {
                date: earliest,
                count: 0,
            });
        }

        days.reverse();
        days
    }

    /// The first `limit` events of one employee, newest first.
    #[must_use]
    pub fn recent_events_for(
        &self,
        employee_id: &EmployeeId,
        limit: usize,
    ) -> Vec<&'a AttendanceEvent> {
        self.state
            .attendance
            .iter()
            .filter(|event| &event.employee_id == employee_id)
            .take(limit)
            .collect()
    }
}
