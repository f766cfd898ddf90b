// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The demo organisation a fresh store starts from.
//!
//! Attendance, activity, one leave request and the schedule are placed
//! relative to the instant the store is created, so the dashboard looks
//! current whenever the server starts.

use crate::state::State;
use peopleos_activity::{ActivityCategory, ActivityLog, ActivitySeverity};
use peopleos_domain::{
    ActivityId, AttendanceEvent, AttendanceEventId, ClockEventType, Department, DepartmentId,
    Employee, EmployeeFilters, EmployeeId, EmployeeStatus, LeaveRequest, LeaveRequestId,
    LeaveStatus, PayrollCycle, PayrollCycleId, PayrollStatus, PerformanceReview, PermissionLevel,
    ReviewId, ReviewRating, Role, RoleId, ShiftAssignment, ShiftId, ShiftStatus, ShiftType,
};
use time::macros::{date, datetime};
use time::{Date, Duration, OffsetDateTime, UtcOffset};

/// Builder for the seed state.
#[derive(Debug, Clone, Copy)]
pub struct Catalog;

impl Catalog {
    /// Builds the seed state anchored at `now`.
    #[must_use]
    pub fn seed(now: OffsetDateTime) -> State {
        let today: Date = now.to_offset(UtcOffset::UTC).date();

        State {
            employees: Self::employees(),
            filters: EmployeeFilters::default(),
            departments: Self::departments(),
            roles: Self::roles(),
            attendance: Self::attendance(now),
            activity: Self::activity(now),
            leave_requests: Self::leave_requests(now),
            payroll: Self::payroll(),
            schedule: Self::schedule(today),
            performance: Self::performance(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn employee(
        id: &str,
        name: &str,
        department: &str,
        email: &str,
        location: &str,
        status: EmployeeStatus,
        hired_at: Date,
        salary: u32,
        projects: u32,
        role_id: &str,
    ) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            name: name.to_string(),
            department: department.to_string(),
            email: email.to_string(),
            location: location.to_string(),
            status,
            hired_at,
            salary,
            projects,
            role_id: Some(RoleId::new(role_id)),
            avatar: None,
        }
    }

    fn employees() -> Vec<Employee> {
        vec![
            Self::employee(
                "EMP-2401",
                "Neena Flores",
                "Product",
                "neena.flores@astrion.com",
                "Lisbon, PT",
                EmployeeStatus::Active,
                date!(2019 - 04 - 03),
                165_000,
                6,
                "role-product-design-director",
            ),
            Self::employee(
                "EMP-2402",
                "Dmitri Volkov",
                "Engineering",
                "d.volkov@astrion.com",
                "Berlin, DE",
                EmployeeStatus::OnLeave,
                date!(2021 - 10 - 12),
                148_000,
                4,
                "role-eng-staff-fe",
            ),
            Self::employee(
                "EMP-2403",
                "Priya Shah",
                "People Ops",
                "priya.shah@astrion.com",
                "Toronto, CA",
                EmployeeStatus::Active,
                date!(2020 - 01 - 21),
                118_000,
                2,
                "role-people-partner",
            ),
            Self::employee(
                "EMP-2404",
                "Omar Essam",
                "Growth",
                "o.essam@astrion.com",
                "Dubai, UAE",
                EmployeeStatus::Active,
                date!(2018 - 05 - 17),
                132_000,
                5,
                "role-growth-strategist",
            ),
            Self::employee(
                "EMP-2405",
                "Ava Martinez",
                "Engineering",
                "ava.martinez@astrion.com",
                "Austin, US",
                EmployeeStatus::Inactive,
                date!(2017 - 11 - 05),
                175_000,
                3,
                "role-eng-ml-lead",
            ),
        ]
    }

    fn departments() -> Vec<Department> {
        [
            (
                "dept-eng",
                "Engineering",
                "Builds and scales the Astrion platform with velocity and rigor.",
            ),
            (
                "dept-product",
                "Product",
                "Shapes the roadmap, design ops, and customer discovery loops.",
            ),
            (
                "dept-people",
                "People Ops",
                "Stewards culture, talent experience, and workforce programs.",
            ),
            (
                "dept-growth",
                "Growth",
                "Owns revenue activation and strategic GTM experiments.",
            ),
        ]
        .into_iter()
        .map(|(id, name, description)| Department {
            id: DepartmentId::new(id),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
    }

    fn roles() -> Vec<Role> {
        [
            (
                "role-eng-staff-fe",
                "Staff Frontend Engineer",
                "Engineering",
                PermissionLevel::Staff,
            ),
            (
                "role-eng-ml-lead",
                "Machine Learning Lead",
                "Engineering",
                PermissionLevel::Admin,
            ),
            (
                "role-product-design-director",
                "Design Director",
                "Product",
                PermissionLevel::Admin,
            ),
            (
                "role-people-partner",
                "People Partner",
                "People Ops",
                PermissionLevel::Staff,
            ),
            (
                "role-growth-strategist",
                "Revenue Strategist",
                "Growth",
                PermissionLevel::Staff,
            ),
        ]
        .into_iter()
        .map(|(id, title, department, permission)| Role {
            id: RoleId::new(id),
            title: title.to_string(),
            department: department.to_string(),
            permission,
        })
        .collect()
    }

    fn attendance(now: OffsetDateTime) -> Vec<AttendanceEvent> {
        [
            (
                "att-1",
                "EMP-2402",
                ClockEventType::ClockIn,
                Duration::hours(2),
                Some("Berlin hub"),
            ),
            (
                "att-2",
                "EMP-2401",
                ClockEventType::ClockIn,
                Duration::minutes(55),
                Some("Lisbon studio"),
            ),
            (
                "att-3",
                "EMP-2401",
                ClockEventType::ClockOut,
                Duration::minutes(5),
                Some("Workshop prep"),
            ),
            (
                "att-4",
                "EMP-2403",
                ClockEventType::ClockIn,
                Duration::minutes(20),
                None,
            ),
        ]
        .into_iter()
        .map(|(id, employee_id, event_type, ago, note)| AttendanceEvent {
            id: AttendanceEventId::new(id),
            employee_id: EmployeeId::new(employee_id),
            event_type,
            timestamp: now - ago,
            note: note.map(str::to_string),
        })
        .collect()
    }

    fn activity(now: OffsetDateTime) -> Vec<ActivityLog> {
        vec![
            ActivityLog::new(
                ActivityId::new("log-1"),
                String::from("Neena clocked out for design review"),
                String::from("Wrapped Lisbon studio sync"),
                ActivityCategory::Attendance,
                ActivitySeverity::Info,
                now - Duration::minutes(5),
            ),
            ActivityLog::new(
                ActivityId::new("log-2"),
                String::from("Priya clocked in"),
                String::from("People Ops coverage online"),
                ActivityCategory::Attendance,
                ActivitySeverity::Info,
                now - Duration::minutes(20),
            ),
            ActivityLog::new(
                ActivityId::new("log-3"),
                String::from("Omar submitted leave request"),
                String::from("Dubai market visit (3 days)"),
                ActivityCategory::Leave,
                ActivitySeverity::Warning,
                now - Duration::hours(4),
            ),
        ]
    }

    fn leave_requests(now: OffsetDateTime) -> Vec<LeaveRequest> {
        vec![
            LeaveRequest {
                id: LeaveRequestId::new("leave-1"),
                employee_id: EmployeeId::new("EMP-2404"),
                start_date: date!(2025 - 01 - 08),
                end_date: date!(2025 - 01 - 10),
                reason: String::from("Client roadshow in Doha"),
                status: LeaveStatus::Pending,
                requested_at: now - Duration::hours(4),
            },
            LeaveRequest {
                id: LeaveRequestId::new("leave-2"),
                employee_id: EmployeeId::new("EMP-2402"),
                start_date: date!(2025 - 02 - 02),
                end_date: date!(2025 - 02 - 05),
                reason: String::from("Mid-winter recharge"),
                status: LeaveStatus::Approved,
                requested_at: datetime!(2024-12-20 10:00 UTC),
            },
        ]
    }

    fn payroll() -> Vec<PayrollCycle> {
        vec![
            PayrollCycle {
                id: PayrollCycleId::new("pay-2025-06"),
                label: String::from("Jun 16 — Jun 30"),
                period_start: date!(2025 - 06 - 16),
                period_end: date!(2025 - 06 - 30),
                cut_off_date: date!(2025 - 06 - 27),
                payout_date: date!(2025 - 07 - 03),
                status: PayrollStatus::Processing,
                total_gross: 482_000,
                total_net: 361_500,
            },
            PayrollCycle {
                id: PayrollCycleId::new("pay-2025-07a"),
                label: String::from("Jul 01 — Jul 15"),
                period_start: date!(2025 - 07 - 01),
                period_end: date!(2025 - 07 - 15),
                cut_off_date: date!(2025 - 07 - 12),
                payout_date: date!(2025 - 07 - 19),
                status: PayrollStatus::Draft,
                total_gross: 489_200,
                total_net: 367_900,
            },
            PayrollCycle {
                id: PayrollCycleId::new("pay-2025-05"),
                label: String::from("Jun 01 — Jun 15"),
                period_start: date!(2025 - 06 - 01),
                period_end: date!(2025 - 06 - 15),
                cut_off_date: date!(2025 - 06 - 12),
                payout_date: date!(2025 - 06 - 18),
                status: PayrollStatus::Paid,
                total_gross: 475_800,
                total_net: 356_100,
            },
        ]
    }

    fn schedule(today: Date) -> Vec<ShiftAssignment> {
        [
            (
                "shift-001",
                "EMP-2401",
                Duration::ZERO,
                ShiftType::Morning,
                "HQ East",
                ShiftStatus::Scheduled,
                "Product roadmap sync",
            ),
            (
                "shift-002",
                "EMP-2403",
                Duration::days(1),
                ShiftType::Midday,
                "Remote",
                ShiftStatus::Scheduled,
                "New hire onboarding",
            ),
            (
                "shift-003",
                "EMP-2404",
                Duration::days(2),
                ShiftType::Evening,
                "EMEA Hub",
                ShiftStatus::Scheduled,
                "Emerging markets review",
            ),
            (
                "shift-004",
                "EMP-2402",
                Duration::days(-1),
                ShiftType::Morning,
                "Remote",
                ShiftStatus::Completed,
                "Platform migration retro",
            ),
        ]
        .into_iter()
        .map(
            |(id, employee_id, offset, shift_type, location, status, notes)| ShiftAssignment {
                id: ShiftId::new(id),
                employee_id: EmployeeId::new(employee_id),
                shift_date: today.saturating_add(offset),
                shift_type,
                location: location.to_string(),
                status,
                notes: Some(notes.to_string()),
            },
        )
        .collect()
    }

    fn performance() -> Vec<PerformanceReview> {
        vec![
            PerformanceReview {
                id: ReviewId::new("rev-001"),
                employee_id: EmployeeId::new("EMP-2401"),
                reviewer: String::from("Marcus Lee"),
                focus: String::from("Product strategy leadership"),
                rating: ReviewRating::Exceeds,
                submitted_at: datetime!(2025-06-05 14:15 UTC),
                next_check_in: date!(2025 - 09 - 05),
                highlights: vec![
                    String::from("Shipped multi-quarter roadmap"),
                    String::from("Raised design maturity score from 72 → 86"),
                ],
            },
            PerformanceReview {
                id: ReviewId::new("rev-002"),
                employee_id: EmployeeId::new("EMP-2403"),
                reviewer: String::from("Nia Gomez"),
                focus: String::from("Employee experience programs"),
                rating: ReviewRating::Strong,
                submitted_at: datetime!(2025-05-22 11:00 UTC),
                next_check_in: date!(2025 - 08 - 22),
                highlights: vec![
                    String::from("Onboarded 18 hires"),
                    String::from("Launched PTO analytics dashboard"),
                ],
            },
            PerformanceReview {
                id: ReviewId::new("rev-003"),
                employee_id: EmployeeId::new("EMP-2404"),
                reviewer: String::from("Aria Patel"),
                focus: String::from("Regional revenue acceleration"),
                rating: ReviewRating::Solid,
                submitted_at: datetime!(2025-04-30 16:30 UTC),
                next_check_in: date!(2025 - 07 - 30),
                highlights: vec![
                    String::from("Closed LATAM marketplace partnership"),
                    String::from("Improved forecast accuracy by 12%"),
                ],
            },
        ]
    }
}
