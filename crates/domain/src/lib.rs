// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod attendance;
mod error;
mod ids;
mod operations;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use attendance::{AttendanceEvent, AttendanceStatus, ClockEventType, LeaveRequest, LeaveStatus};
pub use error::DomainError;
pub use ids::{
    ActivityId, AttendanceEventId, DepartmentId, EmployeeId, LeaveRequestId, PayrollCycleId,
    ReviewId, RoleId, ShiftId,
};
pub use operations::{
    PayrollCycle, PayrollStatus, PerformanceReview, ReviewRating, ShiftAssignment, ShiftStatus,
    ShiftType,
};
pub use types::{
    Department, DepartmentFilter, Employee, EmployeeFilters, EmployeeStatus, FILTER_ALL,
    FilterUpdate, NewDepartment, NewEmployee, NewRole, PermissionLevel, Role, StatusFilter,
};
pub use validation::{
    EmployeeFields, MAX_AVATAR_BYTES, MIN_SALARY, is_valid_email, parse_date,
    validate_employee_fields,
};
