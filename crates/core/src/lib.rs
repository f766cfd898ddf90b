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
#![allow(clippy::multiple_crate_versions)]

//! The `PeopleOS` state engine.
//!
//! A [`Store`] owns the current [`State`] snapshot. Every change is a
//! [`Command`] passed through [`apply`], which returns a complete new
//! snapshot together with any activity entry the command cascaded.
//! Read-side derivations live on [`Views`].

mod apply;
mod cascade;
mod catalog;
mod command;
mod effects;
mod state;
mod store;
mod views;

#[cfg(test)]
mod tests;

pub use apply::{
    ACTIVITY_ID_PREFIX, ATTENDANCE_ID_PREFIX, DEPARTMENT_ID_PREFIX, EMPLOYEE_ID_PREFIX,
    LEAVE_ID_PREFIX, ROLE_ID_PREFIX, apply,
};
pub use cascade::FALLBACK_DISPLAY_NAME;
pub use catalog::Catalog;
pub use command::Command;
pub use effects::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidIds};
pub use state::{Outcome, State, TransitionResult};
pub use store::Store;
pub use views::{
    AttendanceSnapshot, DailyPresence, DepartmentSummary, EmployeeProfile, EmployeeStats,
    PROFILE_MENTIONS, PROFILE_RECENT_EVENTS, PermissionStats, Presence, StatusCount, Views,
};
