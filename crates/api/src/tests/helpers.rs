// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use peopleos::{FixedClock, SequentialIds, State, Store};
use peopleos_domain::EmployeeStatus;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

use crate::{Authenticator, EmployeeDraft, Principal, UserRole};

pub const NOW: OffsetDateTime = datetime!(2025-06-20 12:00 UTC);
pub const TODAY: Date = date!(2025 - 06 - 20);

pub fn create_test_store() -> Store<FixedClock, SequentialIds> {
    Store::with_state(State::seeded(NOW), FixedClock::new(NOW), SequentialIds::new())
}

pub fn create_seeded_state() -> State {
    State::seeded(NOW)
}

fn resolve(id: &str, role: UserRole) -> Principal {
    Authenticator::with_seed_accounts()
        .resolve(id, role)
        .expect("seed account should resolve")
}

pub fn create_test_admin() -> Principal {
    resolve("user-admin", UserRole::Admin)
}

pub fn create_test_hr() -> Principal {
    resolve("user-hr", UserRole::Hr)
}

pub fn create_test_manager() -> Principal {
    resolve("user-manager", UserRole::Manager)
}

pub fn create_test_employee() -> Principal {
    resolve("user-employee", UserRole::Employee)
}

pub fn create_valid_draft() -> EmployeeDraft {
    EmployeeDraft {
        name: String::from("  Jordan Reyes "),
        email: String::from("jordan.reyes@astrion.com"),
        location: String::from("Madrid, ES"),
        department: String::from("Engineering"),
        status: EmployeeStatus::Active,
        salary: 98_000,
        projects: 2,
        role_id: None,
        avatar: None,
        photo_bytes: None,
    }
}
