// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, FixedClock, SequentialIds, State, Store, TransitionResult, apply};
use peopleos_domain::{EmployeeStatus, NewEmployee, RoleId};
use time::OffsetDateTime;
use time::macros::{date, datetime};

pub const NOW: OffsetDateTime = datetime!(2025-06-20 12:00 UTC);

pub fn create_test_clock() -> FixedClock {
    FixedClock::new(NOW)
}

pub fn create_seeded_state() -> State {
    State::seeded(NOW)
}

pub fn create_seeded_store() -> Store<FixedClock, SequentialIds> {
    Store::with_state(create_seeded_state(), create_test_clock(), SequentialIds::new())
}

pub fn create_empty_store() -> Store<FixedClock, SequentialIds> {
    Store::with_state(State::new(), create_test_clock(), SequentialIds::new())
}

pub fn create_new_employee(name: &str, department: &str, role_id: Option<&str>) -> NewEmployee {
    NewEmployee {
        name: String::from(name),
        department: String::from(department),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        location: String::from("Remote"),
        status: EmployeeStatus::Active,
        hired_at: date!(2024 - 03 - 01),
        salary: 120_000,
        projects: 1,
        role_id: role_id.map(RoleId::new),
        avatar: None,
    }
}

pub fn apply_with_test_effects(state: &State, command: Command) -> TransitionResult {
    apply(state, command, &create_test_clock(), &mut SequentialIds::new())
}
