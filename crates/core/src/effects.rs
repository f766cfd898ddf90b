// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clock and id seams.
//!
//! `apply` reads the current instant and mints fresh ids only through these
//! traits, so a transition is a pure function of its inputs and effects.

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Source of fresh entity ids.
pub trait IdGenerator {
    /// Returns an id never returned before by this generator.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Entity-kind prefix such as `emp` or `log`
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: OffsetDateTime,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }

    /// Moves the clock to `now`.
    pub const fn set(&mut self, now: OffsetDateTime) {
        self.now = now;
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&mut self, step: Duration) {
        self.now += step;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.now
    }
}

/// Random v4 UUID ids: `<prefix>-<uuid>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4())
    }
}

/// Counting ids: `<prefix>-1`, `<prefix>-2`, ...
///
/// One counter is shared by every prefix.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    /// Creates a generator whose first id ends in `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { issued: 0 }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.issued += 1;
        format!("{prefix}-{}", self.issued)
    }
}
