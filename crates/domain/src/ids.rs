// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed identifiers.
//!
//! Every entity collection is keyed by an opaque string. Each kind gets its
//! own newtype so an employee id can never be passed where a role id is
//! expected. None of these carry referential integrity: a stored id may point
//! at nothing.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the raw identifier string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifies an employee.
    EmployeeId
);
entity_id!(
    /// Identifies a department.
    DepartmentId
);
entity_id!(
    /// Identifies a role (permission template).
    RoleId
);
entity_id!(
    /// Identifies an attendance event.
    AttendanceEventId
);
entity_id!(
    /// Identifies a leave request.
    LeaveRequestId
);
entity_id!(
    /// Identifies a payroll cycle.
    PayrollCycleId
);
entity_id!(
    /// Identifies a shift assignment.
    ShiftId
);
entity_id!(
    /// Identifies a performance review.
    ReviewId
);
entity_id!(
    /// Identifies an activity log entry.
    ActivityId
);
