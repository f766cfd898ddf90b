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
    clippy::all
)]

use peopleos_domain::{ActivityId, DomainError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

#[cfg(test)]
mod tests;

/// The area of the system an activity entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    /// Clock-in and clock-out events.
    Attendance,
    /// Leave submissions and decisions.
    Leave,
    /// System-level notices such as payroll runs.
    System,
}

impl ActivityCategory {
    /// Converts this category to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attendance => "Attendance",
            Self::Leave => "Leave",
            Self::System => "System",
        }
    }
}

impl FromStr for ActivityCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Attendance" => Ok(Self::Attendance),
            "Leave" => Ok(Self::Leave),
            "System" => Ok(Self::System),
            _ => Err(DomainError::InvalidActivityCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much attention an activity entry deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivitySeverity {
    /// Routine.
    Info,
    /// Needs a look.
    Warning,
    /// Needs action.
    Critical,
}

impl ActivitySeverity {
    /// Converts this severity to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for ActivitySeverity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidActivitySeverity(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActivitySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A human-readable record of something that happened.
///
/// Activity entries are append-only and newest-first. In normal flow they are
/// never created directly: each one is derived from, and applied together
/// with, the command it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    /// Unique entry identifier.
    pub id: ActivityId,
    /// One-line headline.
    pub title: String,
    /// Supporting detail.
    pub detail: String,
    /// The area this entry belongs to.
    pub category: ActivityCategory,
    /// Attention level.
    pub severity: ActivitySeverity,
    /// When the described change happened.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl ActivityLog {
    /// Creates a new `ActivityLog`.
    ///
    /// # Arguments
    ///
    /// * `id` - The entry identifier
    /// * `title` - The headline
    /// * `detail` - Supporting detail
    /// * `category` - The area this entry belongs to
    /// * `severity` - Attention level
    /// * `timestamp` - When the described change happened
    #[must_use]
    pub const fn new(
        id: ActivityId,
        title: String,
        detail: String,
        category: ActivityCategory,
        severity: ActivitySeverity,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            title,
            detail,
            category,
            severity,
            timestamp,
        }
    }

    /// Returns whether the title or detail mentions the given text.
    #[must_use]
    pub fn mentions(&self, text: &str) -> bool {
        self.title.contains(text) || self.detail.contains(text)
    }
}
