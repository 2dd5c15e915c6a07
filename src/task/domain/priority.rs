//! Task priority levels and their canonical encoding.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority bucket a task belongs to.
///
/// The wire encoding is `"High"`, `"Med"` or `"Low"`; parsing accepts those
/// codes only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent work.
    High,
    /// Normal work.
    #[serde(rename = "Med")]
    Medium,
    /// Work that can wait. New tasks default to this level.
    #[default]
    Low,
}

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the canonical wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Med",
            Self::Low => "Low",
        }
    }

    /// Returns the column heading shown above this priority's tasks.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "High" => Ok(Self::High),
            "Med" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
