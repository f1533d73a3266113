use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Columns the issue list may be sorted by.
///
/// This is the only way a sort column reaches SQL: each key maps to a fixed
/// column identifier and anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueSortKey {
    #[default]
    Number,
    Title,
    State,
    Author,
    CreatedAt,
    UpdatedAt,
    ClosedAt,
    KillFactor,
    AttentionOf,
}

impl IssueSortKey {
    pub const ALL: [IssueSortKey; 9] = [
        Self::Number,
        Self::Title,
        Self::State,
        Self::Author,
        Self::CreatedAt,
        Self::UpdatedAt,
        Self::ClosedAt,
        Self::KillFactor,
        Self::AttentionOf,
    ];

    /// Query-string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Title => "title",
            Self::State => "state",
            Self::Author => "author",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::ClosedAt => "closed_at",
            Self::KillFactor => "kill_factor",
            Self::AttentionOf => "attention_of",
        }
    }

    /// Column identifier in the `issues` table
    pub fn column(&self) -> &'static str {
        match self {
            Self::Author => "user",
            other => other.as_str(),
        }
    }
}

impl FromStr for IssueSortKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let location = ErrorLocation::from(Location::caller());

        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSortKey {
                value: s.to_string(),
                location,
            })
    }
}

impl std::fmt::Display for IssueSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
