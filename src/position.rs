//! Ellipsis position and its accepted names.
//!
//! Each position accepts a lowercase and a capitalized name (`end` / `End`,
//! `middle` / `Middle`, `start` / `Start`). Names are resolved through a
//! static alias table; anything else is rejected with a message listing the
//! accepted names.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::TruncateError;

/// Where the ellipsis mark goes in a truncated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EllipsisPosition {
    /// `...tail`
    Start,
    /// `head...tail`
    Middle,
    /// `head...`
    #[default]
    End,
}

/// Accepted names, sorted and deduplicated.
const ALIASES: &[(&str, EllipsisPosition)] = &[
    ("End", EllipsisPosition::End),
    ("Middle", EllipsisPosition::Middle),
    ("Start", EllipsisPosition::Start),
    ("end", EllipsisPosition::End),
    ("middle", EllipsisPosition::Middle),
    ("start", EllipsisPosition::Start),
];

impl EllipsisPosition {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }

    /// All accepted names in sorted order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        ALIASES.iter().map(|(name, _)| *name)
    }
}

impl fmt::Display for EllipsisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EllipsisPosition {
    type Err = TruncateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALIASES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, position)| *position)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Self::names().collect();
                TruncateError::InvalidArgument(format!(
                    "`{s}` is not a valid ellipsis position; accepted values: {}",
                    accepted.join(", ")
                ))
            })
    }
}

impl TryFrom<String> for EllipsisPosition {
    type Error = TruncateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
