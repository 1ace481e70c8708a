// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    ZeroPosition,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::ZeroPosition => f.write_str("position is 1-based and must be > 0"),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_label(field: &'static str, input: &str) -> Result<String, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty(field));
    }
    if input.trim() != input {
        return Err(ParseError::Trimmed(field));
    }
    if input.len() > NAME_MAX_LEN {
        return Err(ParseError::TooLong(field, NAME_MAX_LEN));
    }
    Ok(input.to_string())
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One standings row.
///
/// Entries are plain values: re-ranking goes through [`RankedEntry::with_position`],
/// which leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct RankedEntry {
    /// 1-based rank. `u32::MAX` is the ceiling: shifting an entry already at
    /// the ceiling leaves it there, so only positions below it move by one.
    pub position: u32,
    pub name: String,
    pub team: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_champion: bool,
}

impl RankedEntry {
    pub fn new(position: u32, name: &str, team: &str, points: u32) -> Result<Self, ParseError> {
        if position == 0 {
            return Err(ParseError::ZeroPosition);
        }
        Ok(Self {
            position,
            name: parse_label("name", name)?,
            team: parse_label("team", team)?,
            points,
            is_champion: false,
        })
    }

    pub fn champion(position: u32, name: &str, team: &str, points: u32) -> Result<Self, ParseError> {
        let mut entry = Self::new(position, name, team, points)?;
        entry.is_champion = true;
        Ok(entry)
    }

    #[must_use]
    pub fn with_position(&self, position: u32) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}
