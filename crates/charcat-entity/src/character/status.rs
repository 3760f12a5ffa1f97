//! Character life status enumeration.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a character is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharacterStatus {
    /// The character is alive.
    Alive,
    /// The character is dead.
    Dead,
    /// Unknown, or any value the API adds later.
    #[serde(rename = "unknown")]
    Unknown,
}

impl CharacterStatus {
    /// Return the status the way the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }

    /// Single-character marker used in terminal listings.
    pub fn marker(&self) -> char {
        match self {
            Self::Alive => '●',
            Self::Dead => '✗',
            Self::Unknown => '?',
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for CharacterStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(Self::Unknown))
    }
}

impl FromStr for CharacterStatus {
    type Err = charcat_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alive" => Ok(Self::Alive),
            "dead" => Ok(Self::Dead),
            "unknown" => Ok(Self::Unknown),
            _ => Err(charcat_core::AppError::validation(format!(
                "Invalid character status: '{s}'. Expected one of: alive, dead, unknown"
            ))),
        }
    }
}
