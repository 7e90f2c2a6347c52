//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Lower ordinals are more severe. A logger with threshold `T` emits a message
/// at level `S` only when `S.ordinal() <= T.ordinal()`, so `Level::FATAL` always
/// passes and `Level::DEBUG` passes only at the most verbose threshold.
///
/// `Level` is an ordinal rather than a closed enum: values outside the four
/// named levels can be built with [`Level::from_ordinal`] and render their
/// decimal ordinal as the marker.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Level(u8);

impl Level {
    pub const FATAL: Level = Level(0);
    pub const ERROR: Level = Level(1);
    pub const INFO: Level = Level(2);
    pub const DEBUG: Level = Level(3);

    /// All named levels, most severe first.
    pub const ALL: [Level; 4] = [Level::FATAL, Level::ERROR, Level::INFO, Level::DEBUG];

    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Self {
        Level(ordinal)
    }

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self.0
    }

    /// Whether a message at this level passes a logger configured with `threshold`.
    #[inline]
    pub const fn passes(self, threshold: Level) -> bool {
        self.0 <= threshold.0
    }

    /// Single-character marker for the known levels.
    pub const fn letter(self) -> Option<char> {
        match self.0 {
            0 => Some('F'),
            1 => Some('E'),
            2 => Some('_'),
            3 => Some('.'),
            _ => None,
        }
    }

    /// Marker written into each line: the letter, or the decimal ordinal
    /// for unrecognized levels.
    pub fn marker(self) -> String {
        match self.letter() {
            Some(c) => c.to_string(),
            None => self.0.to_string(),
        }
    }

    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("FATAL"),
            1 => Some("ERROR"),
            2 => Some("INFO"),
            3 => Some("DEBUG"),
            _ => None,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::ERROR
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Level({})", self.0),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "FATAL" => Ok(Level::FATAL),
            "ERROR" => Ok(Level::ERROR),
            "INFO" => Ok(Level::INFO),
            "DEBUG" => Ok(Level::DEBUG),
            _ => trimmed
                .parse::<u8>()
                .map(Level)
                .map_err(|_| LoggerError::invalid_level(s)),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

impl TryFrom<String> for Level {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
