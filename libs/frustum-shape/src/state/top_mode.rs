//! Top diameter behavior and its persisted form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Governs the lower limit of the top diameter and whether it is editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TopMode {
    /// The top may shrink to a point.
    #[default]
    CanZero,
    /// The top respects the configured minimum diameter.
    LimitMin,
    /// The top follows the bottom through a fixed slope and is not editable.
    Constant,
}

impl TopMode {
    /// All modes, in declaration order.
    pub const ALL: [TopMode; 3] = [TopMode::CanZero, TopMode::LimitMin, TopMode::Constant];

    /// The persisted literal name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopMode::CanZero => "CanZero",
            TopMode::LimitMin => "LimitMin",
            TopMode::Constant => "Constant",
        }
    }
}

impl fmt::Display for TopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a persisted top mode names no known mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown top mode '{0}', expected CanZero, LimitMin or Constant")]
pub struct ParseTopModeError(pub String);

impl FromStr for TopMode {
    type Err = ParseTopModeError;

    /// Parses a persisted mode name, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use frustum_shape::TopMode;
    /// assert_eq!("limitmin".parse::<TopMode>(), Ok(TopMode::LimitMin));
    /// assert!("cone".parse::<TopMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TopMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTopModeError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for TopMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
