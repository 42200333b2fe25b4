//! Validated calendar month.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// Calendar month in `1..=12`. Out-of-range values cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Self = Self(1);
    pub const DECEMBER: Self = Self(12);

    /// Validate a month number.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MonthOutOfRange`] for values outside `1..=12`.
    pub fn new(number: u8) -> Result<Self, ThemeError> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            log::warn!("rejected month {number}");
            Err(ThemeError::MonthOutOfRange(i64::from(number)))
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The following month, wrapping December to January.
    #[must_use]
    pub const fn succ(self) -> Self {
        if self.0 == 12 { Self(1) } else { Self(self.0 + 1) }
    }

    /// All twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=12).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = ThemeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for Month {
    type Error = ThemeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ThemeError::MonthOutOfRange(i64::from(value)))
            .and_then(Self::new)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl FromStr for Month {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ThemeError::InvalidMonth(trimmed.to_string()))?;
        u8::try_from(value)
            .map_err(|_| ThemeError::MonthOutOfRange(value))
            .and_then(Self::new)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
