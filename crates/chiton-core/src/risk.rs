//! The [`Risk`] cell value.

use std::fmt;

use thiserror::Error;

/// Risk level of a single grid cell: the cost charged for entering it.
///
/// Always in `1..=9`. Arithmetic on risks wraps back into that range
/// instead of saturating, so `9 + 1` is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Risk(u8);

/// A value that does not fit in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("risk {0} is outside 1..=9")]
pub struct RiskRangeError(pub u32);

impl Risk {
    pub const MIN: Risk = Risk(1);
    pub const MAX: Risk = Risk(9);

    /// Create a risk, returning `None` if `value` is outside `1..=9`.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Map any integer into `1..=9` with `((v - 1) mod 9) + 1`.
    pub const fn wrap(value: i64) -> Self {
        Self(((value - 1).rem_euclid(9) + 1) as u8)
    }

    /// Add `offset` and wrap the sum back into `1..=9`.
    #[inline]
    pub const fn wrapping_add(self, offset: u32) -> Self {
        Self::wrap(self.0 as i64 + offset as i64)
    }

    /// The underlying digit.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The entry cost as used by path searches.
    #[inline]
    pub const fn cost(self) -> u32 {
        self.0 as u32
    }

    /// Parse a single digit character.
    pub fn from_digit(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::new)
    }
}

impl TryFrom<u8> for Risk {
    type Error = RiskRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RiskRangeError(value as u32))
    }
}

impl From<Risk> for u8 {
    fn from(r: Risk) -> Self {
        r.0
    }
}

impl From<Risk> for u32 {
    fn from(r: Risk) -> Self {
        r.0 as u32
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
