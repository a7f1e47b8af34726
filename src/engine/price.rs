//! Fixed-point price representation.
//!
//! Prices are always rendered and parsed in "7.5" format: up to seven
//! integer digits, a literal `.`, then exactly five fractional digits.
//! Storing the value as a scaled `i64` (value * 100_000) means two
//! textually-identical prices always compare, hash, and order
//! identically — floating point would not give us that for free.

use std::fmt;
use std::str::FromStr;

use crate::engine::error::EngineError;

/// Number of fractional digits mandated by the 7.5 wire format.
const FRACTIONAL_DIGITS: usize = 5;
const SCALE: i64 = 100_000;

/// A strictly positive price, stored as an integer scaled by 10^5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// Construct a `Price` from an already-scaled integer value.
    ///
    /// Only used internally (parsing and tests); callers outside this
    /// module should go through `FromStr`.
    #[cfg(test)]
    pub(crate) fn from_scaled(scaled: i64) -> Self {
        Price(scaled)
    }
}

impl FromStr for Price {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidField {
            oid: 0,
            field: "price",
        };

        let (int_part, frac_part) = s.split_once('.').ok_or_else(invalid)?;

        if int_part.is_empty()
            || int_part.len() > 7
            || !int_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac_part.len() != FRACTIONAL_DIGITS || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let int_value: i64 = int_part.parse().map_err(|_| invalid())?;
        let frac_value: i64 = frac_part.parse().map_err(|_| invalid())?;
        let scaled = int_value
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(frac_value))
            .ok_or_else(invalid)?;

        if scaled <= 0 {
            return Err(invalid());
        }

        Ok(Price(scaled))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = self.0 / SCALE;
        let fraction = self.0 % SCALE;
        write!(f, "{integer}.{fraction:05}")
    }
}
