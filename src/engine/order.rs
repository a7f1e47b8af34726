//! The resting-order value type and its side.

use std::fmt;
use std::str::FromStr;

use crate::engine::error::EngineError;
use crate::engine::price::Price;

/// Which side of the book an order rests on (or crosses into).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The opposite side, used to pick which book to cross against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "B"),
            Side::Sell => write!(f, "S"),
        }
    }
}

impl FromStr for Side {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Side::Buy),
            "S" => Ok(Side::Sell),
            _ => Err(()),
        }
    }
}

/// A single order, live or resting.
///
/// `original_qty` never changes after construction; `open_qty` is
/// decremented by fills and reaches zero exactly when the order is
/// fully consumed (at which point it is removed from its queue).
#[derive(Debug, Clone)]
pub struct Order {
    pub id: u32,
    pub symbol: String,
    pub side: Side,
    pub original_qty: u16,
    pub open_qty: u16,
    pub price: Price,
}

impl Order {
    /// Build a freshly-accepted order: `open_qty` starts equal to
    /// `original_qty`.
    pub fn new(id: u32, symbol: String, side: Side, qty: u16, price: Price) -> Self {
        Order {
            id,
            symbol,
            side,
            original_qty: qty,
            open_qty: qty,
            price,
        }
    }
}

/// Validates a symbol token: 1 to 8 ASCII alphanumeric characters.
pub fn validate_symbol(token: &str, oid: u32) -> Result<String, EngineError> {
    if token.is_empty() || token.len() > 8 || !token.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(EngineError::InvalidSymbol { oid });
    }
    Ok(token.to_string())
}
