//! Outcome records produced by the matching engine.
//!
//! These are plain data — the dispatcher (not the engine) is
//! responsible for turning them into `F`/`P` result lines.

use std::fmt;

use crate::engine::order::Side;
use crate::engine::price::Price;

/// One leg of a match. A single match between an aggressor and a
/// resting order always produces exactly two of these: the aggressor
/// fill first, then the passive fill, both at the resting order's
/// price and for the same quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub order_id: u32,
    pub symbol: String,
    pub qty: u16,
    pub price: Price,
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F {} {} {} {}",
            self.order_id, self.symbol, self.qty, self.price
        )
    }
}

/// One line of a `P` snapshot: a single resting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub order_id: u32,
    pub symbol: String,
    pub side: Side,
    pub open_qty: u16,
    pub price: Price,
}

impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P {} {} {} {} {}",
            self.order_id, self.symbol, self.side, self.open_qty, self.price
        )
    }
}
