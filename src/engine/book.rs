//! A two-sided book of price levels for one symbol.

use std::collections::BTreeMap;

use crate::engine::level::PriceLevel;
use crate::engine::price::Price;

/// Bids and asks for a single symbol, each a price-sorted map of
/// price levels. `BTreeMap` keeps both sides ordered by price
/// ascending; which traversal direction is "best first" depends on
/// the side and is decided by the caller (see [`crate::engine::matching`]
/// and [`crate::engine::engine::MatchingEngine::snapshot`]).
#[derive(Debug, Default)]
pub struct SymbolBook {
    pub bids: BTreeMap<Price, PriceLevel>,
    pub asks: BTreeMap<Price, PriceLevel>,
}

impl SymbolBook {
    pub fn new() -> Self {
        SymbolBook {
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
        }
    }
}
