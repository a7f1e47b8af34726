//! The matching engine: per-symbol books, the identifier index, and
//! the three operations the dispatcher drives — place, cancel, snapshot.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::engine::book::SymbolBook;
use crate::engine::error::EngineError;
use crate::engine::level::PriceLevel;
use crate::engine::matching;
use crate::engine::order::{Order, Side};
use crate::engine::price::Price;
use crate::engine::trade::{BookEntry, Fill};

/// Where a live order currently rests, enough information to find its
/// queue without scanning the whole book.
struct Location {
    symbol: String,
    side: Side,
    price: Price,
}

/// Owns all engine state. There is exactly one of these per process;
/// every mutation happens through its methods and no reference into a
/// book's interior is ever returned.
#[derive(Default)]
pub struct MatchingEngine {
    books: BTreeMap<String, SymbolBook>,
    index: HashMap<u32, Location>,
    /// Every identifier ever accepted by `place`, live or not, so a
    /// reused identifier is rejected even after its order is gone.
    /// Only ever grows.
    seen_ids: HashSet<u32>,
}

impl MatchingEngine {
    pub fn new() -> Self {
        MatchingEngine {
            books: BTreeMap::new(),
            index: HashMap::new(),
            seen_ids: HashSet::new(),
        }
    }

    /// Place a validated order. Returns the fill lines produced by the
    /// cross phase, in emission order; the order itself is left
    /// resting on the book if any quantity remains afterward.
    ///
    /// # Errors
    /// Returns [`EngineError::DuplicateOrderId`] if `order.id` has ever
    /// been accepted before; nothing is mutated in that case.
    pub fn place(&mut self, mut order: Order) -> Result<Vec<Fill>, EngineError> {
        if self.seen_ids.contains(&order.id) {
            return Err(EngineError::DuplicateOrderId { oid: order.id });
        }
        self.seen_ids.insert(order.id);

        trace!(
            oid = order.id,
            symbol = %order.symbol,
            side = %order.side,
            qty = order.open_qty,
            price = %order.price,
            "placing order"
        );

        let book = self.books.entry(order.symbol.clone()).or_default();
        let result = matching::cross(book, &mut order);

        for filled_id in &result.filled_order_ids {
            self.index.remove(filled_id);
        }

        if !result.fills.is_empty() {
            debug!(oid = order.id, fills = result.fills.len(), "order crossed");
        }

        if order.open_qty > 0 {
            let side_book = match order.side {
                Side::Buy => &mut book.bids,
                Side::Sell => &mut book.asks,
            };
            let location = Location {
                symbol: order.symbol.clone(),
                side: order.side,
                price: order.price,
            };
            let id = order.id;
            side_book
                .entry(order.price)
                .or_insert_with(PriceLevel::new)
                .push_back(order);
            self.index.insert(id, location);
        }

        Ok(result.fills)
    }

    /// Cancel a resting order by identifier.
    ///
    /// # Errors
    /// Returns [`EngineError::OrderNotOnBook`] if `oid` is not
    /// currently resting — never accepted, already fully filled, or
    /// already cancelled are all indistinguishable and report the same
    /// error.
    pub fn cancel(&mut self, oid: u32) -> Result<u32, EngineError> {
        let Some(location) = self.index.remove(&oid) else {
            return Err(EngineError::OrderNotOnBook { oid });
        };

        let book = self
            .books
            .get_mut(&location.symbol)
            .expect("index entry without a book is an invariant violation");
        let side_book = match location.side {
            Side::Buy => &mut book.bids,
            Side::Sell => &mut book.asks,
        };
        let level = side_book
            .get_mut(&location.price)
            .expect("index entry without a price level is an invariant violation");
        level
            .remove(oid)
            .expect("index entry without the order in its level is an invariant violation");

        if level.is_empty() {
            side_book.remove(&location.price);
        }

        trace!(oid, "cancelled order");
        Ok(oid)
    }

    /// Render every resting order as one `BookEntry` per line: symbols
    /// lexicographically, asks then bids per symbol (both descending by
    /// price), and — within a level — asks most-recent-arrival-first
    /// while bids are oldest-arrival-first (see DESIGN.md for why the
    /// two sides render levels in opposite order).
    pub fn snapshot(&self) -> Vec<BookEntry> {
        let mut entries = Vec::new();

        for (symbol, book) in &self.books {
            for (&price, level) in book.asks.iter().rev() {
                for order in level.iter().rev() {
                    entries.push(BookEntry {
                        order_id: order.id,
                        symbol: symbol.clone(),
                        side: Side::Sell,
                        open_qty: order.open_qty,
                        price,
                    });
                }
            }
            for (&price, level) in book.bids.iter().rev() {
                for order in level.iter() {
                    entries.push(BookEntry {
                        order_id: order.id,
                        symbol: symbol.clone(),
                        side: Side::Buy,
                        open_qty: order.open_qty,
                        price,
                    });
                }
            }
        }

        entries
    }
}
