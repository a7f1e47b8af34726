//! The cross phase of order placement: walking the opposite side of
//! the book in price-time priority and consuming the incoming order
//! against resting liquidity.

use crate::engine::book::SymbolBook;
use crate::engine::order::{Order, Side};
use crate::engine::price::Price;
use crate::engine::trade::Fill;

/// Result of running the cross phase for one incoming order.
pub struct CrossResult {
    /// Fill lines in emission order: aggressor then passive, per match,
    /// matches in the order they occurred.
    pub fills: Vec<Fill>,
    /// Identifiers of resting orders fully consumed and removed from
    /// their queue during this pass — the caller must also drop these
    /// from the engine's identifier index.
    pub filled_order_ids: Vec<u32>,
}

/// `BUY` at `order_price` is marketable against a resting `ask_price`
/// iff `order_price >= ask_price`; `SELL` at `order_price` is
/// marketable against a resting `bid_price` iff `order_price <= bid_price`.
fn marketable(side: Side, order_price: Price, opposite_price: Price) -> bool {
    match side {
        Side::Buy => order_price >= opposite_price,
        Side::Sell => order_price <= opposite_price,
    }
}

/// Walk the opposite side of `book` and consume `incoming` against it
/// in price-time priority, stopping when the incoming order is fully
/// filled, the opposite side is empty, or the best remaining opposite
/// price is no longer marketable.
///
/// Empty queues and price levels are removed as they're drained; the
/// side book never holds a crossable pair when this returns.
pub fn cross(book: &mut SymbolBook, incoming: &mut Order) -> CrossResult {
    let mut fills = Vec::new();
    let mut filled_order_ids = Vec::new();

    let opposite = match incoming.side {
        Side::Buy => &mut book.asks,
        Side::Sell => &mut book.bids,
    };

    loop {
        if incoming.open_qty == 0 {
            break;
        }

        // Re-derive the best opposite price each pass rather than
        // holding a cursor across mutations: a level can be removed
        // out from under us as it's drained.
        let best_price = match incoming.side {
            Side::Buy => opposite.keys().next().copied(),
            Side::Sell => opposite.keys().next_back().copied(),
        };
        let Some(best_price) = best_price else {
            break;
        };

        if !marketable(incoming.side, incoming.price, best_price) {
            break;
        }

        let level = opposite.get_mut(&best_price).expect("key just observed");

        while incoming.open_qty > 0 {
            let Some(resting) = level.front_mut() else {
                break;
            };

            let match_qty = incoming.open_qty.min(resting.open_qty);

            fills.push(Fill {
                order_id: incoming.id,
                symbol: incoming.symbol.clone(),
                qty: match_qty,
                price: best_price,
            });
            fills.push(Fill {
                order_id: resting.id,
                symbol: incoming.symbol.clone(),
                qty: match_qty,
                price: best_price,
            });

            incoming.open_qty -= match_qty;
            resting.open_qty -= match_qty;

            if resting.open_qty == 0 {
                let filled_id = resting.id;
                level.pop_front();
                filled_order_ids.push(filled_id);
            }
        }

        if level.is_empty() {
            opposite.remove(&best_price);
        }
    }

    CrossResult {
        fills,
        filled_order_ids,
    }
}
