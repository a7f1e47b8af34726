//! # SimpleCross
//!
//! A single-instance, in-memory limit-order matching engine for
//! internal orders across multiple symbols.
//!
//! The crate is organized around one total entry point,
//! [`dispatch::action`]: feed it one action line, get back the
//! sequence of result lines it produced. Everything under
//! [`engine`] is the matching core — order book state, the
//! price-time priority matching algorithm, cancel, and snapshot
//! rendering — and never touches text directly. Everything under
//! [`dispatch`] sits between raw lines and the engine: tokenizing,
//! validating, and formatting. [`cli`] is the thinnest layer of all:
//! argument parsing and a read/dispatch/write loop around a single
//! [`engine::MatchingEngine`].
//!
//! ## Design goals
//!
//! 1. **Correctness under price-time priority**: every match respects
//!    strict price priority, then FIFO arrival order within a price
//!    level, with no exceptions.
//! 2. **Total dispatch**: malformed or semantically invalid input never
//!    aborts the process — it produces exactly one `E` line and
//!    processing continues with the next line.
//! 3. **Deterministic snapshot rendering**: the `P` action's output
//!    order is fully specified, including the (non-obvious) asymmetry
//!    between how ask and bid price levels render their resting
//!    orders — see [`engine::MatchingEngine::snapshot`].
//!
//! ## Non-goals
//!
//! Persistence across restarts, multi-process coordination,
//! market-data dissemination beyond the `P` snapshot, time-in-force
//! variants other than plain limit, self-trade prevention, fractional
//! quantities, and non-positive prices or quantities are all out of
//! scope. None of these exclusions relax the crate's logging, error
//! handling, configuration, or test tooling — see `DESIGN.md`.

pub mod cli;
pub mod dispatch;
pub mod engine;
