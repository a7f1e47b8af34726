//! Turns one raw action line into engine calls, and engine outcomes
//! into result lines.
//!
//! [`action`] is the single entry point the CLI driver calls once per
//! input line. It never panics and never propagates an error out of
//! the function: every failure becomes exactly one `E` line.

mod format;
mod parse;

use tracing::warn;

use crate::engine::MatchingEngine;
use format::{format_cancel_ack, format_error, format_fill, format_snapshot_entry};
use parse::Action;

/// Parse, dispatch, and format one action line. Returns the sequence
/// of result lines produced by that single call — empty if the action
/// was a snapshot of an empty book.
pub fn action(engine: &mut MatchingEngine, line: &str) -> Vec<String> {
    match parse::parse_line(line) {
        Err(err) => {
            warn!(line, %err, "rejected action line");
            vec![format_error(&err)]
        }
        Ok(Action::Place(order)) => match engine.place(order) {
            Ok(fills) => fills.iter().map(format_fill).collect(),
            Err(err) => vec![format_error(&err)],
        },
        Ok(Action::Cancel(oid)) => match engine.cancel(oid) {
            Ok(oid) => vec![format_cancel_ack(oid)],
            Err(err) => vec![format_error(&err)],
        },
        Ok(Action::Snapshot) => engine.snapshot().iter().map(format_snapshot_entry).collect(),
    }
}
