//! Renders engine outcomes as the textual result lines described by
//! the output line grammar.

use crate::engine::{BookEntry, EngineError, Fill};

pub fn format_fill(fill: &Fill) -> String {
    fill.to_string()
}

pub fn format_cancel_ack(oid: u32) -> String {
    format!("X {oid}")
}

pub fn format_snapshot_entry(entry: &BookEntry) -> String {
    entry.to_string()
}

pub fn format_error(err: &EngineError) -> String {
    format!("E {} {}", err.oid(), err)
}
