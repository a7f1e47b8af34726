//! Engine error taxonomy.
//!
//! Every variant here maps to exactly one `E <oid> <message>` result
//! line (see [`crate::dispatch`]); no variant ever causes the process
//! to abort. This is a hard boundary: nothing above [`crate::dispatch::action`]
//! ever observes an [`EngineError`] directly.

use thiserror::Error;

/// A recoverable failure while parsing or applying one action line.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    /// The line could not be tokenized into a known action at all, or a
    /// required token was missing. `oid` is `None` when no identifier
    /// could be recovered from the line.
    #[error("{detail}")]
    MalformedLine { oid: Option<u32>, detail: String },

    /// The side token was present but was neither `B` nor `S`.
    #[error("Invalid side")]
    InvalidSide { oid: u32 },

    /// A numeric field (identifier, quantity, or price) failed to parse
    /// or was out of its allowed range.
    #[error("Invalid {field}")]
    InvalidField { oid: u32, field: &'static str },

    /// The symbol token was empty, longer than 8 characters, or
    /// contained a non-alphanumeric byte.
    #[error("Invalid symbol")]
    InvalidSymbol { oid: u32 },

    /// `place` was called with an identifier that has been accepted
    /// before, whether or not it is still resting.
    #[error("Duplicate order id")]
    DuplicateOrderId { oid: u32 },

    /// `cancel` was called with an identifier that is not currently
    /// resting (never accepted, already filled, or already cancelled).
    #[error("Order ID not on book")]
    OrderNotOnBook { oid: u32 },

    /// A defensive check caught a broken invariant. This should be
    /// unreachable; if it fires, the detail is logged at `error!`
    /// level by the dispatcher before being rendered.
    #[error("internal error: {detail}")]
    Internal { oid: u32, detail: String },
}

impl EngineError {
    /// The identifier to print in the `E <oid> ...` line: the parsed
    /// OID if one was recovered, `0` otherwise.
    pub fn oid(&self) -> u32 {
        match self {
            EngineError::MalformedLine { oid, .. } => oid.unwrap_or(0),
            EngineError::InvalidSide { oid }
            | EngineError::InvalidField { oid, .. }
            | EngineError::InvalidSymbol { oid }
            | EngineError::DuplicateOrderId { oid }
            | EngineError::OrderNotOnBook { oid }
            | EngineError::Internal { oid, .. } => *oid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_without_oid_reports_zero() {
        let err = EngineError::MalformedLine {
            oid: None,
            detail: "empty line".to_string(),
        };
        assert_eq!(err.oid(), 0);
    }

    #[test]
    fn duplicate_order_id_message_is_stable() {
        let err = EngineError::DuplicateOrderId { oid: 42 };
        assert_eq!(err.to_string(), "Duplicate order id");
        assert_eq!(err.oid(), 42);
    }

    #[test]
    fn order_not_on_book_message_is_stable() {
        let err = EngineError::OrderNotOnBook { oid: 99999 };
        assert_eq!(err.to_string(), "Order ID not on book");
    }
}
