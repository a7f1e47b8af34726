//! Line tokenization and field validation.

use std::str::FromStr;

use crate::engine::{validate_symbol, EngineError, Order, Price, Side};

/// A fully validated action, ready to hand to the engine.
pub enum Action {
    Place(Order),
    Cancel(u32),
    Snapshot,
}

pub fn parse_line(line: &str) -> Result<Action, EngineError> {
    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();

    let Some(&kind) = tokens.first() else {
        return Err(EngineError::MalformedLine {
            oid: None,
            detail: "empty line".to_string(),
        });
    };

    match kind {
        "O" => parse_place(&tokens),
        "X" => parse_cancel(&tokens),
        "P" => {
            if tokens.len() == 1 {
                Ok(Action::Snapshot)
            } else {
                Err(EngineError::MalformedLine {
                    oid: None,
                    detail: "P takes no arguments".to_string(),
                })
            }
        }
        other => Err(EngineError::MalformedLine {
            oid: None,
            detail: format!("unrecognized action '{other}'"),
        }),
    }
}

fn parse_place(tokens: &[&str]) -> Result<Action, EngineError> {
    let [_, oid_tok, symbol_tok, side_tok, qty_tok, price_tok] = tokens else {
        return Err(EngineError::MalformedLine {
            oid: None,
            detail: "O requires OID SYMBOL SIDE QTY PX".to_string(),
        });
    };

    let oid = parse_oid(oid_tok)?;
    let symbol = validate_symbol(symbol_tok, oid)?;
    let side = Side::from_str(side_tok).map_err(|_| EngineError::InvalidSide { oid })?;
    let qty = parse_qty(qty_tok, oid)?;
    let price = Price::from_str(price_tok).map_err(|_| EngineError::InvalidField {
        oid,
        field: "price",
    })?;

    Ok(Action::Place(Order::new(oid, symbol, side, qty, price)))
}

fn parse_cancel(tokens: &[&str]) -> Result<Action, EngineError> {
    let [_, oid_tok] = tokens else {
        return Err(EngineError::MalformedLine {
            oid: None,
            detail: "X requires OID".to_string(),
        });
    };
    Ok(Action::Cancel(parse_oid(oid_tok)?))
}

/// `oid = 1*10DIGIT`, fits an unsigned 32-bit value, and is strictly
/// positive. An OID that fails to parse at all is reported without an
/// identifier, since none was recovered.
fn parse_oid(token: &str) -> Result<u32, EngineError> {
    let malformed = || EngineError::MalformedLine {
        oid: None,
        detail: format!("invalid order id '{token}'"),
    };

    if token.is_empty() || token.len() > 10 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let value: u64 = token.parse().map_err(|_| malformed())?;
    if value == 0 || value > u64::from(u32::MAX) {
        return Err(malformed());
    }
    Ok(value as u32)
}

/// `qty = 1*5DIGIT`, fits an unsigned 16-bit value, and is strictly
/// positive. By this point the OID has already been recovered, so
/// failures carry it.
fn parse_qty(token: &str, oid: u32) -> Result<u16, EngineError> {
    let invalid = || EngineError::InvalidField {
        oid,
        field: "quantity",
    };

    if token.is_empty() || token.len() > 5 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: u32 = token.parse().map_err(|_| invalid())?;
    if value == 0 || value > u32::from(u16::MAX) {
        return Err(invalid());
    }
    Ok(value as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_line() {
        let err = parse_line("").unwrap_err();
        assert_eq!(
            err,
            EngineError::MalformedLine {
                oid: None,
                detail: "empty line".to_string()
            }
        );
    }

    #[test]
    fn rejects_wrong_token_count_for_place() {
        assert!(parse_line("O 1 IBM B 10").is_err());
    }

    #[test]
    fn rejects_oid_with_leading_zero_digits_fine_but_non_digit_rejected() {
        assert!(parse_line("O 1a IBM B 10 100.00000").is_err());
    }

    #[test]
    fn rejects_zero_oid() {
        let err = parse_line("O 0 IBM B 10 100.00000").unwrap_err();
        assert_eq!(err.oid(), 0);
    }

    #[test]
    fn rejects_invalid_side_with_recovered_oid() {
        let err = parse_line("O 7 IBM Q 10 100.00000").unwrap_err();
        assert_eq!(err, EngineError::InvalidSide { oid: 7 });
    }

    #[test]
    fn rejects_qty_out_of_range() {
        let err = parse_line("O 7 IBM B 0 100.00000").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidField {
                oid: 7,
                field: "quantity"
            }
        );
        let err = parse_line("O 7 IBM B 100000 100.00000").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidField {
                oid: 7,
                field: "quantity"
            }
        );
    }

    #[test]
    fn rejects_malformed_price_with_recovered_oid() {
        let err = parse_line("O 7 IBM B 10 100").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidField {
                oid: 7,
                field: "price"
            }
        );
    }

    #[test]
    fn accepts_well_formed_place() {
        assert!(matches!(
            parse_line("O 7 IBM B 10 100.00000"),
            Ok(Action::Place(_))
        ));
    }

    #[test]
    fn accepts_well_formed_cancel() {
        assert!(matches!(parse_line("X 7"), Ok(Action::Cancel(7))));
    }

    #[test]
    fn accepts_bare_print() {
        assert!(matches!(parse_line("P"), Ok(Action::Snapshot)));
    }

    #[test]
    fn rejects_print_with_arguments() {
        assert!(parse_line("P IBM").is_err());
    }

    #[test]
    fn tolerates_repeated_separating_spaces() {
        assert!(matches!(
            parse_line("O  7   IBM  B  10  100.00000"),
            Ok(Action::Place(_))
        ));
    }
}
