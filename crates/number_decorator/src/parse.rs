use std::num::IntErrorKind;
use thiserror::Error;

/// Reasons a token isn't a base-10 integer literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty numeric token")]
    Empty,
    #[error("Invalid digit in numeric token {0:?}")]
    InvalidDigit(String),
    #[error("Numeric token {0:?} out of range for i64")]
    OutOfRange(String),
}

/// Parses a base-10 integer literal with an optional leading `+` or `-`.
/// Whitespace and separators are not accepted.
pub fn parse_number(token: &str) -> Result<i64, ParseError> {
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::Empty => ParseError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseError::OutOfRange(token.to_owned())
        }
        _ => ParseError::InvalidDigit(token.to_owned()),
    })
}
