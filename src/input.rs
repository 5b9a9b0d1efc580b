//! Parsing of user-entered values
//!
//! The heap accepts any [`Value`]; turning text into one is the caller's job.
//! This helper covers the common case of a single integer typed into a field.

use crate::traits::HeapError;
use crate::Value;

/// Parses a signed integer, ignoring surrounding whitespace
///
/// # Errors
/// Returns `HeapError::InvalidValue` carrying the original text when it is
/// empty, fractional, out of range or not a number.
pub fn parse_value(input: &str) -> Result<Value, HeapError> {
    input
        .trim()
        .parse::<Value>()
        .map_err(|_| HeapError::InvalidValue {
            input: input.to_string(),
        })
}
