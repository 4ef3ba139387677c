//! Parsing utilities for the text matrix format
//!
//! Pure functions for the header and entry fragments of a line, returning
//! a [`ParseErrorKind`] that the codec attaches a line number to.

use crate::error::ParseErrorKind;
use crate::format::constants::{ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR, HEADER_SEPARATOR};

/// Parse a `key=<usize>` header line
///
/// Whitespace around the key and the value is ignored.
pub fn parse_header(line: &str, key: &'static str) -> Result<usize, ParseErrorKind> {
    let (found_key, value) = line
        .split_once(HEADER_SEPARATOR)
        .ok_or(ParseErrorKind::MalformedHeader(key))?;

    if found_key.trim() != key {
        return Err(ParseErrorKind::MalformedHeader(key));
    }

    parse_index(value).map_err(|_| ParseErrorKind::MalformedHeader(key))
}

/// Split a `(row, col, value)` line into its three trimmed fields
pub fn split_entry(line: &str) -> Result<[&str; 3], ParseErrorKind> {
    let inner = line
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(ParseErrorKind::MalformedEntry)?;

    let mut fields = [""; 3];
    let mut count = 0;
    for field in inner.split(ENTRY_SEPARATOR) {
        if count < fields.len() {
            fields[count] = field.trim();
        }
        count += 1;
    }

    if count != fields.len() {
        return Err(ParseErrorKind::FieldCount(count));
    }

    Ok(fields)
}

/// Parse a non-negative index from a string with overflow checking
///
/// Accepts ASCII digits only, after trimming surrounding whitespace.
pub fn parse_index(s: &str) -> Result<usize, ParseErrorKind> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseErrorKind::InvalidIndex);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(ParseErrorKind::InvalidIndex);
        }

        let digit = (byte - b'0') as usize;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseErrorKind::InvalidIndex)?;
    }

    Ok(result)
}
