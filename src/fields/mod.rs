// src/fields/mod.rs
//! Decoders for individual NMEA fields
//!
//! Each decoder takes the raw text of one field, already split out of its
//! sentence, and produces an immutable value.

pub mod coordinate;
pub mod date;
pub mod time;
pub mod utc;

pub use coordinate::{Coordinate, CoordinateKind, Hemisphere, Latitude, Longitude};
pub use date::{CenturyWindow, NmeaDate};
pub use time::NmeaTime;
pub use utc::UtcOffset;

use crate::error::{NmeaError, Result};
use std::ops::Range;
use std::str::FromStr;

/// Width of the fixed `DDMMYY` / `HHMMSS` encodings
const FIXED_WIDTH: usize = 6;

/// Drop any fractional part and left-pad with zeros to the fixed width.
///
/// Longer inputs are returned as-is; only the first six characters are read.
pub(crate) fn normalize_fixed(field: &str) -> String {
    let field = field.trim();
    let whole = match field.find('.') {
        Some(idx) => &field[..idx],
        None => field,
    };
    format!("{:0>width$}", whole, width = FIXED_WIDTH)
}

/// Byte slice clamped to the string length, so short inputs yield a shorter
/// (possibly empty) slice instead of failing. `None` only on a char boundary
/// violation.
pub(crate) fn clamped(s: &str, range: Range<usize>) -> Option<&str> {
    let end = range.end.min(s.len());
    let start = range.start.min(end);
    s.get(start..end)
}

/// Parse a numeric slice, mapping failures to a format error naming `field`.
pub(crate) fn parse_part<T: FromStr>(
    input: &str,
    slice: Option<&str>,
    field: &'static str,
) -> Result<T> {
    slice
        .and_then(|s| s.parse::<T>().ok())
        .ok_or_else(|| NmeaError::format(field, input))
}
