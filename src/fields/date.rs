// src/fields/date.rs
//! `DDMMYY` date field decoding

use super::{clamped, normalize_fixed, parse_part};
use crate::error::{NmeaError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy for expanding a two-digit NMEA year into a full year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum CenturyWindow {
    /// Every two-digit year lands in the same century: `century + yy`
    Fixed { century: i32 },
    /// Years at or above `pivot` belong to the previous century
    Pivot { pivot: u8, century: i32 },
}

impl CenturyWindow {
    pub const fn fixed(century: i32) -> Self {
        CenturyWindow::Fixed { century }
    }

    pub const fn pivot(pivot: u8, century: i32) -> Self {
        CenturyWindow::Pivot { pivot, century }
    }

    /// Base century that two-digit years are added to
    pub fn century(&self) -> i32 {
        match *self {
            CenturyWindow::Fixed { century } | CenturyWindow::Pivot { century, .. } => century,
        }
    }

    /// Expand a two-digit year, `None` if the result overflows `i32`
    pub fn expand(&self, yy: u32) -> Option<i32> {
        let yy = i32::try_from(yy).ok()?;
        match *self {
            CenturyWindow::Fixed { century } => century.checked_add(yy),
            CenturyWindow::Pivot { pivot, century } => {
                if yy >= pivot as i32 {
                    century.checked_sub(100)?.checked_add(yy)
                } else {
                    century.checked_add(yy)
                }
            }
        }
    }
}

impl Default for CenturyWindow {
    fn default() -> Self {
        CenturyWindow::fixed(2000)
    }
}

/// A calendar date decoded from an NMEA `DDMMYY` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts")]
pub struct NmeaDate {
    day: u32,
    month: u32,
    year: i32,
    value: NaiveDate,
}

impl NmeaDate {
    /// Decode with the default `20YY` century window
    pub fn decode(field: &str) -> Result<Self> {
        Self::decode_with(field, CenturyWindow::default())
    }

    /// Decode `DDMMYY[.fraction]`, expanding the year through `window`.
    ///
    /// The fraction is discarded and short inputs are zero-padded on the
    /// left, so `"10180"` reads as 1 January.
    pub fn decode_with(field: &str, window: CenturyWindow) -> Result<Self> {
        let digits = normalize_fixed(field);

        let day: u32 = parse_part(field, clamped(&digits, 0..2), "day")?;
        let month: u32 = parse_part(field, clamped(&digits, 2..4), "month")?;
        let yy: u32 = parse_part(field, clamped(&digits, 4..6), "year")?;
        let year = window.expand(yy).ok_or_else(|| {
            NmeaError::Range(format!("year {} overflows century window {:?}", yy, window))
        })?;

        let date = Self::from_parts(day, month, year)
            .inspect_err(|_| log::debug!("Rejected date field {:?}", field))?;

        log::trace!("Decoded date {:?} as {}", field, date.value);
        Ok(date)
    }

    /// Build from already expanded components
    pub fn from_parts(day: u32, month: u32, year: i32) -> Result<Self> {
        let value = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            NmeaError::Range(format!(
                "no such date: day {}, month {}, year {}",
                day, month, year
            ))
        })?;

        Ok(Self {
            day,
            month,
            year,
            value,
        })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The composed calendar date
    pub fn value(&self) -> NaiveDate {
        self.value
    }
}

/// Serialized components; the composed date is rebuilt, never trusted
#[derive(Deserialize)]
struct DateParts {
    day: u32,
    month: u32,
    year: i32,
}

impl TryFrom<DateParts> for NmeaDate {
    type Error = NmeaError;

    fn try_from(parts: DateParts) -> Result<Self> {
        Self::from_parts(parts.day, parts.month, parts.year)
    }
}

impl FromStr for NmeaDate {
    type Err = NmeaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<NmeaDate> for NaiveDate {
    fn from(date: NmeaDate) -> Self {
        date.value
    }
}

/// Renders the `DDMMYY` encoding
impl fmt::Display for NmeaDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}",
            self.day,
            self.month,
            self.value.year().rem_euclid(100)
        )
    }
}
