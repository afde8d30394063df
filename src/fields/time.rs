// src/fields/time.rs
//! `HHMMSS` time field decoding

use super::{clamped, normalize_fixed, parse_part, NmeaDate, UtcOffset};
use crate::error::{NmeaError, Result};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time of day decoded from an NMEA `HHMMSS` field.
///
/// Carries no timezone. Receivers report UTC, so use [`NmeaTime::on`] to get
/// a timezone-aware timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeParts")]
pub struct NmeaTime {
    hour: u32,
    minute: u32,
    second: u32,
    value: NaiveTime,
}

impl NmeaTime {
    /// Decode `HHMMSS[.fraction]`. Fractional seconds are truncated.
    pub fn decode(field: &str) -> Result<Self> {
        let digits = normalize_fixed(field);

        let hour: u32 = parse_part(field, clamped(&digits, 0..2), "hour")?;
        let minute: u32 = parse_part(field, clamped(&digits, 2..4), "minute")?;
        let second: u32 = parse_part(field, clamped(&digits, 4..6), "second")?;

        let time = Self::from_parts(hour, minute, second)
            .inspect_err(|_| log::debug!("Rejected time field {:?}", field))?;

        log::trace!("Decoded time {:?} as {}", field, time.value);
        Ok(time)
    }

    pub fn from_parts(hour: u32, minute: u32, second: u32) -> Result<Self> {
        let value = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            NmeaError::Range(format!(
                "no such time: {}h {}m {}s",
                hour, minute, second
            ))
        })?;

        Ok(Self {
            hour,
            minute,
            second,
            value,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn value(&self) -> NaiveTime {
        self.value
    }

    /// Combine with a decoded date into a UTC timestamp
    pub fn on(&self, date: &NmeaDate) -> DateTime<Utc> {
        UtcOffset::UTC.localize(date.value().and_time(self.value))
    }
}

#[derive(Deserialize)]
struct TimeParts {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TryFrom<TimeParts> for NmeaTime {
    type Error = NmeaError;

    fn try_from(parts: TimeParts) -> Result<Self> {
        Self::from_parts(parts.hour, parts.minute, parts.second)
    }
}

impl FromStr for NmeaTime {
    type Err = NmeaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<NmeaTime> for NaiveTime {
    fn from(time: NmeaTime) -> Self {
        time.value
    }
}

/// Renders the `HHMMSS` encoding
impl fmt::Display for NmeaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_day() {
        let time = NmeaTime::decode("235959").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (23, 59, 59));
    }

    #[test]
    fn test_short_input_padded() {
        let time = NmeaTime::decode("1").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (0, 0, 1));
    }

    #[test]
    fn test_fraction_truncated_not_rounded() {
        let time = NmeaTime::decode("123519.999").unwrap();
        assert_eq!(time.second(), 19);
        assert_eq!(time.value(), NaiveTime::from_hms_opt(12, 35, 19).unwrap());
    }

    #[test]
    fn test_hour_out_of_range() {
        assert!(matches!(NmeaTime::decode("240000"), Err(NmeaError::Range(_))));
    }

    #[test]
    fn test_minute_and_second_out_of_range() {
        assert!(matches!(NmeaTime::decode("126000"), Err(NmeaError::Range(_))));
        assert!(matches!(NmeaTime::decode("120060"), Err(NmeaError::Range(_))));
    }

    #[test]
    fn test_non_numeric() {
        let err = NmeaTime::decode("12xx19").unwrap_err();
        assert!(matches!(err, NmeaError::Format { field: "minute", .. }));
    }

    #[test]
    fn test_display_redecodes() {
        let time = NmeaTime::decode("071502.25").unwrap();
        assert_eq!(time.to_string(), "071502");
        assert_eq!(NmeaTime::decode(&time.to_string()).unwrap(), time);
    }

    #[test]
    fn test_json_rejects_out_of_range() {
        let json = r#"{"hour":25,"minute":0,"second":0,"value":"12:00:00"}"#;
        assert!(serde_json::from_str::<NmeaTime>(json).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let time = NmeaTime::decode("123519").unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(serde_json::from_str::<NmeaTime>(&json).unwrap(), time);
    }

    #[test]
    fn test_on_date() {
        let date = NmeaDate::decode("230394").unwrap();
        let time = NmeaTime::decode("123519").unwrap();
        assert_eq!(time.on(&date).to_rfc3339(), "2094-03-23T12:35:19+00:00");
    }
}
