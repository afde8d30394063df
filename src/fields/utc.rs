// src/fields/utc.rs
//! Zero-offset timezone descriptor

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

/// UTC as a timezone descriptor: no offset, no daylight saving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UtcOffset;

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset;

    pub fn utc_offset(&self) -> Duration {
        Duration::zero()
    }

    pub fn tz_name(&self) -> &'static str {
        "UTC"
    }

    pub fn dst(&self) -> Duration {
        Duration::zero()
    }

    pub fn fixed_offset(&self) -> FixedOffset {
        Utc.fix()
    }

    /// Attach UTC to a naive timestamp taken from a receiver
    pub fn localize(&self, naive: NaiveDateTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&naive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_descriptor() {
        let utc = UtcOffset::UTC;
        assert_eq!(utc.utc_offset(), Duration::zero());
        assert_eq!(utc.dst(), Duration::zero());
        assert_eq!(utc.tz_name(), "UTC");
        assert_eq!(utc.fixed_offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_localize() {
        let naive = NaiveDate::from_ymd_opt(2094, 3, 23)
            .unwrap()
            .and_hms_opt(12, 35, 19)
            .unwrap();
        let stamped = UtcOffset::UTC.localize(naive);
        assert_eq!(stamped.naive_utc(), naive);
        assert_eq!(stamped.to_rfc3339(), "2094-03-23T12:35:19+00:00");
    }
}
