// src/fields/coordinate.rs
//! Latitude and longitude field decoding
//!
//! Decoders return unsigned magnitudes in decimal degrees. The hemisphere
//! indicator travels in a separate NMEA field; pass it to
//! [`Coordinate::signed`] to get a signed value.

use super::{clamped, parse_part};
use crate::error::{NmeaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which coordinate decoder to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    Latitude,
    Longitude,
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateKind::Latitude => write!(f, "latitude"),
            CoordinateKind::Longitude => write!(f, "longitude"),
        }
    }
}

/// Hemisphere indicator accompanying a coordinate field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hemisphere {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Hemisphere {
    /// The axis this indicator belongs to
    pub fn axis(&self) -> CoordinateKind {
        match self {
            Hemisphere::North | Hemisphere::South => CoordinateKind::Latitude,
            Hemisphere::East | Hemisphere::West => CoordinateKind::Longitude,
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

impl FromStr for Hemisphere {
    type Err = NmeaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Hemisphere::North),
            "S" => Ok(Hemisphere::South),
            "E" => Ok(Hemisphere::East),
            "W" => Ok(Hemisphere::West),
            _ => Err(NmeaError::Hemisphere(format!("unknown indicator {:?}", s))),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        };
        write!(f, "{}", letter)
    }
}

/// Latitude decoded from `DDMM.mmmm`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LatitudeParts")]
pub struct Latitude {
    degrees: u32,
    minutes: f64,
    value: f64,
}

impl Latitude {
    /// Two digits of degrees, then decimal minutes.
    pub fn decode(field: &str) -> Result<Self> {
        let field = field.trim();

        let degrees: u32 = parse_part(field, clamped(field, 0..2), "degrees")?;
        let minutes: f64 = parse_part(field, clamped(field, 2..field.len()), "minutes")?;
        let lat = Self::from_parts(degrees, minutes);

        log::trace!("Decoded latitude {:?} as {}", field, lat.value);
        Ok(lat)
    }

    pub fn from_parts(degrees: u32, minutes: f64) -> Self {
        Self {
            degrees,
            minutes,
            value: degrees as f64 + minutes / 60.0,
        }
    }

    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    /// Decimal minutes as encoded
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Unsigned decimal degrees
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Longitude decoded from `DDDMM.ssss`.
///
/// The text after the `.` is read as two digits of seconds followed by
/// sixtieths of a second, not as decimal minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LongitudeParts")]
pub struct Longitude {
    degrees: u32,
    minutes: u32,
    seconds: f64,
    value: f64,
}

impl Longitude {
    pub fn decode(field: &str) -> Result<Self> {
        let field = field.trim();

        let (base, rest) = field.split_once('.').ok_or_else(|| {
            log::debug!("Rejected longitude field {:?}", field);
            NmeaError::Structural(format!("longitude {:?} has no '.' separator", field))
        })?;
        // Anything past a second '.' is ignored
        let fraction = rest.split('.').next().unwrap_or(rest);

        if base.len() < 3 {
            return Err(NmeaError::Structural(format!(
                "longitude {:?} needs at least one degree digit before the minutes",
                field
            )));
        }
        let split = base.len() - 2;

        let degrees: u32 = parse_part(field, base.get(..split), "degrees")?;
        let minutes: u32 = parse_part(field, base.get(split..), "minutes")?;
        let whole: f64 = parse_part(field, clamped(fraction, 0..2), "seconds")?;
        let sixtieths: f64 =
            parse_part(field, clamped(fraction, 2..fraction.len()), "fractional seconds")?;

        let lon = Self::from_parts(degrees, minutes, whole + sixtieths / 60.0);

        log::trace!("Decoded longitude {:?} as {}", field, lon.value);
        Ok(lon)
    }

    pub fn from_parts(degrees: u32, minutes: u32, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            value: degrees as f64 + (minutes as f64 + seconds / 60.0) / 60.0,
        }
    }

    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Unsigned decimal degrees
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Serialized latitude components; `value` is recomputed
#[derive(Deserialize)]
struct LatitudeParts {
    degrees: u32,
    minutes: f64,
}

impl From<LatitudeParts> for Latitude {
    fn from(parts: LatitudeParts) -> Self {
        Self::from_parts(parts.degrees, parts.minutes)
    }
}

#[derive(Deserialize)]
struct LongitudeParts {
    degrees: u32,
    minutes: u32,
    seconds: f64,
}

impl From<LongitudeParts> for Longitude {
    fn from(parts: LongitudeParts) -> Self {
        Self::from_parts(parts.degrees, parts.minutes, parts.seconds)
    }
}

/// A decoded coordinate of either axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Coordinate {
    Latitude(Latitude),
    Longitude(Longitude),
}

impl Coordinate {
    /// Decode `field` with the decoder for `kind`
    pub fn decode(kind: CoordinateKind, field: &str) -> Result<Self> {
        match kind {
            CoordinateKind::Latitude => Latitude::decode(field).map(Coordinate::Latitude),
            CoordinateKind::Longitude => Longitude::decode(field).map(Coordinate::Longitude),
        }
    }

    pub fn kind(&self) -> CoordinateKind {
        match self {
            Coordinate::Latitude(_) => CoordinateKind::Latitude,
            Coordinate::Longitude(_) => CoordinateKind::Longitude,
        }
    }

    /// Unsigned decimal degrees
    pub fn value(&self) -> f64 {
        match self {
            Coordinate::Latitude(lat) => lat.value(),
            Coordinate::Longitude(lon) => lon.value(),
        }
    }

    /// Decimal degrees with the hemisphere applied: negative for S and W.
    pub fn signed(&self, hemisphere: Hemisphere) -> Result<f64> {
        if hemisphere.axis() != self.kind() {
            return Err(NmeaError::Hemisphere(format!(
                "{} is not a {} hemisphere",
                hemisphere,
                self.kind()
            )));
        }
        Ok(self.value() * hemisphere.sign())
    }
}

impl From<Latitude> for Coordinate {
    fn from(lat: Latitude) -> Self {
        Coordinate::Latitude(lat)
    }
}

impl From<Longitude> for Coordinate {
    fn from(lon: Longitude) -> Self {
        Coordinate::Longitude(lon)
    }
}
