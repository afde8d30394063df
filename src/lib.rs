// src/lib.rs
//! NMEA Field Decoding Library
//!
//! Turns the date, time, latitude and longitude fields of NMEA sentences into
//! typed values. Splitting sentences into fields is left to the caller.

pub mod config;
pub mod error;
pub mod fields;

// Re-export main types for convenience
pub use error::{NmeaError, Result};
pub use fields::{
    CenturyWindow, Coordinate, CoordinateKind, Hemisphere, Latitude, Longitude, NmeaDate,
    NmeaTime, UtcOffset,
};
