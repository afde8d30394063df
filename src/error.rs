// src/error.rs
//! Error types for NMEA field decoding

use std::fmt;

pub type Result<T> = std::result::Result<T, NmeaError>;

#[derive(Debug)]
pub enum NmeaError {
    /// A slice of the field is not a valid integer or float
    Format { field: &'static str, input: String },
    /// Components parsed but lie outside calendar or clock bounds
    Range(String),
    /// The field is missing a separator or is too short to slice
    Structural(String),
    Hemisphere(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(String),
}

impl NmeaError {
    pub(crate) fn format(field: &'static str, input: &str) -> Self {
        NmeaError::Format {
            field,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for NmeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmeaError::Format { field, input } => {
                write!(f, "Format error: cannot read {} from {:?}", field, input)
            }
            NmeaError::Range(msg) => write!(f, "Range error: {}", msg),
            NmeaError::Structural(msg) => write!(f, "Structural error: {}", msg),
            NmeaError::Hemisphere(msg) => write!(f, "Hemisphere error: {}", msg),
            NmeaError::Io(e) => write!(f, "IO error: {}", e),
            NmeaError::Json(e) => write!(f, "JSON error: {}", e),
            NmeaError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for NmeaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NmeaError::Io(e) => Some(e),
            NmeaError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NmeaError {
    fn from(error: std::io::Error) -> Self {
        NmeaError::Io(error)
    }
}

impl From<serde_json::Error> for NmeaError {
    fn from(error: serde_json::Error) -> Self {
        NmeaError::Json(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let err = NmeaError::format("day", "x1");
        assert_eq!(err.to_string(), "Format error: cannot read day from \"x1\"");
    }

    #[test]
    fn test_io_source() {
        use std::error::Error;

        let err: NmeaError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(NmeaError::Range("month 13".to_string()).source().is_none());
    }
}
