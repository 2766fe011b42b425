//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field was not supplied
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., a date)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Integer outside the accepted range
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Request part could not be decoded at all (bad JSON, non-numeric query)
    Malformed { location: &'static str, reason: String },
}

impl ValidationError {
    /// Name of the offending field or request part.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::OutOfRange { field, .. } => field,
            Self::Malformed { location, .. } => location,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                if *max == i64::MAX {
                    write!(f, "{} must be at least {}, got {}", field, min, value)
                } else {
                    write!(f, "{} must be between {} and {}, got {}", field, min, max, value)
                }
            }
            Self::Malformed { location, reason } => {
                write!(f, "malformed {}: {}", location, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
