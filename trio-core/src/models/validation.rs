//! Validation error types

use std::fmt;

/// Validation error for submitted fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field was not submitted at all
    Missing { field: &'static str },

    /// Field is empty (or only whitespace) when it shouldn't be
    Empty { field: &'static str },

    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Number outside the accepted range
    OutOfRange { field: &'static str, min: i64, max: i64 },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::InvalidFormat { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a submitted, non-blank text field and return it trimmed.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "difficulty",
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "difficulty must be between 1 and 5");
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("name", Some("  Hop  ")).unwrap(), "Hop");
    }

    #[test]
    fn require_text_rejects_missing_and_blank() {
        assert_eq!(
            require_text("name", None),
            Err(ValidationError::Missing { field: "name" })
        );
        assert_eq!(
            require_text("name", Some("   ")),
            Err(ValidationError::Empty { field: "name" })
        );
    }

    #[test]
    fn field_accessor() {
        let err = ValidationError::InvalidFormat {
            field: "state",
            reason: "must be a two-letter code",
        };
        assert_eq!(err.field(), "state");
    }
}
