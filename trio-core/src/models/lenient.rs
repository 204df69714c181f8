//! Numeric request fields that arrive either as JSON numbers or as strings.
//!
//! Browser forms post `"5"` where API clients post `5`; both must work.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A submitted integer that may have been sent as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IntOrText {
    Int(i64),
    Text(String),
}

impl IntOrText {
    /// Resolve to an integer, rejecting blank or non-numeric text.
    pub fn to_int(&self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Text(s) if s.trim().is_empty() => Err(ValidationError::Empty { field }),
            Self::Text(s) => s.trim().parse().map_err(|_| ValidationError::InvalidFormat {
                field,
                reason: "must be an integer",
            }),
        }
    }

    /// Resolve to an integer, falling back to `None` for anything unparseable.
    pub fn to_int_lossy(&self) -> Option<i64> {
        self.to_int("value").ok()
    }
}

impl From<i64> for IntOrText {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// Require a submitted integer field.
pub fn require_int(field: &'static str, value: Option<&IntOrText>) -> Result<i64, ValidationError> {
    value
        .ok_or(ValidationError::Missing { field })?
        .to_int(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        value: Option<IntOrText>,
    }

    fn parse(json: &str) -> Option<IntOrText> {
        serde_json::from_str::<Body>(json).unwrap().value
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(require_int("v", parse(r#"{"value": 3}"#).as_ref()), Ok(3));
        assert_eq!(require_int("v", parse(r#"{"value": " 4 "}"#).as_ref()), Ok(4));
    }

    #[test]
    fn rejects_blank_missing_and_garbage() {
        assert_eq!(
            require_int("v", parse(r#"{}"#).as_ref()),
            Err(ValidationError::Missing { field: "v" })
        );
        assert_eq!(
            require_int("v", parse(r#"{"value": ""}"#).as_ref()),
            Err(ValidationError::Empty { field: "v" })
        );
        assert!(matches!(
            require_int("v", parse(r#"{"value": "five"}"#).as_ref()),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn lossy_conversion() {
        assert_eq!(IntOrText::Text("7".into()).to_int_lossy(), Some(7));
        assert_eq!(IntOrText::Text("x".into()).to_int_lossy(), None);
    }
}
