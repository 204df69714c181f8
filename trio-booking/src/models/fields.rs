//! Field rules shared by the venue and artist forms

use once_cell::sync::Lazy;
use regex::Regex;
use trio_core::ValidationError;

/// Two-letter state or region code, e.g. `CA`
static STATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("invalid state regex"));

/// Digits, spaces and `()+-.`, 7 to 20 characters
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9()+\-. ]{7,20}$").expect("invalid phone regex"));

/// Validate a state code and return it uppercased.
///
/// ```
/// use trio_booking::models::fields::state_code;
///
/// assert_eq!(state_code(Some(" ny ")).unwrap(), "NY");
/// assert!(state_code(Some("New York")).is_err());
/// ```
pub fn state_code(value: Option<&str>) -> Result<String, ValidationError> {
    let state = trio_core::models::require_text("state", value)?;
    if !STATE_RE.is_match(&state) {
        return Err(ValidationError::InvalidFormat {
            field: "state",
            reason: "must be a two-letter code",
        });
    }
    Ok(state.to_ascii_uppercase())
}

/// Validate an optional phone number. Blank counts as absent.
pub fn phone(value: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(phone) = optional_text(value) else {
        return Ok(None);
    };

    if !PHONE_RE.is_match(&phone) {
        return Err(ValidationError::InvalidFormat {
            field: "phone",
            reason: "must be 7-20 digits, spaces or ()+-.",
        });
    }
    Ok(Some(phone))
}

/// Trim an optional field, mapping blank to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Trimmed, non-blank genre names in submission order.
pub fn genres(value: Option<Vec<String>>) -> Vec<String> {
    value
        .unwrap_or_default()
        .iter()
        .filter_map(|g| optional_text(Some(g)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_rules() {
        assert_eq!(state_code(Some("ca")).unwrap(), "CA");
        assert_eq!(
            state_code(None).unwrap_err(),
            ValidationError::Missing { field: "state" }
        );
        assert_eq!(
            state_code(Some("  ")).unwrap_err(),
            ValidationError::Empty { field: "state" }
        );
        assert!(state_code(Some("C4")).is_err());
        assert!(state_code(Some("CAL")).is_err());
    }

    #[test]
    fn phone_rules() {
        assert_eq!(phone(None).unwrap(), None);
        assert_eq!(phone(Some("")).unwrap(), None);
        assert_eq!(phone(Some("123-123-1234")).unwrap().as_deref(), Some("123-123-1234"));
        assert!(phone(Some("+1 (415) 000.1234")).is_ok());
        assert!(phone(Some("12345")).is_err());
        assert!(phone(Some("call me maybe")).is_err());
    }

    #[test]
    fn genres_drop_blanks() {
        let g = genres(Some(vec![" Jazz ".into(), "".into(), "Folk".into()]));
        assert_eq!(g, vec!["Jazz", "Folk"]);
        assert!(genres(None).is_empty());
    }
}
