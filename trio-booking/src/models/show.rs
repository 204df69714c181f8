//! Show form input

use serde::Deserialize;
use trio_core::models::{require_int, IntOrText};
use trio_core::ValidationError;

use super::schedule::normalize_start_time;

/// Show form as submitted; ids may arrive as numbers or numeric strings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    pub artist_id: Option<IntOrText>,
    pub venue_id: Option<IntOrText>,
    pub start_time: Option<String>,
}

/// Validated show booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    /// Normalized `YYYY-MM-DD HH:MM:SS`
    pub start_time: String,
}

impl TryFrom<ShowForm> for NewShow {
    type Error = ValidationError;

    fn try_from(form: ShowForm) -> Result<Self, Self::Error> {
        let artist_id = require_int("artist_id", form.artist_id.as_ref())?;
        let venue_id = require_int("venue_id", form.venue_id.as_ref())?;
        let start_time = form
            .start_time
            .as_deref()
            .ok_or(ValidationError::Missing { field: "start_time" })
            .and_then(normalize_start_time)?;

        Ok(Self {
            artist_id,
            venue_id,
            start_time,
        })
    }
}
