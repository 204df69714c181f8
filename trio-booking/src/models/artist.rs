//! Artist form input

use serde::Deserialize;
use trio_core::models::require_text;
use trio_core::ValidationError;

use super::fields;

/// Artist form as submitted (create and edit)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    pub name: Option<String>,
    pub genres: Option<Vec<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl ArtistForm {
    /// Submitted name for flash messages, valid or not.
    pub fn display_name(&self) -> String {
        self.name.as_deref().unwrap_or_default().trim().to_owned()
    }
}

/// Validated artist fields ready for insert or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl TryFrom<ArtistForm> for NewArtist {
    type Error = ValidationError;

    fn try_from(form: ArtistForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("name", form.name.as_deref())?,
            city: require_text("city", form.city.as_deref())?,
            state: fields::state_code(form.state.as_deref())?,
            phone: fields::phone(form.phone.as_deref())?,
            genres: fields::genres(form.genres),
            website: fields::optional_text(form.website.as_deref()),
            facebook_link: fields::optional_text(form.facebook_link.as_deref()),
            seeking_venue: form.seeking_venue.unwrap_or(false),
            seeking_description: fields::optional_text(form.seeking_description.as_deref()),
            image_link: fields::optional_text(form.image_link.as_deref()),
        })
    }
}
