//! Route handlers organized by resource

pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

use serde::{Deserialize, Serialize};

/// Body of the venue and artist search forms
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResults<T> {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<T>,
}
