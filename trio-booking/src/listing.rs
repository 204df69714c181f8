//! Venue listing grouped by area

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::{VenueInArea, VenueSummary};

/// Venues sharing a city and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group venues by (city, state).
///
/// Areas come out ordered by state then city, venues within an area by
/// name then id, whatever order the rows arrive in.
pub fn group_by_area(rows: Vec<VenueInArea>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for row in rows {
        areas
            .entry((row.state, row.city))
            .or_default()
            .push(row.venue);
    }

    areas
        .into_iter()
        .map(|((state, city), mut venues)| {
            venues.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            Area {
                city,
                state,
                venues,
            }
        })
        .collect()
}
