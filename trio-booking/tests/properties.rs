//! Property tests for area grouping and the show timeline

use proptest::prelude::*;
use trio_booking::db::{VenueInArea, VenueSummary};
use trio_booking::listing::group_by_area;
use trio_booking::models::schedule::{split_by_time, stamp, Scheduled};

fn venue_rows() -> impl Strategy<Value = Vec<VenueInArea>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["Austin", "Portland", "San Francisco"]),
            prop::sample::select(vec!["CA", "ME", "OR", "TX"]),
            "[A-Z][a-z]{0,8}",
            0i64..5,
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (city, state, name, upcoming))| VenueInArea {
                city: city.to_owned(),
                state: state.to_owned(),
                venue: VenueSummary {
                    id: i as i64 + 1,
                    name,
                    num_upcoming_shows: upcoming,
                },
            })
            .collect()
    })
}

struct At(String);

impl Scheduled for At {
    fn start_time(&self) -> &str {
        &self.0
    }
}

proptest! {
    /// Property: every venue lands in exactly one area matching its city and state
    #[test]
    fn prop_grouping_partitions_venues(rows in venue_rows()) {
        let total = rows.len();
        let expected: Vec<(i64, String, String)> = rows
            .iter()
            .map(|r| (r.venue.id, r.city.clone(), r.state.clone()))
            .collect();

        let areas = group_by_area(rows);

        let grouped: usize = areas.iter().map(|a| a.venues.len()).sum();
        prop_assert_eq!(grouped, total);

        for (id, city, state) in expected {
            let homes: Vec<_> = areas
                .iter()
                .filter(|a| a.venues.iter().any(|v| v.id == id))
                .collect();
            prop_assert_eq!(homes.len(), 1);
            prop_assert_eq!(&homes[0].city, &city);
            prop_assert_eq!(&homes[0].state, &state);
        }
    }

    /// Property: areas are unique and ordered by (state, city)
    #[test]
    fn prop_areas_sorted(rows in venue_rows()) {
        let areas = group_by_area(rows);
        for pair in areas.windows(2) {
            prop_assert!((&pair[0].state, &pair[0].city) < (&pair[1].state, &pair[1].city));
        }
    }

    /// Property: the timeline split agrees with chronological comparison
    #[test]
    fn prop_split_matches_chronology(
        secs in prop::collection::vec(0i64..4_000_000_000, 0..30),
        now_secs in 0i64..4_000_000_000,
    ) {
        let to_stamp = |s: i64| {
            stamp(chrono::DateTime::from_timestamp(s, 0).unwrap().naive_utc())
        };
        let now = to_stamp(now_secs);
        let items: Vec<At> = secs.iter().map(|s| At(to_stamp(*s))).collect();

        let timeline = split_by_time(items, &now);

        prop_assert_eq!(timeline.past.len(), secs.iter().filter(|s| **s <= now_secs).count());
        prop_assert_eq!(timeline.upcoming.len(), secs.iter().filter(|s| **s > now_secs).count());
    }
}
