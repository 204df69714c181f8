//! Show start times
//!
//! Start times are stored as `YYYY-MM-DD HH:MM:SS` wall-clock text so that
//! comparing the strings compares the times. Past and upcoming are decided
//! against the server's local clock.

use chrono::{DateTime, Local, NaiveDateTime};
use trio_core::ValidationError;

/// Storage format for start times
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive layouts accepted besides RFC 3339
const ACCEPTED_FORMATS: [&str; 3] = [START_TIME_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a submitted start time into its storage form.
///
/// RFC 3339 input keeps the wall-clock time as written; the offset is
/// dropped.
pub fn normalize_start_time(raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "start_time" });
    }

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| {
            ACCEPTED_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .ok_or(ValidationError::InvalidFormat {
            field: "start_time",
            reason: "must be a date and time such as 2024-05-21 21:30:00",
        })?;

    Ok(stamp(parsed))
}

/// Format a time in storage form.
pub fn stamp(time: NaiveDateTime) -> String {
    time.format(START_TIME_FORMAT).to_string()
}

/// The current local time in storage form.
pub fn now_stamp() -> String {
    stamp(Local::now().naive_local())
}

/// Anything with a stored start time
pub trait Scheduled {
    fn start_time(&self) -> &str;
}

/// Shows split around a reference time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Split `items` into those starting strictly after `now` and the rest.
///
/// A show starting exactly at `now` is past, the same rule the upcoming
/// counts use in SQL. Order within each half is preserved.
pub fn split_by_time<T: Scheduled>(items: Vec<T>, now: &str) -> Timeline<T> {
    let (upcoming, past): (Vec<T>, Vec<T>) = items.into_iter().partition(|item| item.start_time() > now);
    Timeline { past, upcoming }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct At(&'static str);

    impl Scheduled for At {
        fn start_time(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn accepts_known_layouts() {
        let expected = "2035-04-01 20:00:00";
        assert_eq!(normalize_start_time("2035-04-01 20:00:00").unwrap(), expected);
        assert_eq!(normalize_start_time("2035-04-01T20:00:00").unwrap(), expected);
        assert_eq!(normalize_start_time("2035-04-01T20:00").unwrap(), expected);
        assert_eq!(normalize_start_time("2035-04-01T20:00:00.000Z").unwrap(), expected);
        assert_eq!(normalize_start_time("2035-04-01T20:00:00+02:00").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            normalize_start_time("next tuesday"),
            Err(ValidationError::InvalidFormat { field: "start_time", .. })
        ));
        assert_eq!(
            normalize_start_time("  ").unwrap_err(),
            ValidationError::Empty { field: "start_time" }
        );
    }

    #[test]
    fn splits_on_now() {
        let now = "2024-06-01 12:00:00";
        let timeline = split_by_time(
            vec![
                At("2024-05-01 20:00:00"),
                At("2024-06-01 12:00:00"),
                At("2019-01-01 00:00:00"),
                At("2030-01-01 00:00:00"),
            ],
            now,
        );

        let past: Vec<_> = timeline.past.iter().map(|s| s.0).collect();
        let upcoming: Vec<_> = timeline.upcoming.iter().map(|s| s.0).collect();
        assert_eq!(
            past,
            vec!["2024-05-01 20:00:00", "2024-06-01 12:00:00", "2019-01-01 00:00:00"]
        );
        assert_eq!(upcoming, vec!["2030-01-01 00:00:00"]);
    }

    #[test]
    fn stamp_sorts_like_time() {
        let a = normalize_start_time("2024-09-01T09:00").unwrap();
        let b = normalize_start_time("2024-10-01T08:00").unwrap();
        assert!(a < b);
        assert_eq!(now_stamp().len(), "2024-01-01 00:00:00".len());
    }
}
