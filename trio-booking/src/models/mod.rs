//! Booking form input and validation
//!
//! Forms deserialize leniently (every field optional) and are validated
//! when converted into their `New*` counterparts.

pub mod artist;
pub mod fields;
pub mod schedule;
pub mod show;
pub mod venue;

pub use artist::{ArtistForm, NewArtist};
pub use schedule::{now_stamp, split_by_time, Scheduled, Timeline};
pub use show::{NewShow, ShowForm};
pub use venue::{NewVenue, VenueForm};
