//! Booking repositories
//!
//! - Listings and searches compute show counts with JOINs, never per row
//! - Every write runs in its own transaction

pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::{Artist, ArtistRepo, ArtistSummary};
pub use shows::{Show, ShowRepo};
pub use venues::{Listing, Venue, VenueInArea, VenueRepo, VenueSummary};
