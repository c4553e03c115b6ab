//! Data models for the `TravelBlog` library
//!
//! This module contains the core domain models organized by concern:
//! - Location: search results, coordinates and location details
//! - Venue: hotels, restaurants and attractions
//! - Review: reviews and the supported review categories

pub mod location;
pub mod review;
pub mod venue;

// Re-export all public types for convenient access
pub use location::{Coordinates, Location, LocationDetails};
pub use review::{MAX_REVIEWS, Review, ReviewCategory, ReviewPage};
pub use venue::{MAX_VENUES, Venue, VenueKind};
