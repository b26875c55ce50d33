//! # Domain Entities
//!
//! Core domain entities of the booking directory. All entities map directly
//! to their corresponding database tables.
//!
//! - **Venue**: a place that hosts shows
//! - **Artist**: a performer booked into shows
//! - **Show**: one artist at one venue at a start time
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod artist;
mod show;
mod venue;

pub use artist::{Artist, ArtistRepository, NewArtist};
pub use show::{NewShow, Show, ShowListing, ShowRepository};
pub use venue::{NewVenue, Venue, VenueRepository};

#[cfg(test)]
pub use artist::MockArtistRepository;
#[cfg(test)]
pub use show::MockShowRepository;
#[cfg(test)]
pub use venue::MockVenueRepository;
