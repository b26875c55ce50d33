//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **VenueService**: venue areas, search, detail and writes
//! - **ArtistService**: artist list, search, detail and writes
//! - **ShowService**: show listing, booking and removal

pub mod artist_service;
pub mod show_service;
pub mod venue_service;

pub use artist_service::ArtistService;
pub use show_service::{ShowError, ShowService};
pub use venue_service::VenueService;
