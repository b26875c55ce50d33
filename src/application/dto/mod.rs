//! Data Transfer Objects
//!
//! Submitted forms and the view models rendered from them.

pub mod request;
pub mod response;

pub use request::{ArtistForm, SearchForm, ShowForm, VenueForm};
pub use response::{
    AreaListing, ArtistDetail, HomeOverview, ListingEntry, SearchResults, VenueDetail,
};
