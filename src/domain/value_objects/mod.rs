//! Value Objects
//!
//! Small immutable types shared by the entities and forms.

mod genre;
mod us_state;

pub use genre::{Genre, UnknownGenre};
pub use us_state::{normalize_state, US_STATES};
