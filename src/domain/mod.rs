//! # Domain Layer
//!
//! The domain layer contains the core business logic of the booking directory.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Venue, Artist, Show and their repository traits
//! - **value_objects**: genres and US state codes
//! - **services**: scheduling rules (past/upcoming, grouping by area)

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
