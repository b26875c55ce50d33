//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgArtistRepository, PgShowRepository, PgVenueRepository,
//! };
//!
//! fn setup_repositories(pool: PgPool) {
//!     let venues = PgVenueRepository::new(pool.clone());
//!     let artists = PgArtistRepository::new(pool.clone());
//!     let shows = PgShowRepository::new(pool);
//! }
//! ```

pub mod artist_repository;
pub mod show_repository;
pub mod venue_repository;

pub use artist_repository::PgArtistRepository;
pub use show_repository::PgShowRepository;
pub use venue_repository::PgVenueRepository;

/// Build an ILIKE pattern matching `term` anywhere, with LIKE wildcards
/// in the term itself matched literally (escape character `\`).
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.trim().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
