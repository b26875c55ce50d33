//! Presentation Layer
//!
//! HTML pages, HTTP routes and middleware.

pub mod http;
pub mod middleware;
pub mod views;
