//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod datetime;
pub mod error;
pub mod html;
pub mod validation;
