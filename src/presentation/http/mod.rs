//! HTTP surface: routes, handlers and flash messages.

pub mod flash;
pub mod handlers;
pub mod routes;
