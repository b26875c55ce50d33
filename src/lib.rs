//! # Booking Directory Library
//!
//! A server-rendered directory of music venues, artists and the shows
//! that pair them:
//! - HTML pages rendered on the server, forms posted back to it
//! - PostgreSQL for persistent storage
//! - Prometheus metrics and JSON health probes
//!
//! ## Architecture
//!
//! - **Domain Layer**: entities, repository traits and scheduling rules
//! - **Application Layer**: services, form validation and view DTOs
//! - **Infrastructure Layer**: database pool, repositories and metrics
//! - **Presentation Layer**: routes, handlers, views and middleware
//!
//! ## Module Structure
//!
//! ```text
//! booking_directory/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ PostgreSQL and Prometheus
//! +-- presentation/   HTTP routes, HTML views, middleware
//! +-- shared/         Errors, validation, HTML escaping, dates
//! ```

pub mod config;

pub mod domain;

pub mod application;

pub mod infrastructure;

pub mod presentation;

pub mod shared;

pub mod startup;

pub mod telemetry;
