//! Domain Services
//!
//! Business rules that span more than one entity.

pub mod schedule;

pub use schedule::{group_by_area, partition, upcoming_cutoff, Area, Partitioned, ShowTiming};
