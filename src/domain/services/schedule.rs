//! Show scheduling rules.
//!
//! A show is *past* when its calendar date (UTC) is strictly before today,
//! otherwise it is *upcoming*. Every count and list on the pages goes
//! through these functions so they always agree with each other.

use chrono::{DateTime, NaiveTime, Utc};

use crate::domain::entities::{ShowListing, Venue};

/// Whether a show has already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start_time.date_naive() < now.date_naive() {
            ShowTiming::Past
        } else {
            ShowTiming::Upcoming
        }
    }
}

/// Start of today (UTC). Shows starting at or after this instant are upcoming.
pub fn upcoming_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Past and upcoming shows, each ordered by start time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    pub past: Vec<ShowListing>,
    pub upcoming: Vec<ShowListing>,
}

/// Split shows into past and upcoming relative to `now`.
pub fn partition(mut shows: Vec<ShowListing>, now: DateTime<Utc>) -> Partitioned {
    shows.sort_by_key(|s| s.start_time);

    let (past, upcoming): (Vec<_>, Vec<_>) = shows
        .into_iter()
        .partition(|s| ShowTiming::classify(s.start_time, now) == ShowTiming::Past);

    Partitioned { past, upcoming }
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Venue>,
}

/// Group venues by (city, state). Areas are ordered by state then city;
/// venues keep their relative input order within an area.
pub fn group_by_area(venues: Vec<Venue>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();

    for venue in venues {
        match areas
            .iter_mut()
            .find(|a| a.city == venue.city && a.state == venue.state)
        {
            Some(area) => area.venues.push(venue),
            None => areas.push(Area {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![venue],
            }),
        }
    }

    // stable sort keeps first-seen order for identical keys
    areas.sort_by(|a, b| (&a.state, &a.city).cmp(&(&b.state, &b.city)));
    areas
}
