//! Request DTOs
//!
//! Form bodies submitted by the HTML pages. Each form validates with
//! `validator` and then converts into the domain's `New*` value with
//! trimmed, normalized fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidateUrl, ValidationError};

use crate::domain::{normalize_state, Artist, Genre, NewArtist, NewShow, NewVenue, Venue};
use crate::shared::datetime::{form_value, parse_start_time};
use crate::shared::validation::FormErrors;

/// Venue create/edit form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VenueForm {
    #[serde(default)]
    #[validate(
        custom(function = "required", message = "Name is required"),
        length(max = 120, message = "Name must be at most 120 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "required", message = "City is required"),
        length(max = 120, message = "City must be at most 120 characters")
    )]
    pub city: String,

    #[serde(default)]
    #[validate(custom(function = "known_state", message = "Choose a US state"))]
    pub state: String,

    #[serde(default)]
    #[validate(
        custom(function = "required", message = "Address is required"),
        length(max = 120, message = "Address must be at most 120 characters")
    )]
    pub address: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "phone_number", message = "Phone must look like 415-555-1234"))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "known_genres"))]
    pub genres: Vec<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        custom(function = "web_url", message = "Must be a valid http(s) URL"),
        length(max = 500, message = "Links must be at most 500 characters")
    )]
    pub image_link: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        custom(function = "web_url", message = "Must be a valid http(s) URL"),
        length(max = 500, message = "Links must be at most 500 characters")
    )]
    pub facebook_link: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        custom(function = "web_url", message = "Must be a valid http(s) URL"),
        length(max = 500, message = "Links must be at most 500 characters")
    )]
    pub website_link: Option<String>,

    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_talent: bool,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Validate and normalize into a `NewVenue`.
    pub fn parse(&self) -> Result<NewVenue, FormErrors> {
        self.validate()?;

        Ok(NewVenue {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: canonical_state(&self.state),
            address: self.address.trim().to_string(),
            phone: self.phone.as_deref().and_then(normalize_phone),
            genres: parse_genres(&self.genres),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        })
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// Artist create/edit form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ArtistForm {
    #[serde(default)]
    #[validate(
        custom(function = "required", message = "Name is required"),
        length(max = 120, message = "Name must be at most 120 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "required", message = "City is required"),
        length(max = 120, message = "City must be at most 120 characters")
    )]
    pub city: String,

    #[serde(default)]
    #[validate(custom(function = "known_state", message = "Choose a US state"))]
    pub state: String,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "phone_number", message = "Phone must look like 415-555-1234"))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "known_genres"))]
    pub genres: Vec<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        custom(function = "web_url", message = "Must be a valid http(s) URL"),
        length(max = 500, message = "Links must be at most 500 characters")
    )]
    pub image_link: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        custom(function = "web_url", message = "Must be a valid http(s) URL"),
        length(max = 500, message = "Links must be at most 500 characters")
    )]
    pub facebook_link: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        custom(function = "web_url", message = "Must be a valid http(s) URL"),
        length(max = 500, message = "Links must be at most 500 characters")
    )]
    pub website_link: Option<String>,

    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_venue: bool,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Validate and normalize into a `NewArtist`.
    pub fn parse(&self) -> Result<NewArtist, FormErrors> {
        self.validate()?;

        Ok(NewArtist {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: canonical_state(&self.state),
            phone: self.phone.as_deref().and_then(normalize_phone),
            genres: parse_genres(&self.genres),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        })
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

/// Show create form. Ids arrive as text so bad input can be reported per field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,

    #[serde(default)]
    pub venue_id: String,

    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    /// Blank form with the start time defaulted to `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: form_value(now),
            ..Self::default()
        }
    }

    /// Validate and convert into a `NewShow`. Existence of the referenced
    /// artist and venue is checked by the show service.
    pub fn parse(&self) -> Result<NewShow, FormErrors> {
        let mut errors = FormErrors::new();

        let artist_id = parse_id(&self.artist_id);
        if artist_id.is_none() {
            errors.add("artist_id", "Artist ID must be a positive number");
        }
        let venue_id = parse_id(&self.venue_id);
        if venue_id.is_none() {
            errors.add("venue_id", "Venue ID must be a positive number");
        }
        let start_time = parse_start_time(&self.start_time);
        if start_time.is_none() {
            errors.add("start_time", "Start time must look like 2035-04-01 20:00:00");
        }

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(NewShow {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

/// Search box submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

// ----- deserialization helpers -----

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.is_some_and(|v| is_checked(&v)))
}

/// Values browsers and the old select widget send for a ticked option.
pub fn is_checked(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "on" | "true"
    )
}

// ----- validators -----

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn known_state(value: &str) -> Result<(), ValidationError> {
    normalize_state(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("state"))
}

fn known_genres(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("genres").with_message("Choose at least one genre".into()));
    }
    if let Some(bad) = values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .find(|v| v.parse::<Genre>().is_err())
    {
        return Err(ValidationError::new("genres")
            .with_message(format!("Unknown genre: {}", bad.trim()).into()));
    }
    Ok(())
}

fn phone_number(value: &str) -> Result<(), ValidationError> {
    normalize_phone(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("phone"))
}

fn web_url(value: &str) -> Result<(), ValidationError> {
    let lower = value.to_ascii_lowercase();
    let scheme_ok = lower.starts_with("http://") || lower.starts_with("https://");
    if scheme_ok && value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

// ----- normalization -----

fn canonical_state(value: &str) -> String {
    normalize_state(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.trim().to_ascii_uppercase())
}

fn parse_genres(values: &[String]) -> Vec<Genre> {
    let mut genres: Vec<Genre> = values.iter().filter_map(|v| v.parse().ok()).collect();
    genres.sort();
    genres.dedup();
    genres
}

/// Accept `xxx-xxx-xxxx` or ten bare digits; returns the dashed form.
pub fn normalize_phone(value: &str) -> Option<String> {
    let value = value.trim();
    let digits: String = match value.split('-').collect::<Vec<_>>().as_slice() {
        [a, b, c] if a.len() == 3 && b.len() == 3 && c.len() == 4 => format!("{a}{b}{c}"),
        [whole] if whole.len() == 10 => whole.to_string(),
        _ => return None,
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
