//! Create and edit forms. Re-rendered with field errors when a
//! submission fails validation.

use super::layout::Page;
use crate::application::dto::{ArtistForm, ShowForm, VenueForm};
use crate::domain::{Genre, US_STATES};
use crate::shared::html::{escape, escape_opt};
use crate::shared::validation::FormErrors;

/// Whether a form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    fn action(self, base: &str) -> String {
        match self {
            FormMode::Create => format!("{}/create", base),
            FormMode::Edit(id) => format!("{}/{}/edit", base, id),
        }
    }
}

fn field_error(errors: &FormErrors, field: &str) -> String {
    match errors.get(field) {
        Some(message) => format!(r#"<span class="field-error">{}</span>"#, escape(message)),
        None => String::new(),
    }
}

fn text_input(errors: &FormErrors, name: &str, label: &str, value: Option<&str>) -> String {
    format!(
        r#"<label for="{name}">{label}</label><input type="text" id="{name}" name="{name}" value="{value}">{error}"#,
        name = name,
        label = label,
        value = escape_opt(value),
        error = field_error(errors, name)
    )
}

fn state_select(errors: &FormErrors, selected: &str) -> String {
    let options: String = US_STATES
        .iter()
        .map(|code| {
            let mark = if code.eq_ignore_ascii_case(selected) { " selected" } else { "" };
            format!(r#"<option value="{code}"{mark}>{code}</option>"#, code = code, mark = mark)
        })
        .collect();
    format!(
        r#"<label for="state">State</label><select id="state" name="state"><option value="">--</option>{}</select>{}"#,
        options,
        field_error(errors, "state")
    )
}

fn genre_select(errors: &FormErrors, chosen: &[String]) -> String {
    let options: String = Genre::ALL
        .iter()
        .map(|genre| {
            let label = genre.as_str();
            let mark = if chosen.iter().any(|c| c.trim().eq_ignore_ascii_case(label)) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{v}"{mark}>{v}</option>"#,
                v = escape(label),
                mark = mark
            )
        })
        .collect();
    format!(
        r#"<label for="genres">Genres</label><select id="genres" name="genres" multiple size="8">{}</select>{}"#,
        options,
        field_error(errors, "genres")
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{mark}> {label}</label>"#,
        name = name,
        label = label,
        mark = if checked { " checked" } else { "" }
    )
}

fn textarea(errors: &FormErrors, name: &str, label: &str, value: Option<&str>) -> String {
    format!(
        r#"<label for="{name}">{label}</label><textarea id="{name}" name="{name}" rows="3">{value}</textarea>{error}"#,
        name = name,
        label = label,
        value = escape_opt(value),
        error = field_error(errors, name)
    )
}

fn form_shell(title: &str, action: &str, fields: &str) -> String {
    format!(
        r#"<h1>{title}</h1><form method="post" action="{action}">{fields}<p><button type="submit">{title}</button></p></form>"#,
        title = title,
        action = action,
        fields = fields
    )
}

pub fn venue_form(mode: FormMode, form: &VenueForm, errors: &FormErrors) -> String {
    let title = match mode {
        FormMode::Create => "List a new venue",
        FormMode::Edit(_) => "Edit venue",
    };
    let fields = [
        text_input(errors, "name", "Name", Some(form.name.as_str())),
        text_input(errors, "city", "City", Some(form.city.as_str())),
        state_select(errors, &form.state),
        text_input(errors, "address", "Address", Some(form.address.as_str())),
        text_input(errors, "phone", "Phone", form.phone.as_deref()),
        genre_select(errors, &form.genres),
        text_input(errors, "image_link", "Image link", form.image_link.as_deref()),
        text_input(errors, "facebook_link", "Facebook link", form.facebook_link.as_deref()),
        text_input(errors, "website_link", "Website", form.website_link.as_deref()),
        checkbox("seeking_talent", "Looking for talent", form.seeking_talent),
        textarea(errors, "seeking_description", "Seeking description", form.seeking_description.as_deref()),
    ]
    .concat();

    Page::new(title, None).render(&form_shell(title, &mode.action("/venues"), &fields))
}

pub fn artist_form(mode: FormMode, form: &ArtistForm, errors: &FormErrors) -> String {
    let title = match mode {
        FormMode::Create => "List a new artist",
        FormMode::Edit(_) => "Edit artist",
    };
    let fields = [
        text_input(errors, "name", "Name", Some(form.name.as_str())),
        text_input(errors, "city", "City", Some(form.city.as_str())),
        state_select(errors, &form.state),
        text_input(errors, "phone", "Phone", form.phone.as_deref()),
        genre_select(errors, &form.genres),
        text_input(errors, "image_link", "Image link", form.image_link.as_deref()),
        text_input(errors, "facebook_link", "Facebook link", form.facebook_link.as_deref()),
        text_input(errors, "website_link", "Website", form.website_link.as_deref()),
        checkbox("seeking_venue", "Looking for venues", form.seeking_venue),
        textarea(errors, "seeking_description", "Seeking description", form.seeking_description.as_deref()),
    ]
    .concat();

    Page::new(title, None).render(&form_shell(title, &mode.action("/artists"), &fields))
}

pub fn show_form(form: &ShowForm, errors: &FormErrors) -> String {
    let title = "Book a show";
    let fields = [
        text_input(errors, "artist_id", "Artist ID", Some(form.artist_id.as_str())),
        text_input(errors, "venue_id", "Venue ID", Some(form.venue_id.as_str())),
        text_input(errors, "start_time", "Start time", Some(form.start_time.as_str())),
    ]
    .concat();

    Page::new(title, None).render(&form_shell(title, "/shows/create", &fields))
}
