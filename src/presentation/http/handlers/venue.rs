//! Venue Handlers
//!
//! Listing, search, detail and the create/edit/delete flows for venues.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form, WithRejection};
use chrono::Utc;

use super::{invalid_form, parse_id};
use crate::application::dto::{SearchForm, VenueForm};
use crate::infrastructure::metrics;
use crate::presentation::http::flash::{self, FlashMessage};
use crate::presentation::views::{self, forms::FormMode};
use crate::shared::error::AppError;
use crate::shared::validation::FormErrors;
use crate::startup::AppState;

pub async fn list_venues(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let areas = state.venue_service().list_by_area(Utc::now()).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(views::venues::list_page(&areas, flash.as_ref()))))
}

pub async fn search_venues(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Form(form), _): WithRejection<Form<SearchForm>, AppError>,
) -> Result<(CookieJar, Html<String>), AppError> {
    let results = state
        .venue_service()
        .search(&form.search_term, Utc::now())
        .await?;
    tracing::debug!(term = %results.search_term, count = results.count, "Venue search");

    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(views::venues::search_page(&results, flash.as_ref()))))
}

pub async fn show_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(venue_id): Path<String>,
) -> Result<(CookieJar, Html<String>), AppError> {
    let id = parse_id(&venue_id, "Venue")?;
    let detail = state.venue_service().detail(id, Utc::now()).await?;

    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(views::venues::detail_page(&detail, flash.as_ref()))))
}

pub async fn create_venue_form() -> Html<String> {
    Html(views::forms::venue_form(
        FormMode::Create,
        &VenueForm::default(),
        &FormErrors::new(),
    ))
}

pub async fn create_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Form(form), _): WithRejection<Form<VenueForm>, AppError>,
) -> Response {
    let venue = match form.parse() {
        Ok(venue) => venue,
        Err(errors) => {
            return invalid_form(views::forms::venue_form(FormMode::Create, &form, &errors))
        }
    };

    let message = match state.venue_service().create(&venue).await {
        Ok(created) => {
            metrics::record_write("venue", "create", true);
            FlashMessage::success(format!("Venue {} was successfully listed!", created.name))
        }
        Err(e) => {
            metrics::record_write("venue", "create", false);
            tracing::error!(error = %e, name = %venue.name, "Failed to list venue");
            FlashMessage::error(format!(
                "An error occurred. Venue {} could not be listed.",
                venue.name
            ))
        }
    };

    (flash::push(jar, message), Redirect::to("/")).into_response()
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&venue_id, "Venue")?;
    let venue = state.venue_service().get(id).await?;

    Ok(Html(views::forms::venue_form(
        FormMode::Edit(id),
        &VenueForm::from(&venue),
        &FormErrors::new(),
    )))
}

pub async fn update_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(venue_id): Path<String>,
    WithRejection(Form(form), _): WithRejection<Form<VenueForm>, AppError>,
) -> Result<Response, AppError> {
    let id = parse_id(&venue_id, "Venue")?;
    let service = state.venue_service();
    let current = service.get(id).await?;

    let changes = match form.parse() {
        Ok(changes) => changes,
        Err(errors) => {
            return Ok(invalid_form(views::forms::venue_form(
                FormMode::Edit(id),
                &form,
                &errors,
            )))
        }
    };

    let message = match service.update(id, &changes).await {
        Ok(updated) => {
            metrics::record_write("venue", "update", true);
            FlashMessage::success(format!("Venue {} was successfully updated!", updated.name))
        }
        Err(AppError::NotFound(msg)) => return Err(AppError::NotFound(msg)),
        Err(e) => {
            metrics::record_write("venue", "update", false);
            tracing::error!(error = %e, venue_id = id, "Failed to update venue");
            FlashMessage::error(format!(
                "An error occurred. Venue {} could not be updated.",
                current.name
            ))
        }
    };

    Ok((flash::push(jar, message), Redirect::to(&format!("/venues/{}", id))).into_response())
}

/// Serves both `DELETE /venues/{id}` and the form-friendly
/// `POST /venues/{id}/delete`.
pub async fn delete_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(venue_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&venue_id, "Venue")?;
    let service = state.venue_service();
    let venue = service.get(id).await?;

    let message = match service.delete(&venue).await {
        Ok(()) => {
            metrics::record_write("venue", "delete", true);
            FlashMessage::success(format!("Venue {} was successfully deleted!", venue.name))
        }
        Err(AppError::NotFound(msg)) => return Err(AppError::NotFound(msg)),
        Err(e) => {
            metrics::record_write("venue", "delete", false);
            tracing::error!(error = %e, venue_id = id, "Failed to delete venue");
            FlashMessage::error(format!(
                "An error occurred. Venue {} could not be deleted.",
                venue.name
            ))
        }
    };

    Ok((flash::push(jar, message), Redirect::to("/venues")).into_response())
}
