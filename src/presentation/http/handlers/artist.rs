//! Artist Handlers
//!
//! Listing, search, detail and the create/edit/delete flows for artists.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form, WithRejection};
use chrono::Utc;

use super::{invalid_form, parse_id};
use crate::application::dto::{ArtistForm, SearchForm};
use crate::infrastructure::metrics;
use crate::presentation::http::flash::{self, FlashMessage};
use crate::presentation::views::{self, forms::FormMode};
use crate::shared::error::AppError;
use crate::shared::validation::FormErrors;
use crate::startup::AppState;

pub async fn list_artists(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let artists = state.artist_service().list(Utc::now()).await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(views::artists::list_page(&artists, flash.as_ref()))))
}

pub async fn search_artists(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Form(form), _): WithRejection<Form<SearchForm>, AppError>,
) -> Result<(CookieJar, Html<String>), AppError> {
    let results = state
        .artist_service()
        .search(&form.search_term, Utc::now())
        .await?;
    tracing::debug!(term = %results.search_term, count = results.count, "Artist search");

    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(views::artists::search_page(&results, flash.as_ref()))))
}

pub async fn show_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(artist_id): Path<String>,
) -> Result<(CookieJar, Html<String>), AppError> {
    let id = parse_id(&artist_id, "Artist")?;
    let detail = state.artist_service().detail(id, Utc::now()).await?;

    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(views::artists::detail_page(&detail, flash.as_ref()))))
}

pub async fn create_artist_form() -> Html<String> {
    Html(views::forms::artist_form(
        FormMode::Create,
        &ArtistForm::default(),
        &FormErrors::new(),
    ))
}

pub async fn create_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Form(form), _): WithRejection<Form<ArtistForm>, AppError>,
) -> Response {
    let artist = match form.parse() {
        Ok(artist) => artist,
        Err(errors) => {
            return invalid_form(views::forms::artist_form(FormMode::Create, &form, &errors))
        }
    };

    let message = match state.artist_service().create(&artist).await {
        Ok(created) => {
            metrics::record_write("artist", "create", true);
            FlashMessage::success(format!("Artist {} was successfully listed!", created.name))
        }
        Err(e) => {
            metrics::record_write("artist", "create", false);
            tracing::error!(error = %e, name = %artist.name, "Failed to list artist");
            FlashMessage::error(format!(
                "An error occurred. Artist {} could not be listed.",
                artist.name
            ))
        }
    };

    (flash::push(jar, message), Redirect::to("/")).into_response()
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&artist_id, "Artist")?;
    let artist = state.artist_service().get(id).await?;

    Ok(Html(views::forms::artist_form(
        FormMode::Edit(id),
        &ArtistForm::from(&artist),
        &FormErrors::new(),
    )))
}

pub async fn update_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(artist_id): Path<String>,
    WithRejection(Form(form), _): WithRejection<Form<ArtistForm>, AppError>,
) -> Result<Response, AppError> {
    let id = parse_id(&artist_id, "Artist")?;
    let service = state.artist_service();
    let current = service.get(id).await?;

    let changes = match form.parse() {
        Ok(changes) => changes,
        Err(errors) => {
            return Ok(invalid_form(views::forms::artist_form(
                FormMode::Edit(id),
                &form,
                &errors,
            )))
        }
    };

    let message = match service.update(id, &changes).await {
        Ok(updated) => {
            metrics::record_write("artist", "update", true);
            FlashMessage::success(format!("Artist {} was successfully updated!", updated.name))
        }
        Err(AppError::NotFound(msg)) => return Err(AppError::NotFound(msg)),
        Err(e) => {
            metrics::record_write("artist", "update", false);
            tracing::error!(error = %e, artist_id = id, "Failed to update artist");
            FlashMessage::error(format!(
                "An error occurred. Artist {} could not be updated.",
                current.name
            ))
        }
    };

    Ok((flash::push(jar, message), Redirect::to(&format!("/artists/{}", id))).into_response())
}

/// Serves both `DELETE /artists/{id}` and the form-friendly
/// `POST /artists/{id}/delete`.
pub async fn delete_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(artist_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&artist_id, "Artist")?;
    let service = state.artist_service();
    let artist = service.get(id).await?;

    let message = match service.delete(&artist).await {
        Ok(()) => {
            metrics::record_write("artist", "delete", true);
            FlashMessage::success(format!("Artist {} was successfully deleted!", artist.name))
        }
        Err(AppError::NotFound(msg)) => return Err(AppError::NotFound(msg)),
        Err(e) => {
            metrics::record_write("artist", "delete", false);
            tracing::error!(error = %e, artist_id = id, "Failed to delete artist");
            FlashMessage::error(format!(
                "An error occurred. Artist {} could not be deleted.",
                artist.name
            ))
        }
    };

    Ok((flash::push(jar, message), Redirect::to("/artists")).into_response())
}
