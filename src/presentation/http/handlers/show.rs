//! Show Handlers

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form, WithRejection};
use chrono::Utc;

use super::{invalid_form, parse_id};
use crate::application::dto::ShowForm;
use crate::application::services::ShowError;
use crate::infrastructure::metrics;
use crate::presentation::http::flash::{self, FlashMessage};
use crate::presentation::views;
use crate::shared::error::AppError;
use crate::shared::validation::FormErrors;
use crate::startup::AppState;

pub async fn list_shows(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let shows = state.show_service().list().await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(views::shows::list_page(&shows, flash.as_ref()))))
}

pub async fn create_show_form() -> Html<String> {
    Html(views::forms::show_form(
        &ShowForm::starting_at(Utc::now()),
        &FormErrors::new(),
    ))
}

pub async fn create_show(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Form(form), _): WithRejection<Form<ShowForm>, AppError>,
) -> Response {
    let show = match form.parse() {
        Ok(show) => show,
        Err(errors) => return invalid_form(views::forms::show_form(&form, &errors)),
    };

    let message = match state.show_service().create(&show).await {
        Ok(_) => {
            metrics::record_write("show", "create", true);
            FlashMessage::success("Show was successfully listed!")
        }
        Err(ShowError::Invalid(errors)) => {
            return invalid_form(views::forms::show_form(&form, &errors));
        }
        Err(ShowError::App(e)) => {
            metrics::record_write("show", "create", false);
            tracing::error!(
                error = %e,
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                "Failed to list show"
            );
            FlashMessage::error("An error occurred. Show could not be listed.")
        }
    };

    (flash::push(jar, message), Redirect::to("/")).into_response()
}

/// Serves both `DELETE /shows/{id}` and `POST /shows/{id}/delete`.
pub async fn delete_show(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(show_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&show_id, "Show")?;

    let message = match state.show_service().delete(id).await {
        Ok(removed) => {
            metrics::record_write("show", "delete", true);
            FlashMessage::success(format!(
                "Show of {} at {} was successfully deleted!",
                removed.artist_name, removed.venue_name
            ))
        }
        Err(AppError::NotFound(msg)) => return Err(AppError::NotFound(msg)),
        Err(e) => {
            metrics::record_write("show", "delete", false);
            tracing::error!(error = %e, show_id = id, "Failed to delete show");
            FlashMessage::error("An error occurred. Show could not be deleted.")
        }
    };

    Ok((flash::push(jar, message), Redirect::to("/shows")).into_response())
}
