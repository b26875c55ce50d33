//! Application Startup
//!
//! Shared state, router assembly and server lifecycle.

use std::any::Any;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, trace::TraceLayer,
};

use crate::application::services::{ArtistService, ShowService, VenueService};
use crate::config::Settings;
use crate::domain::{ArtistRepository, ShowRepository, VenueRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgArtistRepository, PgShowRepository, PgVenueRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{create_security_headers_layer, logging, track_metrics};
use crate::shared::error::AppError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub venues: Arc<dyn VenueRepository>,
    pub artists: Arc<dyn ArtistRepository>,
    pub shows: Arc<dyn ShowRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by the PostgreSQL repositories.
    pub fn new(db: PgPool, settings: Settings) -> Self {
        Self {
            venues: Arc::new(PgVenueRepository::new(db.clone())),
            artists: Arc::new(PgArtistRepository::new(db.clone())),
            shows: Arc::new(PgShowRepository::new(db.clone())),
            db,
            settings: Arc::new(settings),
        }
    }

    pub fn venue_service(&self) -> VenueService {
        VenueService::new(self.venues.clone(), self.shows.clone())
    }

    pub fn artist_service(&self) -> ArtistService {
        ArtistService::new(self.artists.clone(), self.shows.clone())
    }

    pub fn show_service(&self) -> ShowService {
        ShowService::new(self.shows.clone(), self.venues.clone(), self.artists.clone())
    }
}

/// Router with the full middleware stack applied.
pub fn build_router(state: AppState) -> Router {
    let security = create_security_headers_layer(&state.settings.security);

    routes::create_router(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(track_metrics))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(logging::make_span))
        .layer(security)
}

/// Render a handler panic as the HTML 500 page.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database)
            .await
            .context("failed to connect to the database")?;
        tracing::info!(
            max_connections = settings.database.max_connections,
            "Database connection pool created"
        );

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("failed to apply migrations")?;
            tracing::info!("Database migrations applied");
        }

        let addr = settings.server_addr();
        let state = AppState::new(db, settings);
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        health::init_server_start();
        Ok(Self { listener, router })
    }

    /// Serve until Ctrl-C or SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
