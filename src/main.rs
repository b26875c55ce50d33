//! # Booking Directory
//!
//! Entry point: tracing, configuration, then the HTTP server.

use anyhow::Result;
use tracing::info;

use booking_directory::config::Settings;
use booking_directory::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    booking_directory::telemetry::init_tracing();

    info!("Starting Booking Directory...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
