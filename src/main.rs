mod model;
mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, router, service::booking::BookingLocks, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();
    let calendar = startup::setup_calendar_sync(db.clone(), http_client, &config);

    let state = AppState::new(db, calendar, Arc::new(BookingLocks::new()));
    let app = router::router().with_state(state);

    tracing::info!("Listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
