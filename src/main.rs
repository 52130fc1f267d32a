mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::booking_sweep,
    service::{mailer::Mailer, token::TokenService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::ensure_upload_dirs(&config).await?;

    let tokens = TokenService::new(&config.jwt_secret);
    let mailer = Mailer::from_config(&config)?;

    tracing::info!("Starting server");

    // Complete expired bookings hourly in the background.
    booking_sweep::start_scheduler(db.clone()).await?;

    let state = AppState::new(db, tokens, mailer, &config);
    let app = router::router(&config.upload_dir, config.max_upload_bytes).with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
