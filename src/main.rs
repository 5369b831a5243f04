use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use turnero::config::AppConfig;
use turnero::router;
use turnero::services::api::http::HttpAppointmentApi;
use turnero::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let api = HttpAppointmentApi::from_config(&config)?;
    tracing::info!(
        "using scheduling API at {} (timeout: {:?})",
        config.api_base_url,
        config.api_timeout
    );

    let state = Arc::new(AppState::new(config.clone(), Box::new(api)));
    let app = router::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
