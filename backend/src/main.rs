use anyhow::Result;
use school_calendar_backend::config::AppConfig;
use school_calendar_backend::{create_router, initialize_backend};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Loading configuration");
    let config = AppConfig::load()?;

    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config);

    let addr = config.socket_addr();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
