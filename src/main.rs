use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sim_metrics_exporter::{api::AppState, config::Config, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NetworkSim metrics exporter");

    // Resolved once; immutable for the life of the process
    let config = Config::load()?;
    tracing::info!("Serving snapshot from {}", config.metrics_file.display());

    let addr = config.bind_addr();
    let app = create_router(AppState::new(config));

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
