use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mountain_server::app::{StartupError, build_state};
use mountain_server::config::ServerConfig;
use mountain_server::web::create_router;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "mountain_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Mountain info server listening");
    info!("  GET /health");
    info!("  GET /mountain-info?trailName=<name>");

    axum::serve(listener, app).await?;
    Ok(())
}
