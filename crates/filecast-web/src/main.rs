mod api;
mod app;
mod config;
mod dto;
mod error;
mod state;
mod static_files;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, ServerConfig};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| app::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load(Cli::parse())?;
    let bind_addr = config.bind_addr();
    tracing::info!("serving {}", config.root.display());

    let app = app::build(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("filecast listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
