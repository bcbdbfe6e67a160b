//! Movies Lambda - Main entry point
//!
//! This binary:
//! - Routes movie API requests to their handlers
//! - Runs under the AWS Lambda runtime, or as a local HTTP server for development

mod config;
mod handlers;
mod lambda;
mod local;
mod router;

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, RunMode};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    init_tracing(config.mode);
    tracing::info!("Starting Movies Lambda");
    tracing::info!("Configuration loaded: {:?}", config);

    match config.mode {
        RunMode::Lambda => lambda::run().await.map_err(|e| anyhow!(e)),
        RunMode::Local => local::serve(&config).await,
    }
}

fn init_tracing(mode: RunMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,movies_lambda=debug".into());

    match mode {
        // CloudWatch adds the ingestion time to every line
        RunMode::Lambda => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).without_time())
            .init(),
        RunMode::Local => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}
