use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use routecast::accuweather::AccuWeatherClient;
use routecast::config::RoutecastConfig;
use routecast::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = RoutecastConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let client = AccuWeatherClient::new(&config.weather)
        .context("Failed to create weather provider client")?;

    web::run(config.server.port, Arc::new(client)).await
}
