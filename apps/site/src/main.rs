mod admissions;
mod api_client;
mod chat;
mod config;
mod contact;
mod errors;
mod library;
mod models;
mod pages;
mod render;
mod resume;
mod routes;
mod state;
#[cfg(test)]
mod testing;
mod validation;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Edu Aura site v{}", env!("CARGO_PKG_VERSION"));

    let api = ApiClient::new(&config.api_base_url, config.api_timeout)
        .context("failed to build institute API client")?;
    info!(
        "Institute API client initialized (base: {}, admissions via {:?})",
        config.api_base_url, config.admissions_delivery
    );

    let state = AppState::new(Arc::new(api), config.clone());

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
