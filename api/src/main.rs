//! Timeline API server
//!
//! Aggregates Nitter RSS/Atom feeds into a unified timeline, served as
//! JSON under `/api/timeline` alongside a minimal page that renders it.
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use clap::Parser;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod security;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::HttpFeedSource;
use app::{FeedUrlPolicy, TimelineService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub timeline_service: Arc<TimelineService<HttpFeedSource>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/healthz", get(health))
        .route("/static/app.js", get(handlers::app_js))
        .route("/static/style.css", get(handlers::style_css))
        .nest(
            "/api",
            Router::new().route("/timeline", get(handlers::get_timeline)),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security::security_headers,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Parser, Debug)]
#[command(name = "timeline-api", about = "Nitter timeline aggregation server", version)]
struct Args {
    /// Bind host (default from NT_SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (default from NT_SERVER_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,timeline_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let host = args.host.unwrap_or_else(|| config.server_host.clone());
    let port = args.port.unwrap_or(config.server_port);

    tracing::info!("Starting timeline API...");

    let source =
        Arc::new(HttpFeedSource::new(&config).context("failed to build feed HTTP client")?);
    let policy = FeedUrlPolicy::from_config(&config);
    let timeline_service = Arc::new(TimelineService::new(
        source,
        policy,
        config.max_feeds_per_request,
        config.sanitize_html,
    ));

    let state = AppState {
        timeline_service,
        config,
    };

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
