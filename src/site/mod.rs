//! Axum-based site server: one server-rendered page, a small JSON API, and
//! the review board wiring. Body limits and a request timeout guard the only
//! inbound surface the site has.

mod handlers;
mod templates;

use crate::config::Config;
use crate::reviews::{ReviewBoard, ReviewService};
use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tera::Tera;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use handlers::{handle_analysis, handle_health, handle_home, handle_intake, handle_reviews};

/// Maximum request body size (64KB) — the intake form is the only payload
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout. Generous: /api/reviews and /api/analysis each await one
/// model round-trip.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<Tera>,
    pub board: Arc<ReviewBoard>,
    pub service: Arc<ReviewService>,
    pub default_locale: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            templates: Arc::new(templates::build_templates()?),
            board: Arc::new(ReviewBoard::new()),
            service: Arc::new(ReviewService::new(config.gemini.clone())),
            default_locale: supported_locale(&config.locale).unwrap_or("en").to_string(),
        })
    }
}

/// The page ships in exactly two languages.
pub(crate) fn supported_locale(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some("en"),
        "zh" => Some("zh"),
        _ => None,
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/api/reviews", get(handle_reviews))
        .route("/api/intake", post(handle_intake))
        .route("/api/analysis", get(handle_analysis))
        .route("/health", get(handle_health))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .with_state(state)
}

/// Bind and serve.
pub async fn run_site(host: &str, port: u16, config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    run_site_with_listener(host, listener, config).await
}

/// Serve from a pre-bound listener.
pub async fn run_site_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Config,
) -> Result<()> {
    let actual_port = listener.local_addr()?.port();
    let state = AppState::from_config(&config)?;

    if config.gemini.api_key.is_none() {
        tracing::info!(
            "no gemini credential configured — the reviews section will keep its mock dataset"
        );
    }
    tracing::info!("serving Serenity Space on http://{host}:{actual_port}");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
