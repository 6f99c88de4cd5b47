//! Local stand-in for the prediction service the cloud platforms host.
//!
//! `POST /predict` classifies text by counting positive and negative keywords
//! and sleeps for a random while to mimic platform overhead; `GET /health`
//! answers with a timestamp.

mod handlers;
mod sentiment;
mod types;

use std::ops::RangeInclusive;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

pub use sentiment::{classify, keyword_score, Sentiment};
pub use types::{HealthResponse, PredictionResponse};

const DEFAULT_MIN_DELAY_MS: u64 = 50;
const DEFAULT_MAX_DELAY_MS: u64 = 150;
pub const PROVIDER_ENV: &str = "CLOUD_PROVIDER";

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct ServerState {
    provider: String,
    delay_ms: RangeInclusive<u64>,
}

impl ServerState {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            delay_ms: DEFAULT_MIN_DELAY_MS..=DEFAULT_MAX_DELAY_MS,
        }
    }

    /// Label from `CLOUD_PROVIDER`, or `Unknown`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(PROVIDER_ENV).unwrap_or_else(|_| "Unknown".to_string()))
    }

    /// Bounds of the simulated processing delay, in milliseconds.
    pub fn with_delay_ms(mut self, min: u64, max: u64) -> Self {
        self.delay_ms = min.min(max)..=min.max(max);
        self
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .with_state(state)
}

/// Serves until the listener fails.
pub async fn serve(listener: TcpListener, state: ServerState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("Prediction service [{}] listening on {addr}", state.provider);
    }
    axum::serve(listener, router(state)).await
}
