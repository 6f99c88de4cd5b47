use std::time::{Duration, Instant};

use axum::{extract::State, Json};
use rand::Rng;

use super::sentiment::classify;
use super::types::{HealthResponse, PredictionResponse};
use super::ServerState;
use crate::probe::PredictRequest;

pub async fn health() -> Json<HealthResponse> {
    let now = chrono::Utc::now();
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now.timestamp_micros() as f64 / 1_000_000.0,
    })
}

pub async fn predict(
    State(state): State<ServerState>,
    Json(req): Json<PredictRequest>,
) -> Json<PredictionResponse> {
    let start = Instant::now();
    let sentiment = classify(&req.text);
    let (confidence, delay_ms) = {
        let mut rng = rand::thread_rng();
        (
            sentiment.sample_confidence(&mut rng),
            rng.gen_range(state.delay_ms.clone()),
        )
    };

    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    let preview: String = req.text.chars().take(30).collect();
    log::info!(
        "[{}] Prediction for text: '{}...' processed in {:.2}ms",
        state.provider,
        preview,
        duration_ms
    );

    Json(PredictionResponse {
        sentiment: sentiment.to_string(),
        confidence,
        processing_time_ms: (duration_ms * 100.0).round() / 100.0,
        provider: state.provider.clone(),
    })
}
