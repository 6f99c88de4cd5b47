use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::types::{PredictRequest, Prediction, ProbeResult, ProbeStatus};
use super::Probe;
use crate::error::BenchError;
use crate::registry::Provider;

/// Probes endpoints over HTTP with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
    timeout: Duration,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self, BenchError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, timeout))
    }

    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn send(&self, provider: &Provider, payload: &PredictRequest) -> ProbeStatus {
        let response = match self
            .client
            .post(provider.url())
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return self.failure(err),
        };

        if response.status() != StatusCode::OK {
            return ProbeStatus::Error {
                code: response.status().as_u16(),
            };
        }

        match response.json::<Value>().await {
            Ok(body) => ProbeStatus::Success(Prediction::from_body(&body)),
            Err(err) => self.failure(err),
        }
    }

    fn failure(&self, err: reqwest::Error) -> ProbeStatus {
        let reason = if err.is_timeout() {
            format!("timed out after {}ms", self.timeout.as_millis())
        } else if err.is_connect() {
            format!("connection failed: {}", error_chain(&err))
        } else if err.is_decode() {
            format!("malformed response: {}", error_chain(&err))
        } else {
            error_chain(&err)
        };
        ProbeStatus::Failure { reason }
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, provider: &Provider, payload: &PredictRequest) -> ProbeResult {
        let start = Instant::now();
        let status = self.send(provider, payload).await;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        log::debug!(
            "probe provider={} status={} latency_ms={:.2}",
            provider.name(),
            status,
            latency_ms
        );
        ProbeResult::new(provider.name(), status, latency_ms)
    }
}

/// Flattens an error and its sources into one line for the status cell.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message.replace(['\n', '\r'], " ")
}
