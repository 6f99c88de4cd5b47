use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

impl PredictRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Fields decoded from a successful prediction response.
///
/// Each field is optional: an endpoint that omits one (or sends the wrong
/// type) still counts as a success, with the value left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    pub processing_time_ms: Option<f64>,
    pub sentiment: Option<String>,
    pub confidence: Option<f64>,
}

impl Prediction {
    pub fn from_body(body: &Value) -> Self {
        Self {
            processing_time_ms: body.get("processing_time_ms").and_then(Value::as_f64),
            sentiment: body
                .get("sentiment")
                .and_then(Value::as_str)
                .map(str::to_string),
            confidence: body.get("confidence").and_then(Value::as_f64),
        }
    }
}

/// Outcome class of a probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeStatus {
    /// HTTP 200 with a JSON body
    Success(Prediction),
    /// Any other HTTP status reported by the endpoint
    Error { code: u16 },
    /// Transport failure, timeout or undecodable body
    Failure { reason: String },
}

impl ProbeStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeStatus::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProbeStatus::Error { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProbeStatus::Failure { .. })
    }
}

const SUCCESS_LABEL: &str = "Success";
const ERROR_PREFIX: &str = "Error ";
const FAILURE_PREFIX: &str = "Failed: ";

/// Status cell text; the prediction payload lives in its own columns.
impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Success(_) => f.write_str(SUCCESS_LABEL),
            ProbeStatus::Error { code } => write!(f, "{ERROR_PREFIX}{code}"),
            ProbeStatus::Failure { reason } => write!(f, "{FAILURE_PREFIX}{reason}"),
        }
    }
}

/// Parses a status cell. `Success` comes back with an empty [`Prediction`];
/// callers fill it from the remaining columns.
impl FromStr for ProbeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == SUCCESS_LABEL {
            return Ok(ProbeStatus::Success(Prediction::default()));
        }
        if let Some(code) = s.strip_prefix(ERROR_PREFIX) {
            return code
                .trim()
                .parse()
                .map(|code| ProbeStatus::Error { code })
                .map_err(|_| format!("invalid status code in {s:?}"));
        }
        if let Some(reason) = s.strip_prefix(FAILURE_PREFIX) {
            return Ok(ProbeStatus::Failure {
                reason: reason.to_string(),
            });
        }
        Err(format!("unknown status {s:?}"))
    }
}

/// One timed request/response cycle against one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    provider: String,
    status: ProbeStatus,
    latency_ms: Option<f64>,
}

impl ProbeResult {
    pub fn new(provider: impl Into<String>, status: ProbeStatus, latency_ms: f64) -> Self {
        Self {
            provider: provider.into(),
            status,
            latency_ms: Some(latency_ms),
        }
    }

    /// A result whose round-trip time was never recorded, as found in tables
    /// that leave the latency cell empty on failed rows.
    pub fn without_latency(provider: impl Into<String>, status: ProbeStatus) -> Self {
        Self {
            provider: provider.into(),
            status,
            latency_ms: None,
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn status(&self) -> &ProbeStatus {
        &self.status
    }

    /// Total round-trip time. Probes always record it; only loaded tables
    /// can lack it.
    pub fn latency_ms(&self) -> Option<f64> {
        self.latency_ms
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.status {
            ProbeStatus::Success(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prediction_reads_contract_fields() {
        let body = json!({
            "sentiment": "Positive",
            "confidence": 0.8,
            "processing_time_ms": 50.0,
            "provider": "AWS_SageMaker"
        });
        let prediction = Prediction::from_body(&body);
        assert_eq!(prediction.sentiment.as_deref(), Some("Positive"));
        assert_eq!(prediction.confidence, Some(0.8));
        assert_eq!(prediction.processing_time_ms, Some(50.0));
    }

    #[test]
    fn prediction_degrades_missing_and_mistyped_fields() {
        let body = json!({ "sentiment": 3, "confidence": "high" });
        assert_eq!(Prediction::from_body(&body), Prediction::default());
    }

    #[test]
    fn status_cells_parse_back() {
        let cases = [
            ProbeStatus::Success(Prediction::default()),
            ProbeStatus::Error { code: 503 },
            ProbeStatus::Failure {
                reason: "connection refused: tcp connect error".to_string(),
            },
        ];
        for status in cases {
            let parsed: ProbeStatus = status.to_string().parse().expect("parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unknown_status_cell_is_rejected() {
        assert!("Pending".parse::<ProbeStatus>().is_err());
        assert!("Error abc".parse::<ProbeStatus>().is_err());
    }

    #[test]
    fn only_success_exposes_prediction() {
        let ok = ProbeResult::new("A", ProbeStatus::Success(Prediction::default()), 1.0);
        let err = ProbeResult::new("B", ProbeStatus::Error { code: 500 }, 2.0);
        assert!(ok.prediction().is_some());
        assert!(err.prediction().is_none());
        assert_eq!(err.latency_ms(), Some(2.0));
    }
}
