use reqwest::Url;

use crate::error::BenchError;

/// A named deployment target exposing a prediction endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub(super) name: String,
    pub(super) url: String,
    pub(super) cost_per_1k: Option<f64>,
}

impl Provider {
    /// Creates a provider after checking that `url` is an absolute http(s) URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self, BenchError> {
        let name = name.into();
        let url = url.into();
        let parsed = Url::parse(&url).map_err(|e| BenchError::InvalidEndpoint {
            provider: name.clone(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BenchError::InvalidEndpoint {
                provider: name,
                message: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        Ok(Self {
            name,
            url,
            cost_per_1k: None,
        })
    }

    /// Attaches the platform's price in USD per 1000 requests.
    pub fn with_cost_per_1k(mut self, cost: f64) -> Self {
        self.cost_per_1k = Some(cost);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn cost_per_1k(&self) -> Option<f64> {
        self.cost_per_1k
    }
}
