use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    DEFAULT_ENDPOINT, DEFAULT_LOG_ROTATE_KEEP, DEFAULT_LOG_ROTATE_SIZE, DEFAULT_OUTPUT,
    DEFAULT_ROUNDS, DEFAULT_TEXT, DEFAULT_TIMEOUT_SECONDS, DEMO_PROVIDERS,
};

/// Whole configuration file.
///
/// Omitting `[providers]` keeps the three demo platforms; an explicit but
/// empty table leaves nothing to benchmark.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
    pub benchmark: BenchmarkConfig,
    pub providers: BTreeMap<String, ProviderConfig>,
    pub logging: LoggingConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        let providers = DEMO_PROVIDERS
            .into_iter()
            .map(|(name, cost)| {
                let provider = ProviderConfig {
                    cost_per_1k: Some(cost),
                    ..ProviderConfig::default()
                };
                (name.to_string(), provider)
            })
            .collect();
        Self {
            benchmark: BenchmarkConfig::default(),
            providers,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub rounds: usize,
    pub timeout_seconds: u64,
    pub output: String,
    pub text: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            output: DEFAULT_OUTPUT.to_string(),
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub url: String,
    /// USD per 1000 requests
    pub cost_per_1k: Option<f64>,
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            cost_per_1k: None,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<String>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}
