//! TOML configuration shared by the harness and its binary.

#[path = "config/types.rs"]
mod types;

#[path = "config/load.rs"]
mod load;

pub use load::{load_config, LoadedConfig};
pub use types::{BenchConfig, BenchmarkConfig, LoggingConfig, ProviderConfig};

pub const DEFAULT_ROUNDS: usize = 10;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_OUTPUT: &str = "benchmark_results.csv";
pub const DEFAULT_TEXT: &str =
    "This multi-cloud deployment strategy is project is excellent and amazing!";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/predict";
/// Demo platforms and their price in USD per 1000 requests.
pub(crate) const DEMO_PROVIDERS: [(&str, f64); 3] = [
    ("AWS SageMaker", 0.15),
    ("GCP Vertex AI", 0.12),
    ("Azure AI Studio", 0.18),
];
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;
