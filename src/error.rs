use thiserror::Error;

/// Setup failures that abort a benchmark.
///
/// Per-probe problems (connection refused, timeouts, non-200 answers) never
/// show up here; they are recorded as [`crate::ProbeStatus`] rows instead.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The registry has nothing to benchmark
    #[error("no providers configured")]
    NoProviders,
    /// Two providers share a name
    #[error("duplicate provider {name}")]
    DuplicateProvider { name: String },
    /// A configured endpoint URL could not be parsed
    #[error("invalid endpoint for provider {provider}: {message}")]
    InvalidEndpoint { provider: String, message: String },
    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),
    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(String),
    /// Result table could not be written or read
    #[error("result table error: {0}")]
    Table(String),
    /// A persisted row could not be turned back into a probe result
    #[error("malformed row {row}: {message}")]
    MalformedRow { row: usize, message: String },
    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for BenchError {
    fn from(err: reqwest::Error) -> Self {
        BenchError::Http(err.to_string())
    }
}

impl From<csv::Error> for BenchError {
    fn from(err: csv::Error) -> Self {
        BenchError::Table(err.to_string())
    }
}

impl From<toml::de::Error> for BenchError {
    fn from(err: toml::de::Error) -> Self {
        BenchError::Config(err.to_string())
    }
}
