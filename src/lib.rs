//! Multi-cloud inference benchmark harness.
//!
//! The same prediction service runs on several managed ML platforms. This crate
//! probes each platform's `/predict` endpoint concurrently over a number of
//! rounds, aggregates latency and cost per provider and persists the raw
//! result table.
//!
//! ```no_run
//! use std::time::Duration;
//! use cloudbench::{driver::BenchmarkDriver, probe::HttpProber, registry::EndpointRegistry, report};
//!
//! # async fn demo() -> Result<(), cloudbench::error::BenchError> {
//! let registry = EndpointRegistry::default();
//! let prober = HttpProber::new(Duration::from_secs(10))?;
//! let driver = BenchmarkDriver::new(prober, "This is excellent and amazing!");
//! let run = driver.run(registry.providers(), 10).await?;
//! report::persist(&run, "benchmark_results.csv")?;
//! for (provider, row) in report::summarize(&run) {
//!     println!("{provider}: {:.1}ms", row.latency.mean);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod probe;
pub mod registry;
pub mod report;
#[cfg(feature = "server")]
pub mod server;

pub use driver::{BenchmarkDriver, BenchmarkRun};
pub use error::BenchError;
pub use probe::{Prediction, Probe, ProbeResult, ProbeStatus};
pub use registry::{EndpointRegistry, Provider};
