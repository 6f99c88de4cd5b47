//! One timed request against one provider.

#[path = "probe/types.rs"]
mod types;

#[path = "probe/http.rs"]
mod http;

pub use http::HttpProber;
pub use types::{PredictRequest, Prediction, ProbeResult, ProbeStatus};

use async_trait::async_trait;

use crate::registry::Provider;

/// Issues a single probe and folds every outcome into a [`ProbeResult`].
///
/// Implementations must not fail: transport problems, timeouts and
/// unexpected answers are all data.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, provider: &Provider, payload: &PredictRequest) -> ProbeResult;
}

