use std::time::Instant;

use futures::stream::{FuturesUnordered, StreamExt};

use super::run::BenchmarkRun;
use crate::error::BenchError;
use crate::probe::{PredictRequest, Probe, ProbeResult};
use crate::registry::Provider;

/// Runs rounds of concurrent probes, one probe per provider per round.
pub struct BenchmarkDriver<P> {
    prober: P,
    payload: PredictRequest,
}

impl<P: Probe> BenchmarkDriver<P> {
    /// Creates a driver that sends `text` as the prediction payload.
    pub fn new(prober: P, text: impl Into<String>) -> Self {
        Self {
            prober,
            payload: PredictRequest::new(text),
        }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    pub fn payload(&self) -> &PredictRequest {
        &self.payload
    }

    /// Probes every provider `rounds` times.
    ///
    /// Rounds run strictly one after another; within a round all probes are
    /// in flight together and the round ends once each has resolved.
    pub async fn run(
        &self,
        providers: &[Provider],
        rounds: usize,
    ) -> Result<BenchmarkRun, BenchError> {
        if providers.is_empty() {
            return Err(BenchError::NoProviders);
        }
        log::info!(
            "Starting benchmarks across {} providers, {} rounds",
            providers.len(),
            rounds
        );

        let started = Instant::now();
        let mut run = BenchmarkRun::new();
        for round in 0..rounds {
            let results = self.run_round(providers).await;
            log::debug!(
                "round {}/{} done: {} of {} succeeded",
                round + 1,
                rounds,
                results.iter().filter(|r| r.is_success()).count(),
                results.len()
            );
            run.extend_round(results);
        }

        log::info!(
            "Benchmark finished: {} probes, {} succeeded, {:.0}ms",
            run.len(),
            run.successes(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(run)
    }

    async fn run_round(&self, providers: &[Provider]) -> Vec<ProbeResult> {
        let mut pending: FuturesUnordered<_> = providers
            .iter()
            .map(|provider| self.prober.probe(provider, &self.payload))
            .collect();

        let mut results = Vec::with_capacity(providers.len());
        while let Some(result) = pending.next().await {
            results.push(result);
        }
        results
    }
}
