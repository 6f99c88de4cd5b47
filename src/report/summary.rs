use std::collections::BTreeMap;

use super::stats::{mean, LatencyStats};
use crate::driver::BenchmarkRun;
use crate::probe::{ProbeResult, ProbeStatus};

/// Per-provider aggregate of a [`BenchmarkRun`].
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub provider: String,
    pub count: usize,
    pub successes: usize,
    pub errors: usize,
    pub failures: usize,
    /// Over every probe with a recorded latency, whatever its status
    pub latency: LatencyStats,
    /// Mean over successful probes that reported it
    pub processing_time_ms: Option<f64>,
    /// Mean over successful probes that reported it
    pub confidence: Option<f64>,
    pub sentiments: BTreeMap<String, usize>,
}

/// Groups a run by provider. Pure: the same run always yields the same map.
pub fn summarize(run: &BenchmarkRun) -> BTreeMap<String, SummaryRow> {
    let mut groups: BTreeMap<&str, Vec<&ProbeResult>> = BTreeMap::new();
    for result in run {
        groups.entry(result.provider()).or_default().push(result);
    }

    groups
        .into_iter()
        .map(|(provider, results)| (provider.to_string(), summarize_provider(provider, &results)))
        .collect()
}

fn summarize_provider(provider: &str, results: &[&ProbeResult]) -> SummaryRow {
    let latencies: Vec<f64> = results.iter().filter_map(|r| r.latency_ms()).collect();
    let predictions: Vec<_> = results.iter().filter_map(|r| r.prediction()).collect();

    let mut sentiments = BTreeMap::new();
    for label in predictions.iter().filter_map(|p| p.sentiment.as_ref()) {
        *sentiments.entry(label.clone()).or_insert(0) += 1;
    }

    SummaryRow {
        provider: provider.to_string(),
        count: results.len(),
        successes: predictions.len(),
        errors: results
            .iter()
            .filter(|r| matches!(r.status(), ProbeStatus::Error { .. }))
            .count(),
        failures: results
            .iter()
            .filter(|r| matches!(r.status(), ProbeStatus::Failure { .. }))
            .count(),
        latency: LatencyStats::from_samples(&latencies),
        processing_time_ms: mean(predictions.iter().filter_map(|p| p.processing_time_ms)),
        confidence: mean(predictions.iter().filter_map(|p| p.confidence)),
        sentiments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Prediction;

    fn success(provider: &str, latency: f64, confidence: f64) -> ProbeResult {
        ProbeResult::new(
            provider,
            ProbeStatus::Success(Prediction {
                processing_time_ms: Some(latency / 2.0),
                sentiment: Some("Positive".to_string()),
                confidence: Some(confidence),
            }),
            latency,
        )
    }

    fn sample_run() -> BenchmarkRun {
        BenchmarkRun::from_results(vec![
            success("A", 100.0, 0.8),
            ProbeResult::new("B", ProbeStatus::Error { code: 500 }, 10.0),
            success("A", 200.0, 0.6),
            ProbeResult::new(
                "B",
                ProbeStatus::Failure {
                    reason: "timed out after 10000ms".to_string(),
                },
                30.0,
            ),
        ])
    }

    #[test]
    fn latency_covers_every_status() {
        let summary = summarize(&sample_run());
        let b = &summary["B"];
        assert_eq!(b.count, 2);
        assert_eq!(b.errors, 1);
        assert_eq!(b.failures, 1);
        assert_eq!(b.successes, 0);
        assert_eq!(b.latency.mean, 20.0);
        assert_eq!(b.confidence, None);
        assert_eq!(b.processing_time_ms, None);
        assert!(b.sentiments.is_empty());
    }

    #[test]
    fn prediction_aggregates_use_successes_only() {
        let summary = summarize(&sample_run());
        let a = &summary["A"];
        assert_eq!(a.successes, 2);
        assert_eq!(a.latency.mean, 150.0);
        assert_eq!(a.processing_time_ms, Some(75.0));
        assert!((a.confidence.expect("confidence") - 0.7).abs() < 1e-9);
        assert_eq!(a.sentiments.get("Positive"), Some(&2));
    }

    #[test]
    fn summarize_is_repeatable() {
        let run = sample_run();
        assert_eq!(summarize(&run), summarize(&run));
    }

    #[test]
    fn empty_run_has_no_rows() {
        assert!(summarize(&BenchmarkRun::new()).is_empty());
    }
}
