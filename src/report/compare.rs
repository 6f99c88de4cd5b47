use std::collections::BTreeMap;

use super::stats::mean;
use super::summary::SummaryRow;
use crate::registry::EndpointRegistry;

/// Cost and latency of one provider, side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub provider: String,
    /// Absent when no probe of this provider recorded a latency
    pub mean_latency_ms: Option<f64>,
    pub mean_processing_time_ms: Option<f64>,
    /// USD per 1000 requests
    pub cost_per_1k: Option<f64>,
    /// `1 / (mean latency * cost)`; higher is better
    pub value_score: Option<f64>,
}

/// Cross-provider view used by the report: who is fastest, who is cheapest.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub fastest: Option<String>,
    pub cheapest: Option<String>,
    /// Mean of the per-provider mean latencies
    pub average_latency_ms: Option<f64>,
}

impl Comparison {
    /// Joins summaries with the registry's prices. Providers missing from the
    /// registry, or without a price, are never the cheapest.
    pub fn build(summaries: &BTreeMap<String, SummaryRow>, registry: &EndpointRegistry) -> Self {
        let rows: Vec<ComparisonRow> = summaries
            .values()
            .map(|summary| {
                let cost = registry
                    .get(&summary.provider)
                    .and_then(|p| p.cost_per_1k());
                let latency = (summary.latency.count > 0).then_some(summary.latency.mean);
                ComparisonRow {
                    provider: summary.provider.clone(),
                    mean_latency_ms: latency,
                    mean_processing_time_ms: summary.processing_time_ms,
                    cost_per_1k: cost,
                    value_score: latency
                        .zip(cost)
                        .map(|(latency, cost)| latency * cost)
                        .filter(|denominator| *denominator > 0.0)
                        .map(|denominator| 1.0 / denominator),
                }
            })
            .collect();

        let fastest = rows
            .iter()
            .filter_map(|r| r.mean_latency_ms.map(|l| (r, l)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(r, _)| r.provider.clone());
        let cheapest = rows
            .iter()
            .filter_map(|r| r.cost_per_1k.map(|c| (r, c)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(r, _)| r.provider.clone());
        let average_latency_ms = mean(rows.iter().filter_map(|r| r.mean_latency_ms));

        Self {
            rows,
            fastest,
            cheapest,
            average_latency_ms,
        }
    }

    pub fn row(&self, provider: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.provider == provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::BenchmarkRun;
    use crate::probe::{Prediction, ProbeResult, ProbeStatus};
    use crate::registry::Provider;
    use crate::report::summarize;

    fn ok(provider: &str, latency: f64) -> ProbeResult {
        ProbeResult::new(
            provider,
            ProbeStatus::Success(Prediction {
                processing_time_ms: Some(50.0),
                sentiment: Some("Neutral".to_string()),
                confidence: Some(0.6),
            }),
            latency,
        )
    }

    fn registry() -> EndpointRegistry {
        EndpointRegistry::new(vec![
            Provider::new("fast", "http://fast.example/predict")
                .expect("fast")
                .with_cost_per_1k(0.20),
            Provider::new("cheap", "http://cheap.example/predict")
                .expect("cheap")
                .with_cost_per_1k(0.10),
            Provider::new("free", "http://free.example/predict").expect("free"),
        ])
        .expect("registry")
    }

    #[test]
    fn picks_fastest_and_cheapest() {
        let run = BenchmarkRun::from_results(vec![
            ok("fast", 50.0),
            ok("cheap", 200.0),
            ok("free", 400.0),
        ]);
        let comparison = Comparison::build(&summarize(&run), &registry());

        assert_eq!(comparison.fastest.as_deref(), Some("fast"));
        assert_eq!(comparison.cheapest.as_deref(), Some("cheap"));
        let average = comparison.average_latency_ms.expect("average");
        assert!((average - 650.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn value_score_needs_a_price() {
        let run = BenchmarkRun::from_results(vec![ok("fast", 50.0), ok("free", 400.0)]);
        let comparison = Comparison::build(&summarize(&run), &registry());

        let fast = comparison.row("fast").expect("fast row");
        assert!((fast.value_score.expect("score") - 0.1).abs() < 1e-9);
        assert_eq!(comparison.row("free").expect("free row").value_score, None);
    }

    #[test]
    fn providers_without_latency_are_never_fastest() {
        let run = BenchmarkRun::from_results(vec![
            ok("cheap", 200.0),
            ProbeResult::without_latency("fast", ProbeStatus::Error { code: 500 }),
        ]);
        let comparison = Comparison::build(&summarize(&run), &registry());

        assert_eq!(comparison.fastest.as_deref(), Some("cheap"));
        let fast = comparison.row("fast").expect("fast row");
        assert_eq!(fast.mean_latency_ms, None);
        assert_eq!(fast.value_score, None);
        assert_eq!(comparison.average_latency_ms, Some(200.0));
    }

    #[test]
    fn empty_summaries_compare_to_nothing() {
        let comparison = Comparison::build(&BTreeMap::new(), &registry());
        assert!(comparison.rows.is_empty());
        assert_eq!(comparison.fastest, None);
        assert_eq!(comparison.cheapest, None);
        assert_eq!(comparison.average_latency_ms, None);
    }
}
