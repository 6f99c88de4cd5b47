use std::collections::BTreeMap;
use std::fmt::Write;

use super::compare::Comparison;
use super::summary::SummaryRow;

fn opt(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{v:.precision$}"))
        .unwrap_or_else(|| "-".to_string())
}

/// Plain-text latency table, one line per provider.
pub fn render_summary(summaries: &BTreeMap<String, SummaryRow>) -> String {
    let width = summaries
        .keys()
        .map(String::len)
        .chain(std::iter::once("Provider".len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$} {:>5} {:>4} {:>4} {:>4} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>6}",
        "Provider", "count", "ok", "err", "fail", "mean", "std", "min", "p50", "p95", "max", "conf"
    );
    for row in summaries.values() {
        let stats = &row.latency;
        let _ = writeln!(
            out,
            "{:<width$} {:>5} {:>4} {:>4} {:>4} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>6}",
            row.provider,
            row.count,
            row.successes,
            row.errors,
            row.failures,
            stats.mean,
            stats.std_dev,
            stats.min,
            stats.p50,
            stats.p95,
            stats.max,
            opt(row.confidence, 3),
        );
    }
    out
}

/// Cost/latency comparison with the headline picks.
pub fn render_comparison(comparison: &Comparison) -> String {
    let width = comparison
        .rows
        .iter()
        .map(|r| r.provider.len())
        .chain(std::iter::once("Provider".len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    if let Some(fastest) = comparison.fastest.as_deref().and_then(|p| comparison.row(p)) {
        let _ = writeln!(
            out,
            "Fastest provider:  {} ({}ms)",
            fastest.provider,
            opt(fastest.mean_latency_ms, 1)
        );
    }
    if let Some(cheapest) = comparison.cheapest.as_deref().and_then(|p| comparison.row(p)) {
        let _ = writeln!(
            out,
            "Cheapest provider: {} (${})",
            cheapest.provider,
            opt(cheapest.cost_per_1k, 2)
        );
    }
    if let Some(avg) = comparison.average_latency_ms {
        let _ = writeln!(out, "Average latency:   {avg:.1}ms");
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<width$} {:>12} {:>12} {:>12} {:>10}",
        "Provider", "latency(ms)", "process(ms)", "$/1k req", "value"
    );
    for row in &comparison.rows {
        let _ = writeln!(
            out,
            "{:<width$} {:>12} {:>12} {:>12} {:>10}",
            row.provider,
            opt(row.mean_latency_ms, 2),
            opt(row.mean_processing_time_ms, 2),
            opt(row.cost_per_1k, 2),
            opt(row.value_score, 4),
        );
    }
    out
}
