/// Distribution of a set of latency samples, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatencyStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1); zero for fewer than two samples
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl LatencyStats {
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std_dev = if sorted.len() > 1 {
            let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };

        Self {
            count: sorted.len(),
            mean,
            std_dev,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            p50: calculate_percentile(&sorted, 50.0),
            p90: calculate_percentile(&sorted, 90.0),
            p95: calculate_percentile(&sorted, 95.0),
            p99: calculate_percentile(&sorted, 99.0),
        }
    }
}

/// Linear-interpolated percentile over pre-sorted data; `percentile` is 0..=100.
pub fn calculate_percentile(sorted_data: &[f64], percentile: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let last = (sorted_data.len() - 1) as f64;
    let rank = (percentile / 100.0 * last).clamp(0.0, last);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    let weight = rank - lower as f64;
    sorted_data[lower].mul_add(1.0 - weight, sorted_data[upper] * weight)
}

pub(super) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
