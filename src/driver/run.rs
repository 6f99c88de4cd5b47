use crate::probe::ProbeResult;

/// Every probe result of one benchmark invocation.
///
/// Rows are stored round-major and in completion order within a round; only
/// the persisted table cares about that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkRun {
    results: Vec<ProbeResult>,
}

impl BenchmarkRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_results(results: Vec<ProbeResult>) -> Self {
        Self { results }
    }

    /// Appends a fully resolved round.
    pub fn extend_round(&mut self, round: Vec<ProbeResult>) {
        self.results.extend(round);
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn successes(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn into_results(self) -> Vec<ProbeResult> {
        self.results
    }
}

impl<'a> IntoIterator for &'a BenchmarkRun {
    type Item = &'a ProbeResult;
    type IntoIter = std::slice::Iter<'a, ProbeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
