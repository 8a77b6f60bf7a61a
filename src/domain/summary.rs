use std::time::Duration;
use super::{stats, Sample, StatusCode};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub requests: usize,
    pub fastest: Duration,
    pub slowest: Duration,
    pub mean: Duration,
    pub median: Duration,
    pub successes: usize,
    /// Non-200 codes in the order they were seen, duplicates kept.
    pub error_codes: Vec<StatusCode>,
    pub smallest: usize,
    pub largest: usize,
}

impl ProfileSummary {
    /// Reduces a finished run. Returns `None` when no samples were collected.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let mut times: Vec<f64> = samples.iter().map(|s| s.duration.as_nanos() as f64).collect();
        let sizes: Vec<usize> = samples.iter().map(|s| s.bytes).collect();

        let (fastest, slowest) = stats::min_and_max(&times)?;
        let (smallest, largest) = stats::min_and_max(&sizes)?;
        let mean = stats::mean(&times)?;
        // Sorts `times`; must come after the order-sensitive reductions.
        let median = stats::median(&mut times)?;

        let successes = samples.iter().filter(|s| s.is_success()).count();
        let error_codes = samples.iter().filter(|s| !s.is_success()).map(|s| s.status).collect();

        Some(Self {
            requests: samples.len(),
            fastest: nanos(fastest),
            slowest: nanos(slowest),
            mean: nanos(mean),
            median: nanos(median),
            successes,
            error_codes,
            smallest,
            largest,
        })
    }

    /// Percentage of 200 responses, computed as `(successes / requests) * 100`
    /// in integer arithmetic: anything short of all-success reports 0.
    pub fn success_ratio(&self) -> usize {
        if self.requests == 0 {
            return 0;
        }
        (self.successes / self.requests) * 100
    }
}

fn nanos(value: f64) -> Duration {
    Duration::from_nanos(value as u64)
}
