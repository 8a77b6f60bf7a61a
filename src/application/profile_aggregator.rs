use std::num::NonZeroUsize;
use tracing::debug;
use crate::domain::*;
use crate::ports::*;
use super::RequestExecutor;

/// Repeats a request strictly one after another and reduces the timings.
///
/// The first failing trial aborts the run and the samples gathered so far are
/// discarded.
pub struct ProfileAggregator<'a, D, T, H, C, A>
where
    D: DnsResolver,
    T: TcpDialer,
    H: HttpClient,
    C: Clock,
    A: Announcer,
{
    executor: &'a RequestExecutor<D, T, H, C, A>,
}

impl<'a, D, T, H, C, A> ProfileAggregator<'a, D, T, H, C, A>
where
    D: DnsResolver,
    T: TcpDialer,
    H: HttpClient,
    C: Clock,
    A: Announcer,
{
    pub fn new(executor: &'a RequestExecutor<D, T, H, C, A>) -> Self {
        Self { executor }
    }

    pub async fn run(&self, target: &Target, count: NonZeroUsize) -> Result<ProfileSummary, GetprofError> {
        let mut samples = Vec::with_capacity(count.get());
        for trial in 1..=count.get() {
            let sample = self.trial(target).await?;
            debug!(trial, status = %sample.status, bytes = sample.bytes, elapsed = ?sample.duration, "sample");
            samples.push(sample);
        }
        ProfileSummary::from_samples(&samples).ok_or_else(|| GetprofError::other("profiling run collected no samples"))
    }

    async fn trial(&self, target: &Target) -> Result<Sample, GetprofError> {
        let clock = self.executor.clock();
        let start = clock.now();
        let response = self.executor.execute(target).await?;
        let elapsed = clock.now().saturating_duration_since(start);

        let status = response.status_code()?;
        Ok(Sample::new(elapsed, status, response.len()))
    }
}
