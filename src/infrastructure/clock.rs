use std::time::{Duration, Instant};
use crate::domain::GetprofError;
use crate::ports::Clock;

pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self { Self }
}

impl Default for TokioClock {
    fn default() -> Self { Self::new() }
}

impl Clock for TokioClock {
    fn now(&self) -> Instant { Instant::now() }

    async fn timeout<F, T>(&self, duration: Duration, future: F) -> Result<T, GetprofError>
    where
        F: std::future::Future<Output = T> + Send,
        T: Send,
    {
        tokio::time::timeout(duration, future).await.map_err(|_| GetprofError::timeout(format!("operation timed out after {:?}", duration)))
    }
}
