use std::time::Duration;
use super::StatusCode;

/// One profiling trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub duration: Duration,
    pub status: StatusCode,
    pub bytes: usize,
}

impl Sample {
    pub fn new(duration: Duration, status: StatusCode, bytes: usize) -> Self {
        Self { duration, status, bytes }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_ok()
    }
}
