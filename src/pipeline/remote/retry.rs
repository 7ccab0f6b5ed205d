use std::time::Duration;

/// Backoff for HTTP 429 on a single model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Total requests per model, first one included.
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl BackoffPolicy {
    /// Delay before retry number `retry` (0-based).
    ///
    /// A numeric `Retry-After` (whole seconds) wins over the exponential
    /// schedule. Both are capped at `max_delay`.
    pub fn delay(&self, retry: u32, retry_after: Option<&str>) -> Duration {
        let delay = match retry_after.and_then(|v| v.trim().parse::<u64>().ok()) {
            Some(secs) => Duration::from_secs(secs),
            None => self
                .initial_delay
                .saturating_mul(2u32.saturating_pow(retry)),
        };
        delay.min(self.max_delay)
    }

    pub fn allows_retry(&self, attempts_made: u32) -> bool {
        attempts_made < self.max_attempts
    }
}
