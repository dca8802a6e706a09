use std::time::Duration;

/// Retry budget, backoff and pacing for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryPolicy {
    /// Sends per message, including the first
    pub max_attempts: u32,
    /// Backoff unit, multiplied by the failed attempt count
    pub backoff_base: Duration,
    /// Upper bound of the random extra wait; kept below `backoff_base`
    /// so consecutive waits still grow
    pub max_jitter: Duration,
    /// Pause after every item, delivered or not
    pub pacing: Duration,
}

impl DeliveryPolicy {
    pub fn interactive() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_millis(1500),
            max_jitter: Duration::ZERO,
            pacing: Duration::from_millis(1200),
        }
    }

    pub fn ci() -> Self {
        Self {
            max_jitter: Duration::from_millis(700),
            pacing: Duration::from_millis(1000),
            ..Self::interactive()
        }
    }

    /// Wait before the retry following `failed_attempts` retryable failures
    pub fn backoff(&self, failed_attempts: u32) -> Duration {
        self.backoff_base * failed_attempts
    }

    /// Clamp jitter below the backoff base
    pub fn normalized(mut self) -> Self {
        if self.max_jitter >= self.backoff_base {
            self.max_jitter = self.backoff_base / 2;
        }
        self.max_attempts = self.max_attempts.max(1);
        self
    }
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self::interactive()
    }
}
