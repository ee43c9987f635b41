//! Fixed-delay pacing between paginated requests.
//!
//! The retailer's endpoints are public but undocumented and the rate limit
//! is assumed rather than known, so every paginated loop (store pages,
//! stock batches) runs strictly sequentially with a fixed pause between
//! requests. The pacer is injected into the client so tests can disable
//! the delay without touching the fetch loops. No retries and no backoff:
//! a failed request is handled by the caller's error policy, not repeated.

use std::time::Duration;

/// Inserts a fixed delay between consecutive requests.
#[derive(Debug, Clone)]
pub struct RequestPacer {
    delay: Duration,
}

impl RequestPacer {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// A pacer that never sleeps, for tests.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0)
    }

    /// Sleep for the configured delay. No-op when the delay is zero.
    pub async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        tracing::trace!(delay = ?self.delay, "pausing between requests");
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::RequestPacer;

    #[tokio::test]
    async fn disabled_pacer_returns_immediately() {
        let start = std::time::Instant::now();
        RequestPacer::disabled().pause().await;
        assert!(start.elapsed() < std::time::Duration::from_millis(50));
    }

    #[tokio::test]
    async fn pause_sleeps_the_configured_delay() {
        let pacer = RequestPacer::new(50);
        let start = std::time::Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() >= std::time::Duration::from_millis(50));
    }
}
