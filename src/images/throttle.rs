//! Outbound-call pacing for the primary image provider.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::sleep;

/// Serializes outbound calls with a minimum delay between them. In-memory
/// only; resets on process restart.
pub struct RateLimiter {
    min_delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_request: Mutex::new(None),
        }
    }

    /// Wait until at least `min_delay` has passed since the previous call.
    /// Callers are queued on the internal lock, so requests go out one at
    /// a time.
    pub async fn wait(&self) {
        if self.min_delay.is_zero() {
            return;
        }

        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_delay {
                sleep(self.min_delay - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Latches once the provider reports quota exhaustion; stays tripped for
/// the process lifetime.
pub struct QuotaBreaker {
    tripped: AtomicBool,
}

impl QuotaBreaker {
    pub fn new() -> Self {
        Self {
            tripped: AtomicBool::new(false),
        }
    }

    pub fn trip(&self) {
        self.tripped.store(true, Ordering::Relaxed);
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped.load(Ordering::Relaxed)
    }
}

impl Default for QuotaBreaker {
    fn default() -> Self {
        Self::new()
    }
}
