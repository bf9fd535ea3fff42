//! Simulated network latency for the mocked services.
//!
//! In the browser build this waits on a `setTimeout`-backed timer; elsewhere
//! it resolves immediately so service calls stay deterministic in tests.

use std::time::Duration;

/// Wait for `duration` before resolving. Not cancellable.
pub async fn simulate_latency(duration: Duration) {
    #[cfg(feature = "csr")]
    {
        if !duration.is_zero() {
            gloo_timers::future::sleep(duration).await;
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = duration;
    }
}
