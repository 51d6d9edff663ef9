//! Readiness wait for asynchronous UI initialization

use crate::app::Application;
use crate::config::SettlePolicy;
use crate::error::HarnessError;
use std::thread;
use std::time::{Duration, Instant};

/// Block until `app` reports ready or the policy's timeout elapses
///
/// Returns how long the wait took.
pub fn wait_until_ready<A: Application + ?Sized>(
    app: &A,
    policy: &SettlePolicy,
) -> Result<Duration, HarnessError> {
    let start = Instant::now();
    let timeout = policy.timeout();

    loop {
        if app.is_ready() {
            let waited = start.elapsed();
            tracing::debug!(waited_ms = waited.as_millis(), "application ready");
            return Ok(waited);
        }

        let waited = start.elapsed();
        if waited >= timeout {
            tracing::error!(waited_ms = waited.as_millis(), "application did not become ready");
            return Err(HarnessError::NotReady { waited });
        }

        thread::sleep(policy.poll_interval().min(timeout - waited));
    }
}
