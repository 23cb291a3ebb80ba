//! Activity polling loop.
//!
//! Runs the evaluator on a fixed interval and logs each reading. What to do
//! with the readings is left to whoever consumes the logs.

use crate::evaluator::{ActivityEvaluator, ActivitySignals};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Spawns the polling thread.
///
/// The thread evaluates activity once per `interval` until `shutdown` is
/// set. A failed evaluation is logged and that cycle is skipped.
///
/// # Example
/// ```ignore
/// let shutdown = Arc::new(AtomicBool::new(false));
/// let evaluator = afkwatch::platform::system_evaluator(&config);
/// let handle = spawn_polling_thread(Arc::clone(&shutdown), config.poll_interval, evaluator);
///
/// shutdown.store(true, Ordering::SeqCst);
/// handle.join().unwrap();
/// ```
pub fn spawn_polling_thread<S>(
    shutdown: Arc<AtomicBool>,
    interval: Duration,
    evaluator: ActivityEvaluator<S>,
) -> JoinHandle<()>
where
    S: ActivitySignals + Send + 'static,
{
    thread::spawn(move || {
        tracing::info!(
            interval_ms = interval.as_millis(),
            "Activity polling thread started"
        );

        while !shutdown.load(Ordering::SeqCst) {
            thread::sleep(interval);
            poll_cycle(&evaluator);
        }

        tracing::info!("Activity polling thread shutting down");
    })
}

/// Performs a single evaluation and logs the outcome.
///
/// Returns the seconds since last activity, or `None` if the cycle was
/// skipped.
pub fn poll_cycle<S: ActivitySignals>(evaluator: &ActivityEvaluator<S>) -> Option<f64> {
    match evaluator.evaluate() {
        Ok(activity) => {
            tracing::debug!(
                seconds = activity.seconds,
                source = ?activity.source,
                "Seconds since last activity"
            );
            Some(activity.seconds)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Activity evaluation failed, skipping cycle");
            None
        }
    }
}
