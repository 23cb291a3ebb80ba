//! afkwatch - away-from-keyboard watcher.
//!
//! Logs seconds since the last user activity once per poll interval.
//! Audio playback counts as activity.

use afkwatch::platform::system_evaluator;
use afkwatch::poller::spawn_polling_thread;
use afkwatch::WatcherConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("afkwatch=info")),
        )
        .init();

    let config = WatcherConfig::from_env();
    tracing::info!(
        poll_interval_ms = config.poll_interval.as_millis(),
        silence_threshold = config.silence_threshold,
        "Starting afkwatch"
    );

    let shutdown = Arc::new(AtomicBool::new(false));

    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        tracing::info!("Shutdown signal received");
        shutdown_ctrlc.store(true, Ordering::SeqCst);
    })?;

    let evaluator = system_evaluator(&config);
    let polling_handle = spawn_polling_thread(shutdown, config.poll_interval, evaluator);

    polling_handle
        .join()
        .map_err(|_| "Polling thread panicked")?;

    tracing::info!("afkwatch has exited");
    Ok(())
}
