//! afkwatch - away-from-keyboard detection.
//!
//! Fuses two platform signals into a single "seconds since last activity"
//! value: time since the last keyboard/mouse input, and whether any audio
//! session is currently producing sound. Audio output counts as activity.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod platform;
pub mod poller;
pub mod probe;

#[cfg(windows)]
pub mod winapi_utils;

pub use config::WatcherConfig;
pub use error::{AudioFault, PlatformQueryError};
pub use evaluator::{Activity, ActivityEvaluator, ActivitySignals, ActivitySource, SystemSignals};
pub use probe::{AudioProbe, IdleProbe};
