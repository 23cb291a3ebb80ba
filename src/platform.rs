//! Platform-specific signal sources.
//!
//! # Platform Support
//!
//! - **Windows**: `GetLastInputInfo`/`GetTickCount` for idle time, WASAPI
//!   session metering for audio.
//! - **Other platforms**: fallback stubs. The idle query fails with
//!   [`PlatformQueryError::Unsupported`] and audio always reads as silent.

use crate::config::WatcherConfig;
use crate::evaluator::{ActivityEvaluator, SystemSignals};
use crate::probe::{AudioProbe, IdleProbe};

#[cfg(windows)]
pub use crate::winapi_utils::{WinAudioMixer as SystemAudioMixer, WinInputClock as SystemInputClock};

#[cfg(not(windows))]
pub use fallback::{FallbackAudioMixer as SystemAudioMixer, FallbackInputClock as SystemInputClock};

/// Fallback signal sources for unsupported platforms.
#[cfg(not(windows))]
pub mod fallback {
    use crate::error::{AudioFault, PlatformQueryError};
    use crate::probe::{AudioMixer, AudioSession, InputClock, TickSnapshot};

    #[derive(Debug, Clone, Copy, Default)]
    pub struct FallbackInputClock;

    impl InputClock for FallbackInputClock {
        fn read_ticks(&self) -> Result<TickSnapshot, PlatformQueryError> {
            Err(PlatformQueryError::Unsupported {
                capability: "input idle time",
            })
        }
    }

    /// Session type of the fallback mixer. Never constructed.
    #[derive(Debug)]
    pub enum NoSession {}

    impl AudioSession for NoSession {
        fn has_live_process(&self) -> Result<bool, AudioFault> {
            match *self {}
        }

        fn peak_level(&self) -> Result<f32, AudioFault> {
            match *self {}
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct FallbackAudioMixer;

    impl AudioMixer for FallbackAudioMixer {
        type Session = NoSession;

        fn sessions(&self) -> Result<Vec<NoSession>, AudioFault> {
            Err(AudioFault::Unsupported)
        }
    }
}

/// Signals for the current build target.
pub type PlatformSignals = SystemSignals<SystemInputClock, SystemAudioMixer>;

/// Builds the current target's signals with the configured threshold.
pub fn system_signals(config: &WatcherConfig) -> PlatformSignals {
    SystemSignals::new(
        IdleProbe::new(SystemInputClock::default()),
        AudioProbe::with_threshold(SystemAudioMixer::default(), config.silence_threshold),
    )
}

/// Builds an evaluator over the current target's signals.
pub fn system_evaluator(config: &WatcherConfig) -> ActivityEvaluator<PlatformSignals> {
    ActivityEvaluator::new(system_signals(config))
}
