//! Fusion of the idle and audio signals.
//!
//! Audio output is treated as proof of engagement: while anything is
//! audible the user is considered active, whatever the input idle time.

use crate::error::PlatformQueryError;
use crate::probe::{AudioMixer, AudioProbe, IdleProbe, InputClock};

/// The two capabilities the evaluator needs from the platform.
pub trait ActivitySignals {
    /// Seconds since the last keyboard/mouse input.
    fn idle_seconds(&self) -> Result<f64, PlatformQueryError>;

    /// Whether any audio session is audible. Never fails.
    fn is_audio_playing(&self) -> bool;
}

/// Platform signals backed by an [`IdleProbe`] and an [`AudioProbe`].
#[derive(Debug, Clone)]
pub struct SystemSignals<C, M> {
    idle: IdleProbe<C>,
    audio: AudioProbe<M>,
}

impl<C: InputClock, M: AudioMixer> SystemSignals<C, M> {
    pub fn new(idle: IdleProbe<C>, audio: AudioProbe<M>) -> Self {
        Self { idle, audio }
    }
}

impl<C: InputClock, M: AudioMixer> ActivitySignals for SystemSignals<C, M> {
    fn idle_seconds(&self) -> Result<f64, PlatformQueryError> {
        self.idle.idle_seconds()
    }

    fn is_audio_playing(&self) -> bool {
        self.audio.is_audio_playing()
    }
}

/// Which signal decided an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySource {
    Audio,
    Input,
}

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity {
    /// Seconds since last activity, input or audio.
    pub seconds: f64,
    pub source: ActivitySource,
}

/// Stateless evaluator combining both signals.
///
/// Each call re-reads the platform; nothing is remembered between calls.
#[derive(Debug, Clone)]
pub struct ActivityEvaluator<S> {
    signals: S,
}

impl<S: ActivitySignals> ActivityEvaluator<S> {
    pub fn new(signals: S) -> Self {
        Self { signals }
    }

    /// Evaluates the signals, reporting which one decided the value.
    ///
    /// Audio is checked first; the idle query only runs when nothing is
    /// audible, so its errors only surface on that path.
    pub fn evaluate(&self) -> Result<Activity, PlatformQueryError> {
        if self.signals.is_audio_playing() {
            return Ok(Activity {
                seconds: 0.0,
                source: ActivitySource::Audio,
            });
        }

        let seconds = self.signals.idle_seconds()?;
        Ok(Activity {
            seconds,
            source: ActivitySource::Input,
        })
    }

    /// Seconds since the last user activity.
    pub fn seconds_since_activity(&self) -> Result<f64, PlatformQueryError> {
        self.evaluate().map(|activity| activity.seconds)
    }
}
