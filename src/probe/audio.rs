//! Audio output probe.
//!
//! Scans the system's audio sessions and reports whether any of them is
//! producing audible output. The probe is best-effort: every fault is folded
//! into "this session is silent" and never reaches the caller.

use crate::error::AudioFault;

/// Peak level at or below which a session counts as silent.
///
/// Normalized to the `[0.0, 1.0]` peak-meter scale. Real pipelines never
/// output an exact zero, so this filters the noise floor.
pub const DEFAULT_SILENCE_THRESHOLD: f32 = 0.01;

/// Upper bound on sessions inspected per scan.
pub const MAX_SESSIONS_SCANNED: usize = 64;

/// One process's connection to the audio output mixer.
pub trait AudioSession {
    /// Whether the session belongs to a process that is still running.
    fn has_live_process(&self) -> Result<bool, AudioFault>;

    /// Instantaneous peak output level, normalized to `[0.0, 1.0]`.
    fn peak_level(&self) -> Result<f32, AudioFault>;
}

/// Enumerates the current audio sessions.
pub trait AudioMixer {
    type Session: AudioSession;

    fn sessions(&self) -> Result<Vec<Self::Session>, AudioFault>;
}

/// Audio signal contributed by a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    Audible,
    Silent,
    NoProcess,
}

/// Reports whether any audio session is currently audible.
#[derive(Debug, Clone)]
pub struct AudioProbe<M> {
    mixer: M,
    threshold: f32,
}

impl<M: AudioMixer> AudioProbe<M> {
    pub fn new(mixer: M) -> Self {
        Self::with_threshold(mixer, DEFAULT_SILENCE_THRESHOLD)
    }

    pub fn with_threshold(mixer: M, threshold: f32) -> Self {
        Self { mixer, threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns true on the first session whose peak exceeds the threshold.
    ///
    /// Sessions after the first audible one are not queried.
    pub fn is_audio_playing(&self) -> bool {
        let sessions = match self.mixer.sessions() {
            Ok(sessions) => sessions,
            Err(fault) => {
                tracing::debug!(%fault, "Audio session enumeration failed");
                return false;
            }
        };

        if sessions.len() > MAX_SESSIONS_SCANNED {
            tracing::debug!(
                count = sessions.len(),
                limit = MAX_SESSIONS_SCANNED,
                "Too many audio sessions, scanning only the first ones"
            );
        }

        sessions
            .iter()
            .take(MAX_SESSIONS_SCANNED)
            .enumerate()
            .any(|(index, session)| {
                let signal = self.probe_session(session).unwrap_or_else(|fault| {
                    tracing::trace!(index, %fault, "Audio session contributes no signal");
                    SessionSignal::Silent
                });
                signal == SessionSignal::Audible
            })
    }

    /// Classifies one session, surfacing any fault to the caller.
    pub fn probe_session(&self, session: &M::Session) -> Result<SessionSignal, AudioFault> {
        if !session.has_live_process()? {
            return Ok(SessionSignal::NoProcess);
        }

        let peak = session.peak_level()?;
        if peak > self.threshold {
            tracing::trace!(peak, threshold = self.threshold, "Audible session found");
            Ok(SessionSignal::Audible)
        } else {
            Ok(SessionSignal::Silent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct StubSession {
        live: Result<bool, AudioFault>,
        peak: Result<f32, AudioFault>,
        peak_reads: Rc<Cell<usize>>,
    }

    impl StubSession {
        fn playing(peak: f32) -> Self {
            Self {
                live: Ok(true),
                peak: Ok(peak),
                peak_reads: Rc::new(Cell::new(0)),
            }
        }
    }

    impl AudioSession for StubSession {
        fn has_live_process(&self) -> Result<bool, AudioFault> {
            self.live.clone()
        }

        fn peak_level(&self) -> Result<f32, AudioFault> {
            self.peak_reads.set(self.peak_reads.get() + 1);
            self.peak.clone()
        }
    }

    struct StubMixer(Result<Vec<StubSession>, AudioFault>);

    impl AudioMixer for StubMixer {
        type Session = StubSession;

        fn sessions(&self) -> Result<Vec<StubSession>, AudioFault> {
            self.0.clone()
        }
    }

    fn probe(sessions: Vec<StubSession>) -> AudioProbe<StubMixer> {
        AudioProbe::new(StubMixer(Ok(sessions)))
    }

    #[test]
    fn test_empty_session_list_is_silent() {
        assert!(!probe(vec![]).is_audio_playing());
    }

    #[test]
    fn test_loud_session_is_playing() {
        assert!(probe(vec![StubSession::playing(0.5)]).is_audio_playing());
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        assert!(!probe(vec![StubSession::playing(0.01)]).is_audio_playing());
        assert!(probe(vec![StubSession::playing(0.010_000_1)]).is_audio_playing());
        assert!(!probe(vec![StubSession::playing(0.0)]).is_audio_playing());
    }

    #[test]
    fn test_custom_threshold() {
        let probe = AudioProbe::with_threshold(
            StubMixer(Ok(vec![StubSession::playing(0.05)])),
            0.1,
        );
        assert_eq!(probe.threshold(), 0.1);
        assert!(!probe.is_audio_playing());
    }

    #[test]
    fn test_enumeration_failure_reads_as_silent() {
        let probe = AudioProbe::new(StubMixer(Err(AudioFault::Enumeration(
            "device removed".to_string(),
        ))));
        assert!(!probe.is_audio_playing());
    }

    #[test]
    fn test_faulting_session_does_not_hide_others() {
        let mut broken_process = StubSession::playing(0.9);
        broken_process.live = Err(AudioFault::Process("exited".to_string()));

        let mut broken_meter = StubSession::playing(0.9);
        broken_meter.peak = Err(AudioFault::PeakLevel("E_FAIL".to_string()));

        let sessions = vec![broken_process, broken_meter, StubSession::playing(0.3)];
        assert!(probe(sessions).is_audio_playing());
    }

    #[test]
    fn test_all_sessions_faulting_reads_as_silent() {
        let mut broken = StubSession::playing(0.9);
        broken.peak = Err(AudioFault::PeakLevel("E_FAIL".to_string()));
        assert!(!probe(vec![broken.clone(), broken]).is_audio_playing());
    }

    #[test]
    fn test_session_without_process_is_skipped() {
        let mut system_sounds = StubSession::playing(0.9);
        system_sounds.live = Ok(false);
        let reads = Rc::clone(&system_sounds.peak_reads);

        let probe = probe(vec![system_sounds.clone()]);
        assert_eq!(
            probe.probe_session(&system_sounds).unwrap(),
            SessionSignal::NoProcess
        );
        assert!(!probe.is_audio_playing());
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn test_scan_stops_at_first_audible_session() {
        let sessions = vec![
            StubSession::playing(0.0),
            StubSession::playing(0.005),
            StubSession::playing(0.4),
            StubSession::playing(0.8),
            StubSession::playing(0.0),
        ];
        let counters: Vec<_> = sessions.iter().map(|s| Rc::clone(&s.peak_reads)).collect();

        assert!(probe(sessions).is_audio_playing());

        let reads: Vec<usize> = counters.iter().map(|c| c.get()).collect();
        assert_eq!(reads, vec![1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_scan_is_bounded() {
        let mut sessions: Vec<_> = (0..MAX_SESSIONS_SCANNED)
            .map(|_| StubSession::playing(0.0))
            .collect();
        let beyond_limit = StubSession::playing(0.9);
        let reads = Rc::clone(&beyond_limit.peak_reads);
        sessions.push(beyond_limit);

        assert!(!probe(sessions).is_audio_playing());
        assert_eq!(reads.get(), 0);
    }
}
