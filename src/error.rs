//! Error types for the platform probes.

use thiserror::Error;

/// Failure of the input-idle query.
///
/// Returned by [`IdleProbe`](crate::probe::IdleProbe) and propagated by the
/// evaluator whenever the idle path is taken. Never replaced by a made-up
/// idle value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformQueryError {
    /// A platform call reported failure.
    #[error("platform call {call} failed")]
    QueryFailed { call: &'static str },

    /// The capability has no implementation on this build target.
    #[error("{capability} is not supported on this platform")]
    Unsupported { capability: &'static str },
}

/// Soft fault while reading audio sessions.
///
/// These never leave [`AudioProbe`](crate::probe::AudioProbe): a faulting
/// session simply contributes no audio signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioFault {
    #[error("failed to enumerate audio sessions: {0}")]
    Enumeration(String),

    #[error("failed to resolve session process: {0}")]
    Process(String),

    #[error("failed to read peak level: {0}")]
    PeakLevel(String),

    #[error("audio session metering is not supported on this platform")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_query_error_display() {
        let err = PlatformQueryError::QueryFailed {
            call: "GetLastInputInfo",
        };
        assert_eq!(err.to_string(), "platform call GetLastInputInfo failed");

        let err = PlatformQueryError::Unsupported {
            capability: "input idle time",
        };
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn test_audio_fault_display() {
        let fault = AudioFault::PeakLevel("0x88890004".to_string());
        assert_eq!(fault.to_string(), "failed to read peak level: 0x88890004");
    }
}
