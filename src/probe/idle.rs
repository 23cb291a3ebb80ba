//! Input idle time probe.
//!
//! Derives seconds since the last keyboard/mouse event from two readings of
//! the platform's millisecond tick counter.

use crate::error::PlatformQueryError;

/// One reading of the platform's input clock, in milliseconds since boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSnapshot {
    /// Current tick count.
    pub now: u32,

    /// Tick count at the last registered input event.
    pub last_input: u32,
}

impl TickSnapshot {
    /// Milliseconds between the last input and `now`.
    ///
    /// Both counters are 32-bit and wrap after ~49.7 days of uptime, so the
    /// subtraction wraps too.
    pub fn elapsed_ms(&self) -> u32 {
        self.now.wrapping_sub(self.last_input)
    }
}

/// Source of tick counts for the idle probe.
pub trait InputClock {
    /// Reads the current tick count and the last-input tick count.
    fn read_ticks(&self) -> Result<TickSnapshot, PlatformQueryError>;
}

/// Reports seconds elapsed since the last user input event.
#[derive(Debug, Clone)]
pub struct IdleProbe<C> {
    clock: C,
}

impl<C: InputClock> IdleProbe<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Seconds since the last input event.
    ///
    /// A failing platform call is returned as-is; there is no retry.
    pub fn idle_seconds(&self) -> Result<f64, PlatformQueryError> {
        let ticks = self.clock.read_ticks()?;
        let seconds = f64::from(ticks.elapsed_ms()) / 1000.0;

        tracing::trace!(
            now = ticks.now,
            last_input = ticks.last_input,
            seconds,
            "Read input idle time"
        );

        Ok(seconds)
    }
}
