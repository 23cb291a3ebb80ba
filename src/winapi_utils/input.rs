//! Input idle tick counts.

use crate::error::PlatformQueryError;
use crate::probe::{InputClock, TickSnapshot};
use windows::Win32::System::SystemInformation::GetTickCount;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetLastInputInfo, LASTINPUTINFO};

/// Reads the tick count of the last input event in this session.
pub fn last_input_tick() -> Result<u32, PlatformQueryError> {
    let mut info = LASTINPUTINFO {
        cbSize: std::mem::size_of::<LASTINPUTINFO>() as u32,
        dwTime: 0,
    };

    let ok = unsafe { GetLastInputInfo(&mut info) };
    if !ok.as_bool() {
        return Err(PlatformQueryError::QueryFailed {
            call: "GetLastInputInfo",
        });
    }

    Ok(info.dwTime)
}

/// Milliseconds since boot, wrapping every ~49.7 days.
#[inline]
pub fn tick_count() -> u32 {
    unsafe { GetTickCount() }
}

/// [`InputClock`] backed by `GetLastInputInfo` and `GetTickCount`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinInputClock;

impl InputClock for WinInputClock {
    fn read_ticks(&self) -> Result<TickSnapshot, PlatformQueryError> {
        // Last input first: input arriving between the two calls must not
        // put `last_input` ahead of `now`.
        let last_input = last_input_tick()?;
        let now = tick_count();
        Ok(TickSnapshot { now, last_input })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_count_advances_monotonically() {
        let first = tick_count();
        let second = tick_count();
        assert!(second.wrapping_sub(first) < 1000);
    }
}
