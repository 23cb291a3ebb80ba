//! Process-related WinAPI wrappers.
//!
//! Used to decide whether an audio session still belongs to a running
//! process.

use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION};

/// RAII wrapper for Windows process handles.
///
/// Automatically closes the handle when dropped to prevent handle leaks.
struct ProcessHandle(HANDLE);

impl ProcessHandle {
    /// Opens a process with limited query permissions.
    ///
    /// Returns `None` if the process cannot be opened (exited, or access
    /// denied for protected system processes).
    fn open(pid: u32) -> Option<Self> {
        let handle = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) };

        match handle {
            Ok(h) if !h.is_invalid() => Some(Self(h)),
            _ => None,
        }
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Returns true if a process with the given PID is running.
///
/// PID 0 (the System Idle Process) is never considered running; audio
/// sessions report it when they are not tied to a single process.
pub fn is_process_running(pid: u32) -> bool {
    pid != 0 && ProcessHandle::open(pid).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_process_is_running() {
        assert!(is_process_running(std::process::id()));
    }

    #[test]
    fn test_pid_zero_is_not_running() {
        assert!(!is_process_running(0));
    }
}
