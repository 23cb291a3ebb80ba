//! COM apartment initialization.

use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_MULTITHREADED};

/// RAII guard for COM initialization on the current thread.
///
/// Calls `CoUninitialize` on drop only if this guard's `CoInitializeEx`
/// succeeded. When the thread already joined a different apartment
/// (`RPC_E_CHANGED_MODE`) COM is still usable and the guard is a no-op.
pub struct ComGuard {
    initialized: bool,
}

impl ComGuard {
    pub fn init() -> Self {
        let hr = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) };
        if hr.is_err() {
            tracing::trace!(hresult = ?hr, "COM already initialized with another model");
        }
        Self {
            initialized: hr.is_ok(),
        }
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.initialized {
            unsafe { CoUninitialize() };
        }
    }
}
