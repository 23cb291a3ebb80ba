//! WASAPI audio session enumeration and peak metering.
//!
//! Sessions are read from the default render endpoint's session manager.
//! Each session is metered through its `IAudioMeterInformation` interface,
//! which reports peaks on the normalized `[0.0, 1.0]` scale.

use super::com::ComGuard;
use super::process::is_process_running;
use crate::error::AudioFault;
use crate::probe::{AudioMixer, AudioSession};
use std::rc::Rc;
use windows::core::Interface;
use windows::Win32::Media::Audio::Endpoints::IAudioMeterInformation;
use windows::Win32::Media::Audio::{
    eConsole, eRender, IAudioSessionControl, IAudioSessionControl2, IAudioSessionEnumerator,
    IAudioSessionManager2, IMMDeviceEnumerator, MMDeviceEnumerator,
};
use windows::Win32::System::Com::{CoCreateInstance, CLSCTX_ALL};

/// One WASAPI audio session.
///
/// Holds the COM apartment open for as long as the session is alive.
pub struct WinAudioSession {
    control: IAudioSessionControl,
    _com: Rc<ComGuard>,
}

impl AudioSession for WinAudioSession {
    fn has_live_process(&self) -> Result<bool, AudioFault> {
        let control: IAudioSessionControl2 = self
            .control
            .cast()
            .map_err(|e| AudioFault::Process(e.message()))?;
        let pid = unsafe { control.GetProcessId() }.map_err(|e| AudioFault::Process(e.message()))?;
        Ok(is_process_running(pid))
    }

    fn peak_level(&self) -> Result<f32, AudioFault> {
        let meter: IAudioMeterInformation = self
            .control
            .cast()
            .map_err(|e| AudioFault::PeakLevel(e.message()))?;
        unsafe { meter.GetPeakValue() }.map_err(|e| AudioFault::PeakLevel(e.message()))
    }
}

/// [`AudioMixer`] over the default render endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinAudioMixer;

impl WinAudioMixer {
    fn session_enumerator() -> windows::core::Result<IAudioSessionEnumerator> {
        unsafe {
            let devices: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)?;
            let device = devices.GetDefaultAudioEndpoint(eRender, eConsole)?;
            let manager: IAudioSessionManager2 = device.Activate(CLSCTX_ALL, None)?;
            manager.GetSessionEnumerator()
        }
    }
}

impl AudioMixer for WinAudioMixer {
    type Session = WinAudioSession;

    fn sessions(&self) -> Result<Vec<WinAudioSession>, AudioFault> {
        let com = Rc::new(ComGuard::init());

        let enumerator =
            Self::session_enumerator().map_err(|e| AudioFault::Enumeration(e.message()))?;
        let count =
            unsafe { enumerator.GetCount() }.map_err(|e| AudioFault::Enumeration(e.message()))?;

        let sessions = (0..count)
            .filter_map(|index| match unsafe { enumerator.GetSession(index) } {
                Ok(control) => Some(WinAudioSession {
                    control,
                    _com: Rc::clone(&com),
                }),
                Err(e) => {
                    // Session went away between GetCount and GetSession.
                    tracing::trace!(index, error = %e, "Skipping unreadable audio session");
                    None
                }
            })
            .collect();

        Ok(sessions)
    }
}
