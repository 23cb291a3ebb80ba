//! Safe wrappers around Windows API calls.
//!
//! This module provides the Windows implementations of the probe traits:
//! input tick counts, process liveness, and WASAPI audio session metering.

pub mod audio;
pub mod com;
pub mod input;
pub mod process;

pub use audio::*;
pub use com::*;
pub use input::*;
pub use process::*;
