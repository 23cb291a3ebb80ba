//! Leaf probes for the two activity signals.
//!
//! Each probe talks to the platform through a narrow trait so that the
//! fusion logic can be exercised with stub implementations.

pub mod audio;
pub mod idle;

pub use audio::*;
pub use idle::*;
