//! Platform abstraction layer
//!
//! The driver loop talks to the outside world through three seams:
//! - [`FrameClock`]: elapsed time per tick (and frame-rate capping)
//! - [`StopSource`]: whether the user asked to quit
//! - [`FrameSink`]: where finished frames go
//!
//! Browser implementations live in the wasm entry point; the native
//! headless ones are in [`headless`].

pub mod headless;
pub mod pacing;

pub use headless::{LogSink, TickBudget};
#[cfg(not(target_arch = "wasm32"))]
pub use pacing::SleepClock;
pub use pacing::{TimestampClock, normalized_dt};

use crate::sim::FrameSnapshot;

/// Source of per-tick elapsed time
pub trait FrameClock {
    /// Time since the previous call, in reference frames (1.0 = one frame at 60 Hz)
    fn next_dt(&mut self) -> f32;
}

/// Polled once per tick for a quit request
pub trait StopSource {
    fn stop_requested(&mut self) -> bool;
}

/// Consumer of finished frames (renderer, logger, recorder)
pub trait FrameSink {
    fn present(&mut self, frame: &FrameSnapshot);
}

impl<F: FnMut() -> bool> StopSource for F {
    fn stop_requested(&mut self) -> bool {
        (self)()
    }
}
