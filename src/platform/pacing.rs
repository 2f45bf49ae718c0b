//! Frame pacing
//!
//! Motion is expressed per reference frame, so real elapsed time is divided by
//! the reference frame length before it reaches the simulation. Long stalls
//! are capped at [`MAX_FRAME_DT`] frames.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(not(target_arch = "wasm32"))]
use super::FrameClock;
use crate::consts::{MAX_FRAME_DT, REFERENCE_FRAME_MS};

/// Convert elapsed milliseconds to reference frames, capped at [`MAX_FRAME_DT`]
#[inline]
pub fn normalized_dt(elapsed_ms: f64) -> f32 {
    ((elapsed_ms / REFERENCE_FRAME_MS as f64) as f32).clamp(0.0, MAX_FRAME_DT)
}

/// Native clock that sleeps to hold the loop at a target rate
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct SleepClock {
    frame_budget: Duration,
    last: Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SleepClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last: Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SleepClock {
    fn default() -> Self {
        Self::new(crate::consts::TARGET_FPS)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameClock for SleepClock {
    fn next_dt(&mut self) -> f32 {
        let busy = self.last.elapsed();
        if busy < self.frame_budget {
            std::thread::sleep(self.frame_budget - busy);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        normalized_dt(elapsed.as_secs_f64() * 1000.0)
    }
}

/// Clock fed by externally supplied timestamps (e.g. `requestAnimationFrame`)
///
/// The first timestamp has nothing to measure against and counts as one frame.
#[derive(Debug, Default)]
pub struct TimestampClock {
    last_ms: Option<f64>,
}

impl TimestampClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timestamp in milliseconds and return dt since the previous one
    pub fn advance_to(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => normalized_dt(now_ms - last),
            None => 1.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}
