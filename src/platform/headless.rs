//! Native headless collaborators: a tick budget in place of a quit button and
//! a log in place of a window.

use super::{FrameSink, StopSource};
use crate::sim::FrameSnapshot;

/// Requests a stop after a fixed number of polls
#[derive(Debug, Clone)]
pub struct TickBudget {
    remaining: u64,
}

impl TickBudget {
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl StopSource for TickBudget {
    fn stop_requested(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// Logs every `every`-th frame as JSON at debug level
#[derive(Debug)]
pub struct LogSink {
    every: u64,
    presented: u64,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            presented: 0,
        }
    }

    /// Number of frames received
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &FrameSnapshot) {
        if self.presented % self.every == 0 {
            match serde_json::to_string(frame) {
                Ok(json) => log::debug!("frame {}", json),
                Err(e) => log::warn!("Failed to encode frame {}: {}", frame.tick, e),
            }
        }
        self.presented += 1;
    }
}
