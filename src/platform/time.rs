//! Clocks and frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Source of "now" readings in seconds
pub trait Clock {
    fn now(&mut self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Simulated clock that advances a fixed step per reading, for headless
/// runs that must not depend on how fast the host is
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: f64,
    current: f64,
}

impl FixedStepClock {
    pub fn new(fps: u32) -> Self {
        Self {
            step: 1.0 / fps.max(1) as f64,
            current: 0.0,
        }
    }
}

impl Clock for FixedStepClock {
    fn now(&mut self) -> f64 {
        let now = self.current;
        self.current += self.step;
        now
    }
}

/// Blocks at the end of each frame until the next frame is due
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_time: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Some(Duration::from_secs_f64(1.0 / fps.max(1) as f64)),
            next_deadline: None,
        }
    }

    /// A pacer that never sleeps
    pub fn unpaced() -> Self {
        Self {
            frame_time: None,
            next_deadline: None,
        }
    }

    /// Sleep until the current frame's time slot is over.
    ///
    /// If a frame overran, the schedule restarts from now instead of trying
    /// to catch up with a burst of short frames.
    pub fn wait(&mut self) {
        let Some(frame_time) = self.frame_time else {
            return;
        };
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + frame_time);

        if deadline > now {
            thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + frame_time);
        } else {
            self.next_deadline = Some(now + frame_time);
        }
    }
}
