//! Animation driver
//!
//! Keeps track of whether a leg is in flight and tells the host when the
//! next frame should be painted. The driver never sleeps or touches the
//! host itself; it hands back a [`FrameRequest`] and the host's scheduling
//! layer (event loop, timer, [`crate::FramePacer`]) decides what to do.

use std::time::Duration;

/// Pause between two animation frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// What the host should do after a driver call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// No repaint needed
    None,
    /// Repaint as soon as possible
    Now,
    /// Repaint once this much time has passed
    After(Duration),
}

impl FrameRequest {
    pub fn is_none(&self) -> bool {
        matches!(self, FrameRequest::None)
    }
}

/// Outcome of one animation step, reported back to the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    /// The running leg finished; the driver stops
    Settled,
}

/// Start/stop flag plus frame pacing for a single view
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    running: bool,
    interval: Duration,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::with_interval(FRAME_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            running: false,
            interval,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start animating. Returns the one-shot kick the host should honour;
    /// starting an already running driver asks for nothing.
    pub fn start(&mut self) -> FrameRequest {
        if self.running {
            return FrameRequest::None;
        }
        self.running = true;
        tracing::debug!("AnimationDriver: started");
        FrameRequest::Now
    }

    /// Run one animation step if the driver is running.
    ///
    /// A paced repaint is requested whenever a step ran, including the step
    /// that settles the leg, so the settled frame gets painted. The repaint
    /// after that finds the driver stopped and requests nothing further.
    pub fn animate<F>(&mut self, step: F) -> FrameRequest
    where
        F: FnOnce() -> Tick,
    {
        if !self.running {
            return FrameRequest::None;
        }
        if step() == Tick::Settled {
            self.stop();
        }
        FrameRequest::After(self.interval)
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            tracing::debug!("AnimationDriver: stopped");
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
