//! Host-side frame pacing
//!
//! Redraw requests are coalesced the way a view system coalesces
//! invalidations: several requests before the next frame produce a single
//! frame at the earliest requested time. Time is whatever monotonic clock
//! the host uses, expressed as a [`Duration`] since its own epoch.

use std::time::Duration;

use crate::driver::FrameRequest;

#[derive(Clone, Debug, Default)]
pub struct FramePacer {
    deadline: Option<Duration>,
    requests: u64,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame request made at `now`
    pub fn schedule(&mut self, now: Duration, request: FrameRequest) {
        let at = match request {
            FrameRequest::None => return,
            FrameRequest::Now => now,
            FrameRequest::After(delay) => now + delay,
        };
        self.requests += 1;
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(at),
            None => at,
        });
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|at| at <= now)
    }

    /// Consume the pending frame if it is due
    pub fn take_due(&mut self, now: Duration) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Time left until the pending frame, zero if already due
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|at| at.saturating_sub(now))
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Total number of requests scheduled so far
    pub fn request_count(&self) -> u64 {
        self.requests
    }
}
