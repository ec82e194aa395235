//! Headless host
//!
//! A display-less implementation of [`ViewSurface`] and [`EventLoop`],
//! used by the CLI and by tests. The loop keeps its own clock: by default
//! time is virtual and frames are delivered back to back; in paced mode the
//! loop sleeps until each deadline like a real host would.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use foldline_animation::{FramePacer, FrameRequest};
use tracing::{debug, trace};

use crate::error::{PlatformError, Result};
use crate::event::{ControlFlow, Event, EventLoop, LifecycleEvent};
use crate::input::InputEvent;
use crate::surface::ViewSurface;

/// Fixed-size surface that records redraw requests on a virtual clock
#[derive(Debug)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    now: Cell<Duration>,
    pacer: RefCell<FramePacer>,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            now: Cell::new(Duration::ZERO),
            pacer: RefCell::new(FramePacer::new()),
        }
    }

    /// Current time on the surface clock
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn set_now(&self, now: Duration) {
        self.now.set(now);
    }

    /// When the pending frame is due, if one is pending
    pub fn next_frame_at(&self) -> Option<Duration> {
        self.pacer.borrow().next_deadline()
    }

    /// Consume the pending frame if it is due at the current time
    pub fn take_due_frame(&self) -> bool {
        self.pacer.borrow_mut().take_due(self.now.get())
    }

    /// Number of redraw requests received so far
    pub fn redraw_requests(&self) -> u64 {
        self.pacer.borrow().request_count()
    }

    fn schedule(&self, request: FrameRequest) {
        trace!(?request, now = ?self.now.get(), "redraw requested");
        self.pacer.borrow_mut().schedule(self.now.get(), request);
    }
}

impl ViewSurface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn request_redraw(&self) {
        self.schedule(FrameRequest::Now);
    }

    fn request_redraw_after(&self, delay: Duration) {
        self.schedule(FrameRequest::After(delay));
    }
}

/// An input event to deliver at a given time
#[derive(Clone, Debug)]
pub struct ScriptedInput {
    pub at: Duration,
    pub event: InputEvent,
}

/// Summary of a finished headless run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub inputs: u64,
    /// Clock value when the loop stopped
    pub elapsed: Duration,
}

/// Event loop replaying scripted input against a [`HeadlessSurface`]
#[derive(Debug)]
pub struct HeadlessEventLoop {
    surface: HeadlessSurface,
    script: VecDeque<ScriptedInput>,
    paced: bool,
    max_frames: Option<u64>,
}

impl HeadlessEventLoop {
    pub fn new(surface: HeadlessSurface) -> Self {
        Self {
            surface,
            script: VecDeque::new(),
            paced: false,
            max_frames: None,
        }
    }

    /// Queue an input event. Events are delivered in time order; events
    /// with equal times keep their insertion order.
    pub fn with_input(mut self, at: Duration, event: InputEvent) -> Self {
        let pos = self.script.partition_point(|s| s.at <= at);
        self.script.insert(pos, ScriptedInput { at, event });
        self
    }

    /// Sleep in real time between events instead of jumping the clock
    pub fn paced(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }

    /// Fail with [`PlatformError::FrameLimit`] once more than `max` frames
    /// would be painted
    pub fn max_frames(mut self, max: u64) -> Self {
        self.max_frames = Some(max);
        self
    }

    pub fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    /// Run until the script is exhausted and no frame is pending, or the
    /// handler exits.
    ///
    /// The view is attached at time zero: the handler first sees
    /// `Lifecycle(Resumed)` followed by an initial `Frame`. When a frame
    /// and an input fall due at the same instant, the frame goes first.
    pub fn run_until_idle<F>(&mut self, mut handler: F) -> Result<RunStats>
    where
        F: FnMut(Event, &HeadlessSurface) -> ControlFlow,
    {
        let mut stats = RunStats::default();

        if handler(Event::Lifecycle(LifecycleEvent::Resumed), &self.surface) == ControlFlow::Exit
        {
            return Ok(stats);
        }
        self.surface.request_redraw();

        loop {
            let next_input = self.script.front().map(|s| s.at);
            let next_frame = self.surface.next_frame_at();

            let (at, is_frame) = match (next_frame, next_input) {
                (None, None) => break,
                (Some(frame), Some(input)) if frame <= input => (frame, true),
                (_, Some(input)) => (input, false),
                (Some(frame), None) => (frame, true),
            };

            self.advance_to(at);

            let event = if is_frame {
                self.surface.take_due_frame();
                stats.frames += 1;
                if let Some(max) = self.max_frames {
                    if stats.frames > max {
                        return Err(PlatformError::FrameLimit(max));
                    }
                }
                Event::Frame
            } else {
                let Some(scripted) = self.script.pop_front() else {
                    return Err(PlatformError::EventLoop(
                        "input script drained unexpectedly".to_string(),
                    ));
                };
                stats.inputs += 1;
                Event::Input(scripted.event)
            };

            if handler(event, &self.surface) == ControlFlow::Exit {
                debug!("headless loop: handler requested exit");
                break;
            }
        }

        stats.elapsed = self.surface.now();
        debug!(
            frames = stats.frames,
            inputs = stats.inputs,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "headless loop idle"
        );
        Ok(stats)
    }

    fn advance_to(&self, at: Duration) {
        let now = self.surface.now();
        if at <= now {
            return;
        }
        if self.paced {
            std::thread::sleep(at - now);
        }
        self.surface.set_now(at);
    }
}

impl EventLoop for HeadlessEventLoop {
    type Surface = HeadlessSurface;

    fn run<F>(mut self, handler: F) -> std::result::Result<(), PlatformError>
    where
        F: FnMut(Event, &Self::Surface) -> ControlFlow,
    {
        self.run_until_idle(handler).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[derive(Debug, PartialEq)]
    enum Seen {
        Resumed,
        Frame(Duration),
        Tap(Duration),
    }

    fn record(event: &Event, surface: &HeadlessSurface) -> Option<Seen> {
        match event {
            Event::Lifecycle(LifecycleEvent::Resumed) => Some(Seen::Resumed),
            Event::Frame => Some(Seen::Frame(surface.now())),
            Event::Input(_) => Some(Seen::Tap(surface.now())),
            _ => None,
        }
    }

    #[test]
    fn test_initial_frame_only() {
        let mut event_loop = HeadlessEventLoop::new(HeadlessSurface::new(100, 200));
        let mut seen = Vec::new();
        let stats = event_loop
            .run_until_idle(|event, surface| {
                seen.extend(record(&event, surface));
                ControlFlow::Continue
            })
            .unwrap();

        assert_eq!(seen, vec![Seen::Resumed, Seen::Frame(ms(0))]);
        assert_eq!(stats.frames, 1);
        assert_eq!(stats.inputs, 0);
        assert_eq!(event_loop.surface().size(), (100, 200));
    }

    #[test]
    fn test_frames_and_inputs_interleave_by_time() {
        let mut event_loop = HeadlessEventLoop::new(HeadlessSurface::new(100, 100))
            .with_input(ms(120), InputEvent::tap(0.0, 0.0))
            .with_input(ms(0), InputEvent::tap(0.0, 0.0));

        let mut seen = Vec::new();
        let mut paced_left = 2;
        event_loop
            .run_until_idle(|event, surface| {
                if matches!(event, Event::Frame) && paced_left > 0 {
                    paced_left -= 1;
                    surface.request_redraw_after(ms(50));
                }
                seen.extend(record(&event, surface));
                ControlFlow::Continue
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![
                Seen::Resumed,
                Seen::Frame(ms(0)),
                Seen::Tap(ms(0)),
                Seen::Frame(ms(50)),
                Seen::Frame(ms(100)),
                Seen::Tap(ms(120)),
            ]
        );
    }

    #[test]
    fn test_redraw_requests_coalesce() {
        let mut event_loop = HeadlessEventLoop::new(HeadlessSurface::new(10, 10))
            .with_input(ms(5), InputEvent::tap(0.0, 0.0));
        let stats = event_loop
            .run_until_idle(|event, surface| {
                if let Event::Input(_) = event {
                    surface.request_redraw();
                    surface.request_redraw();
                    surface.request_redraw_after(ms(50));
                }
                ControlFlow::Continue
            })
            .unwrap();

        // initial frame plus one coalesced frame for the tap
        assert_eq!(stats.frames, 2);
        assert_eq!(event_loop.surface().redraw_requests(), 4);
    }

    #[test]
    fn test_frame_limit() {
        let mut event_loop = HeadlessEventLoop::new(HeadlessSurface::new(10, 10)).max_frames(3);
        let result = event_loop.run_until_idle(|event, surface| {
            if let Event::Frame = event {
                surface.request_redraw_after(ms(16));
            }
            ControlFlow::Continue
        });
        assert!(matches!(result, Err(PlatformError::FrameLimit(3))));
    }

    #[test]
    fn test_exit_stops_loop() {
        let event_loop = HeadlessEventLoop::new(HeadlessSurface::new(10, 10))
            .with_input(ms(10), InputEvent::tap(0.0, 0.0));
        let mut count = 0;
        event_loop
            .run(|_, _| {
                count += 1;
                ControlFlow::Exit
            })
            .unwrap();
        assert_eq!(count, 1);
    }
}
