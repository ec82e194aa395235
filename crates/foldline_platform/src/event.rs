//! Event loop and platform events

use crate::error::PlatformError;
use crate::input::InputEvent;
use crate::surface::ViewSurface;

/// Event loop abstraction
///
/// Platform-specific event loops implement this trait to drive a view.
pub trait EventLoop {
    /// The surface type handed to the handler
    type Surface: ViewSurface;

    /// Run the event loop
    ///
    /// Blocks until the loop runs out of work or the handler returns
    /// `ControlFlow::Exit`.
    fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(Event, &Self::Surface) -> ControlFlow;
}

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Platform events
#[derive(Clone, Debug)]
pub enum Event {
    /// Window-related event
    Window(WindowEvent),
    /// Input event (mouse, touch)
    Input(InputEvent),
    /// Application lifecycle event
    Lifecycle(LifecycleEvent),
    /// Time to paint a frame
    ///
    /// Sent in response to a redraw request on the surface.
    Frame,
}

/// Window events
#[derive(Clone, Debug)]
pub enum WindowEvent {
    /// Surface was resized
    Resized {
        /// New width in physical pixels
        width: u32,
        /// New height in physical pixels
        height: u32,
    },
    /// Close was requested
    CloseRequested,
}

/// Application lifecycle events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Application resumed (came to foreground)
    Resumed,
    /// Application suspended (went to background)
    Suspended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_default() {
        assert_eq!(ControlFlow::default(), ControlFlow::Continue);
    }
}
