//! foldline Platform Abstraction Layer
//!
//! Platform-agnostic traits and types for hosting a foldline view.
//!
//! # Architecture
//!
//! - [`ViewSurface`] - what a view needs from its host: a size and redraw
//!   requests
//! - [`EventLoop`] - delivers [`Event`]s (frames, input, lifecycle) to a
//!   handler until it asks to exit
//!
//! [`headless`] implements both without a display: a fixed-size surface and
//! an event loop that replays a script of input events on a virtual clock.
//!
//! # Example
//!
//! ```rust
//! use foldline_platform::headless::{HeadlessEventLoop, HeadlessSurface};
//! use foldline_platform::{ControlFlow, Event, EventLoop, InputEvent, ViewSurface};
//! use std::time::Duration;
//!
//! let event_loop = HeadlessEventLoop::new(HeadlessSurface::new(1080, 1920))
//!     .with_input(Duration::ZERO, InputEvent::tap(540.0, 960.0));
//!
//! let mut frames = 0;
//! event_loop
//!     .run(|event, surface| {
//!         match event {
//!             Event::Frame => frames += 1,
//!             Event::Input(input) if input.is_pointer_down() => surface.request_redraw(),
//!             _ => {}
//!         }
//!         ControlFlow::Continue
//!     })
//!     .unwrap();
//!
//! // the initial frame, then the one the tap asked for
//! assert_eq!(frames, 2);
//! ```

mod error;
mod event;
pub mod headless;
mod input;
mod surface;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{ControlFlow, Event, EventLoop, LifecycleEvent, WindowEvent};
pub use input::{InputEvent, MouseButton, MouseEvent, TouchEvent};
pub use surface::ViewSurface;
