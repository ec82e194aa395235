//! foldline View
//!
//! A decorative view: a horizontal row of hinge nodes. Each tap folds one
//! node up (or back down) over ten paced frames, then the next node in the
//! current direction becomes active. At either end of the row the
//! direction reverses, so successive taps sweep back and forth.
//!
//! # Layers
//!
//! - [`node`] - node records in a position-indexed arena, neighbor lookup
//! - [`chain`] - the active node and traversal direction
//! - [`renderer`] - paints the chain and drives one leg per tap
//! - [`view`] - glue between the renderer and a platform surface
//! - [`config`] - node count and colors, loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use foldline_platform::headless::{HeadlessEventLoop, HeadlessSurface};
//! use foldline_platform::InputEvent;
//! use foldline_view::{FoldingView, ViewConfig};
//! use std::time::Duration;
//!
//! let mut view = FoldingView::new(&ViewConfig::default()).unwrap();
//! let mut event_loop = HeadlessEventLoop::new(HeadlessSurface::new(1080, 1920))
//!     .with_input(Duration::ZERO, InputEvent::tap(540.0, 960.0));
//!
//! event_loop
//!     .run_until_idle(|event, surface| view.handle_event(&event, surface))
//!     .unwrap();
//!
//! assert_eq!(view.chain().current(), 1);
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod node;
pub mod renderer;
pub mod view;

pub use chain::{Chain, ChainSnapshot, ChainStep};
pub use config::{ViewConfig, DEFAULT_NODE_COUNT};
pub use error::{Result, ViewError};
pub use node::{build_nodes, Direction, Neighbor, Node, NodeStep};
pub use renderer::Renderer;
pub use view::FoldingView;
