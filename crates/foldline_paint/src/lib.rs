//! foldline Paint/Canvas API
//!
//! A canvas-style drawing API in the manner of Android's `Canvas`:
//! `save`/`restore` bracketing, `translate`/`rotate` on the current matrix,
//! `draw_line` and `draw_color`. Frames are recorded as
//! [`foldline_core::DrawCommand`]s for the host to replay.
//!
//! The [`fold`] module holds the fold-node draw primitive: two line
//! segments hinged at an anchor that fold up as the node's scale grows.
//!
//! # Example
//!
//! ```rust
//! use foldline_paint::{draw_fold_node, FoldStyle, PaintContext};
//!
//! let mut ctx = PaintContext::new(600.0, 800.0);
//! let style = FoldStyle::default();
//! ctx.draw_color(style.background_color);
//! draw_fold_node(&mut ctx, 0, 0.5, 5, &style);
//!
//! let commands = ctx.take_commands();
//! assert!(!commands.is_empty());
//! ```

pub mod context;
pub mod fold;

pub use foldline_core::{
    Color, DrawCommand, DrawContext, LineCap, Path, Point, Size, Stroke, Transform,
};

pub use context::PaintContext;
pub use fold::{draw_fold_node, FoldGeometry, FoldStyle};
