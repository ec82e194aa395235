//! foldline Core
//!
//! Foundational types shared by every foldline crate:
//!
//! - **Geometry**: points, sizes and 2D affine transforms
//! - **Color**: RGBA colors with hex parsing for configuration files
//! - **Draw Context**: a small canvas-level drawing API and a recording
//!   implementation that captures frames as [`DrawCommand`]s
//!
//! # Example
//!
//! ```rust
//! use foldline_core::{Color, DrawContext, Point, RecordingContext, Size, Stroke, Transform};
//!
//! let mut ctx = RecordingContext::new(Size::new(600.0, 800.0));
//! ctx.clear(Color::from_hex(0xBDBDBD));
//! ctx.push_transform(Transform::translate(100.0, 700.0));
//! ctx.stroke_line(Point::ZERO, Point::new(50.0, 0.0), &Stroke::new(10.0), Color::BLACK);
//! ctx.pop_transform();
//!
//! assert_eq!(ctx.commands().len(), 4);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{Color, ParseColorError};
pub use draw::{DrawCommand, DrawContext, LineCap, Path, PathCommand, RecordingContext, Stroke};
pub use geometry::{Affine2D, Point, Size, Transform};
