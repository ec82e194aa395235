//! Draw context and recorded draw commands
//!
//! [`DrawContext`] is the drawing surface a view paints into each frame.
//! [`RecordingContext`] implements it by capturing [`DrawCommand`]s, which
//! a host can replay on its own graphics API or inspect in tests.

use smallvec::SmallVec;

use crate::color::Color;
use crate::geometry::{Point, Size, Transform};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
}

/// Stroke style configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
}

/// A vector path made of straight segments
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Create a single line segment path
    pub fn line(from: Point, to: Point) -> Self {
        Self::new().move_to(from.x, from.y).line_to(to.x, to.y)
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Endpoints of a single-segment path, if that is what this path is
    pub fn as_line(&self) -> Option<(Point, Point)> {
        match self.commands.as_slice() {
            [PathCommand::MoveTo(from), PathCommand::LineTo(to)] => Some((*from, *to)),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// The drawing interface a view paints into
pub trait DrawContext {
    /// Push a transform, composed with the current one
    fn push_transform(&mut self, transform: Transform);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current combined transform
    fn current_transform(&self) -> Transform;

    /// Fill the whole viewport with a color
    fn clear(&mut self, color: Color);

    /// Stroke a path in the current transform
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color);

    /// Viewport size
    fn viewport_size(&self) -> Size;

    /// Stroke a single line segment
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke, color: Color) {
        self.stroke_path(&Path::line(from, to), stroke, color);
    }
}

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushTransform(Transform),
    PopTransform,
    Clear(Color),
    StrokePath {
        path: Path,
        stroke: Stroke,
        color: Color,
        /// Combined transform in effect when the path was stroked
        transform: Transform,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: SmallVec<[Transform; 8]>,
    viewport: Size,
}

impl RecordingContext {
    pub fn new(viewport: Size) -> Self {
        let mut transform_stack = SmallVec::new();
        transform_stack.push(Transform::identity());
        Self {
            commands: Vec::new(),
            transform_stack,
            viewport,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of transforms pushed and not yet popped
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len() - 1
    }

    /// World-space endpoints of every stroked single-segment path, in
    /// recording order
    pub fn stroked_lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::StrokePath {
                    path, transform, ..
                } => path
                    .as_line()
                    .map(|(a, b)| (transform.transform_point(a), transform.transform_point(b))),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        if self.transform_stack.len() > 1 {
            self.commands.push(DrawCommand::PopTransform);
            self.transform_stack.pop();
        } else {
            tracing::warn!("RecordingContext: pop_transform with empty stack ignored");
        }
    }

    fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: *stroke,
            color,
            transform: self.current_transform(),
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_tracks_combined_transform() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.push_transform(Transform::translate(10.0, 20.0));
        ctx.push_transform(Transform::translate(5.0, 5.0));
        ctx.stroke_line(
            Point::ZERO,
            Point::new(1.0, 0.0),
            &Stroke::new(2.0),
            Color::BLACK,
        );
        ctx.pop_transform();
        ctx.pop_transform();

        let lines = ctx.stroked_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Point::new(15.0, 25.0));
        assert_eq!(lines[0].1, Point::new(16.0, 25.0));
        assert_eq!(ctx.transform_depth(), 0);
    }

    #[test]
    fn test_pop_on_empty_stack_is_ignored() {
        let mut ctx = RecordingContext::default();
        ctx.pop_transform();
        assert!(ctx.commands().is_empty());
        assert_eq!(ctx.current_transform(), Transform::identity());
    }

    #[test]
    fn test_take_commands_leaves_context_empty() {
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        ctx.clear(Color::WHITE);
        let taken = ctx.take_commands();
        assert_eq!(taken, vec![DrawCommand::Clear(Color::WHITE)]);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_path_as_line() {
        let line = Path::line(Point::ZERO, Point::new(3.0, 4.0));
        assert_eq!(line.as_line(), Some((Point::ZERO, Point::new(3.0, 4.0))));
        assert_eq!(Path::new().move_to(0.0, 0.0).as_line(), None);
        let polyline = line.clone().line_to(6.0, 0.0);
        assert_eq!(polyline.as_line(), None);
    }
}
