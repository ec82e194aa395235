//! Paint context - Canvas-like drawing API implementing DrawContext
//!
//! PaintContext wraps a RecordingContext and adds the save/restore model of
//! a retained canvas: transforms applied after `save()` are discarded by the
//! matching `restore()`.

use foldline_core::{
    Color, DrawCommand, DrawContext, Path, Point, RecordingContext, Size, Stroke, Transform,
};
use smallvec::SmallVec;

/// The paint context used for custom 2D drawing
pub struct PaintContext {
    recording: RecordingContext,
    /// Transform depth at each outstanding `save()`
    saves: SmallVec<[usize; 8]>,
}

impl PaintContext {
    /// Create a new paint context with the given viewport size
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_size(Size::new(width, height))
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            recording: RecordingContext::new(size),
            saves: SmallVec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.recording.viewport_size().width
    }

    pub fn height(&self) -> f32 {
        self.recording.viewport_size().height
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        self.recording.commands()
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.recording.take_commands()
    }

    /// World-space endpoints of every line drawn so far
    pub fn stroked_lines(&self) -> Vec<(Point, Point)> {
        self.recording.stroked_lines()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Canvas-like convenience API
    // ═══════════════════════════════════════════════════════════════════════════

    /// Save the current matrix
    pub fn save(&mut self) {
        self.saves.push(self.recording.transform_depth());
    }

    /// Restore the matrix to the matching `save()`
    pub fn restore(&mut self) {
        let Some(depth) = self.saves.pop() else {
            tracing::warn!("PaintContext: restore without matching save ignored");
            return;
        };
        while self.recording.transform_depth() > depth {
            self.recording.pop_transform();
        }
    }

    /// Translate the current matrix
    pub fn translate(&mut self, x: f32, y: f32) {
        self.push_transform(Transform::translate(x, y));
    }

    /// Rotate the current matrix (angle in degrees, clockwise on screen)
    pub fn rotate(&mut self, degrees: f32) {
        self.push_transform(Transform::rotate_degrees(degrees));
    }

    /// Fill the whole canvas with a color
    pub fn draw_color(&mut self, color: Color) {
        self.clear(color);
    }

    /// Draw a line from (x0, y0) to (x1, y1) in the current matrix
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: &Stroke, color: Color) {
        self.stroke_line(Point::new(x0, y0), Point::new(x1, y1), stroke, color);
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DrawContext Implementation - delegates to RecordingContext
// ═══════════════════════════════════════════════════════════════════════════════

impl DrawContext for PaintContext {
    fn push_transform(&mut self, transform: Transform) {
        self.recording.push_transform(transform);
    }

    fn pop_transform(&mut self) {
        self.recording.pop_transform();
    }

    fn current_transform(&self) -> Transform {
        self.recording.current_transform()
    }

    fn clear(&mut self, color: Color) {
        self.recording.clear(color);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        self.recording.stroke_path(path, stroke, color);
    }

    fn viewport_size(&self) -> Size {
        self.recording.viewport_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_context_creation() {
        let ctx = PaintContext::new(800.0, 600.0);
        assert_eq!(ctx.viewport_size(), Size::new(800.0, 600.0));
        assert_eq!(ctx.width(), 800.0);
        assert_eq!(ctx.height(), 600.0);
    }

    #[test]
    fn test_save_restore_unwinds_transforms() {
        let mut ctx = PaintContext::new(800.0, 600.0);
        ctx.save();
        ctx.translate(10.0, 20.0);
        ctx.rotate(45.0);
        ctx.restore();

        assert_eq!(ctx.current_transform(), Transform::identity());
        // two pushes, two pops
        assert_eq!(ctx.commands().len(), 4);
    }

    #[test]
    fn test_nested_save_restore() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        ctx.save();
        ctx.translate(10.0, 0.0);
        ctx.save();
        ctx.translate(0.0, 5.0);
        ctx.restore();
        ctx.draw_line(0.0, 0.0, 1.0, 0.0, &Stroke::new(1.0), Color::BLACK);
        ctx.restore();

        let lines = ctx.stroked_lines();
        assert_eq!(lines, vec![(Point::new(10.0, 0.0), Point::new(11.0, 0.0))]);
    }

    #[test]
    fn test_restore_without_save_is_ignored() {
        let mut ctx = PaintContext::new(100.0, 100.0);
        ctx.translate(1.0, 1.0);
        ctx.restore();
        assert_eq!(ctx.current_transform(), Transform::translate(1.0, 1.0));
    }

    #[test]
    fn test_implements_draw_context() {
        fn use_draw_context(ctx: &mut dyn DrawContext) {
            ctx.clear(Color::WHITE);
        }

        let mut ctx = PaintContext::new(800.0, 600.0);
        use_draw_context(&mut ctx);
        assert_eq!(ctx.commands(), &[DrawCommand::Clear(Color::WHITE)]);
    }
}
