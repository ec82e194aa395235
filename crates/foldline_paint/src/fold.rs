//! Fold-node draw primitive
//!
//! Each node is a hinge: two segments of length `gap / 2` leaving an anchor
//! point in opposite directions. During the first half of a leg the
//! segments rotate from flat to vertical; during the second half the anchor
//! climbs from the bottom band of the canvas towards the top.

use foldline_core::{Color, LineCap, Point, Size, Stroke, Transform};

use crate::context::PaintContext;

/// Colors used to paint the view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldStyle {
    pub line_color: Color,
    pub background_color: Color,
}

impl FoldStyle {
    pub const DEFAULT_LINE_COLOR: u32 = 0x0D47A1;
    pub const DEFAULT_BACKGROUND_COLOR: u32 = 0xBDBDBD;

    pub fn new(line_color: Color, background_color: Color) -> Self {
        Self {
            line_color,
            background_color,
        }
    }
}

impl Default for FoldStyle {
    fn default() -> Self {
        Self::new(
            Color::from_hex(Self::DEFAULT_LINE_COLOR),
            Color::from_hex(Self::DEFAULT_BACKGROUND_COLOR),
        )
    }
}

/// Resolved geometry of one node at one scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldGeometry {
    pub stroke_width: f32,
    /// Horizontal spacing between anchors
    pub gap: f32,
    /// Rotation progress, 0 (flat) to 1 (vertical)
    pub fold: f32,
    /// Lift progress, 0 (bottom band) to 1 (top)
    pub lift: f32,
    pub anchor: Point,
    /// Rotation of each segment in degrees
    pub angles: [f32; 2],
    /// Segment end points relative to the anchor, before rotation
    pub ends: [Point; 2],
}

impl FoldGeometry {
    pub fn compute(size: Size, node_count: usize, index: usize, scale: f32) -> Self {
        let w = size.width;
        let h = size.height;
        let gap = w / (node_count as f32 + 1.0);
        let fold = scale.min(0.5) * 2.0;
        let lift = (scale - 0.5).max(0.0).min(0.5) * 2.0;

        let anchor = Point::new(
            gap / 3.0 + gap * index as f32 + gap / 2.0,
            0.9 * h - lift * (0.9 * h - gap / 2.0),
        );

        let mut angles = [0.0; 2];
        let mut ends = [Point::ZERO; 2];
        for j in 0..2 {
            let side = 1.0 - 2.0 * j as f32;
            angles[j] = 90.0 * -fold * side;
            ends[j] = Point::new(gap / 2.0 * side, 0.0);
        }

        Self {
            stroke_width: size.min_side() / 60.0,
            gap,
            fold,
            lift,
            anchor,
            angles,
            ends,
        }
    }

    /// Segment endpoints in canvas coordinates
    pub fn segments(&self) -> [(Point, Point); 2] {
        let base = Transform::translate(self.anchor.x, self.anchor.y);
        [0, 1].map(|j| {
            let t = base.then(&Transform::rotate_degrees(self.angles[j]));
            (
                t.transform_point(Point::ZERO),
                t.transform_point(self.ends[j]),
            )
        })
    }

    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width).with_cap(LineCap::Round)
    }
}

/// Paint node `index` of a `node_count` row at `scale`
pub fn draw_fold_node(
    ctx: &mut PaintContext,
    index: usize,
    scale: f32,
    node_count: usize,
    style: &FoldStyle,
) {
    let size = Size::new(ctx.width(), ctx.height());
    let geometry = FoldGeometry::compute(size, node_count, index, scale);
    let stroke = geometry.stroke();

    ctx.save();
    ctx.translate(geometry.anchor.x, geometry.anchor.y);
    for j in 0..2 {
        ctx.save();
        ctx.rotate(geometry.angles[j]);
        let end = geometry.ends[j];
        ctx.draw_line(0.0, 0.0, end.x, end.y, &stroke, style.line_color);
        ctx.restore();
    }
    ctx.restore();
}
