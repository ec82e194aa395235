//! Geometry primitives and 2D transforms

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The shorter of the two sides
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Rotation by `angle` radians, clockwise on a y-down canvas
    pub fn rotation(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            elements: [c, s, -s, c, 0.0, 0.0],
        }
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let [a, b, c, d, tx, ty] = self.elements;
        Point::new(
            a * point.x + c * point.y + tx,
            b * point.x + d * point.y + ty,
        )
    }

    /// Concatenate this transform with another (self * other)
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &Affine2D) -> Affine2D {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;

        Affine2D {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }
}

/// A canvas transform
///
/// Canvas hosts only ever translate and rotate, so a transform is always
/// a 2D affine matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform(pub Affine2D);

impl Transform {
    /// Create a 2D translation
    pub fn translate(x: f32, y: f32) -> Self {
        Transform(Affine2D::translation(x, y))
    }

    /// Create a 2D rotation around the origin, in radians
    pub fn rotate(angle: f32) -> Self {
        Transform(Affine2D::rotation(angle))
    }

    /// Create a 2D rotation around the origin, in degrees
    pub fn rotate_degrees(degrees: f32) -> Self {
        Self::rotate(degrees.to_radians())
    }

    /// Create identity transform
    pub fn identity() -> Self {
        Transform(Affine2D::IDENTITY)
    }

    /// Apply `other` first, then `self`
    pub fn then(&self, other: &Transform) -> Transform {
        Transform(self.0.then(&other.0))
    }

    pub fn transform_point(&self, point: Point) -> Point {
        self.0.transform_point(point)
    }
}

impl From<Affine2D> for Transform {
    fn from(t: Affine2D) -> Self {
        Transform(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!(a.distance(b) < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_translation_moves_point() {
        let t = Transform::translate(10.0, -5.0);
        assert_close(t.transform_point(Point::new(1.0, 1.0)), Point::new(11.0, -4.0));
    }

    #[test]
    fn test_rotation_quarter_turn() {
        // +90 degrees maps +x onto +y (downwards on a canvas)
        let t = Transform::rotate_degrees(90.0);
        assert_close(t.transform_point(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));

        let t = Transform::rotate_degrees(-90.0);
        assert_close(t.transform_point(Point::new(1.0, 0.0)), Point::new(0.0, -1.0));
    }

    #[test]
    fn test_then_applies_inner_first() {
        // translate(10, 0) * rotate(90): rotate first, then translate
        let t = Transform::translate(10.0, 0.0).then(&Transform::rotate_degrees(90.0));
        assert_close(t.transform_point(Point::new(2.0, 0.0)), Point::new(10.0, 2.0));
    }

    #[test]
    fn test_min_side() {
        assert_eq!(Size::new(600.0, 900.0).min_side(), 600.0);
        assert_eq!(Size::new(1200.0, 300.0).min_side(), 300.0);
    }
}
