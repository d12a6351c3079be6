use serde::Serialize;

use super::point::Point;
use super::range::Range;

/// Axis-aligned box. Always derived on demand from an actor, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub x2: f32,
    pub y1: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, x2: f32, y1: f32, y2: f32) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Box covering `width` x `height` starting at top-left `origin`.
    pub fn from_origin(origin: Point, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.x + width, origin.y, origin.y + height)
    }

    pub fn x_range(&self) -> Range {
        Range::new(self.x1, self.x2)
    }

    pub fn y_range(&self) -> Range {
        Range::new(self.y1, self.y2)
    }

    /// Separating-axis test on the two box axes.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x_range().overlaps(&other.x_range()) && self.y_range().overlaps(&other.y_range())
    }

    /// Inclusive point test (click hit testing).
    pub fn contains(&self, p: Point) -> bool {
        let (xs, ys) = (self.x_range(), self.y_range());
        p.x >= xs.a && p.x <= xs.b && p.y >= ys.a && p.y <= ys.b
    }
}
