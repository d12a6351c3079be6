use super::point::Point;

/// Infinite line `y = m*x + b` through two points.
///
/// Vertical lines have no slope/intercept form, so construction returns
/// `None` for them (and for coincident points) instead of carrying
/// infinities around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
    m: f32,
    b: f32,
}

impl Line {
    pub fn through(p1: Point, p2: Point) -> Option<Self> {
        let m = (p2.y - p1.y) / (p2.x - p1.x);
        if !m.is_finite() {
            return None;
        }
        let b = p1.y - m * p1.x;
        if !b.is_finite() {
            return None;
        }
        Some(Self { p1, p2, m, b })
    }

    pub fn from_slope(m: f32, b: f32) -> Option<Self> {
        if !m.is_finite() || !b.is_finite() {
            return None;
        }
        let p1 = Point::new(0.0, b);
        let p2 = Point::new(1.0, m + b);
        Some(Self { p1, p2, m, b })
    }

    #[inline]
    pub fn slope(&self) -> f32 {
        self.m
    }

    #[inline]
    pub fn intercept(&self) -> f32 {
        self.b
    }

    pub fn y_at(&self, x: f32) -> f32 {
        self.m * x + self.b
    }

    /// `None` for horizontal lines (every or no x matches).
    pub fn x_at(&self, y: f32) -> Option<f32> {
        let x = (y - self.b) / self.m;
        x.is_finite().then_some(x)
    }

    /// Replace one or both defining points.
    pub fn change_points(&self, p1: Option<Point>, p2: Option<Point>) -> Option<Self> {
        Self::through(p1.unwrap_or(self.p1), p2.unwrap_or(self.p2))
    }

    /// `None` when the lines are parallel (or identical).
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let x = (self.b - other.b) / (other.m - self.m);
        if !x.is_finite() {
            return None;
        }
        let y = self.y_at(x);
        y.is_finite().then(|| Point::new(x, y))
    }
}
