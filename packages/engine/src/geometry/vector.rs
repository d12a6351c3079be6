use super::angles::{hypotenuse, normalize_degrees, to_degrees, to_radians};
use super::point::Point;

/// Heading + magnitude with cached Cartesian components.
///
/// The four fields are kept consistent by every setter:
/// `x = magnitude * cos(direction)`, `y = magnitude * sin(direction)`,
/// `magnitude >= 0`, `direction` in [0, 360).
///
/// Non-finite inputs are ignored so NaN can never leak into actor state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    magnitude: f32,
    direction: f32,
    x: f32,
    y: f32,
}

impl Vector {
    pub fn new(magnitude: f32, direction: f32) -> Self {
        let mut v = Self::zero();
        v.set_direction(direction);
        v.set_magnitude(magnitude);
        v
    }

    pub fn from_xy(x: f32, y: f32) -> Self {
        let mut v = Self::zero();
        v.set_xy(x, y);
        v
    }

    pub fn zero() -> Self {
        Self { magnitude: 0.0, direction: 0.0, x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Degrees in [0, 360)
    #[inline]
    pub fn direction(&self) -> f32 {
        self.direction
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Point the vector at `degrees` (any value, wrapped into [0, 360)).
    pub fn set_direction(&mut self, degrees: f32) -> &mut Self {
        if !degrees.is_finite() {
            return self;
        }
        self.direction = normalize_degrees(degrees);
        self.sync_xy();
        self
    }

    /// Negative magnitudes clamp to zero.
    pub fn set_magnitude(&mut self, magnitude: f32) -> &mut Self {
        if !magnitude.is_finite() {
            return self;
        }
        self.magnitude = magnitude.max(0.0);
        self.sync_xy();
        self
    }

    /// Set the components directly; magnitude and direction follow.
    ///
    /// A zero vector has no angle, so the previous heading is kept.
    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        if !x.is_finite() || !y.is_finite() {
            return self;
        }
        self.x = x;
        self.y = y;
        self.magnitude = hypotenuse(x, y);
        if x != 0.0 || y != 0.0 {
            self.direction = normalize_degrees(to_degrees(y.atan2(x)));
        }
        self
    }

    pub fn rotate(&mut self, degrees: f32) -> &mut Self {
        let direction = self.direction + degrees;
        self.set_direction(direction)
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.rotate(180.0)
    }

    /// Mirror across the vertical axis (bounce off a left/right wall).
    pub fn reverse_x(&mut self) -> &mut Self {
        let (x, y) = (-self.x, self.y);
        self.set_xy(x, y)
    }

    /// Mirror across the horizontal axis (bounce off a top/bottom wall).
    pub fn reverse_y(&mut self) -> &mut Self {
        let (x, y) = (self.x, -self.y);
        self.set_xy(x, y)
    }

    /// Component-wise sum. Magnitude is recomputed along with direction.
    pub fn add(&mut self, other: &Vector) -> &mut Self {
        let (x, y) = (self.x + other.x, self.y + other.y);
        self.set_xy(x, y)
    }

    /// Displacement covered after `frames` ticks.
    pub fn offset(&self, frames: f32) -> Point {
        Point::new(self.x * frames, self.y * frames)
    }

    fn sync_xy(&mut self) {
        let (sin, cos) = to_radians(self.direction).sin_cos();
        self.x = self.magnitude * cos;
        self.y = self.magnitude * sin;
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}
