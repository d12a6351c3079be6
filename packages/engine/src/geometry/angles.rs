use std::f32::consts::PI;

/// Heading pointing right along +x.
pub const RIGHT: f32 = 0.0;
/// Heading pointing down the canvas (+y grows downward).
pub const DOWN: f32 = 90.0;
pub const LEFT: f32 = 180.0;
pub const UP: f32 = 270.0;

#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// radians * 180/π
///
/// One historical revision divided instead of multiplying here; that
/// variant is wrong and intentionally not provided.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Wrap any angle into [0, 360).
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    ((degrees % 360.0) + 360.0) % 360.0
}

#[inline]
pub fn hypotenuse(opposite: f32, adjacent: f32) -> f32 {
    opposite.hypot(adjacent)
}
