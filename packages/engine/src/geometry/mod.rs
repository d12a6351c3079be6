//! Geometry - plain-value math used by actors and the stage
//!
//! Everything here is `Copy` data with no knowledge of actors or the stage.
//! Angles are degrees at the API surface; radians only appear inside trig.

mod angles;
mod point;
mod vector;
mod range;
mod bbox;
mod line;

pub use angles::{hypotenuse, normalize_degrees, to_degrees, to_radians, DOWN, LEFT, RIGHT, UP};
pub use bbox::BoundingBox;
pub use line::Line;
pub use point::Point;
pub use range::{between, ranges_overlap, Range};
pub use vector::Vector;
