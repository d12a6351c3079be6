use crate::geometry::{Point, Vector};

/// Dimensions of the rendering surface the actors bounce inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Elastic wall bounce for a box of `width` x `height` whose top-left
/// corner would land on `next`.
///
/// The penetration depth past a wall is mirrored back inside and the
/// matching vector axis flipped. An axis is only flipped while the vector
/// still points into the wall, so an actor already heading back in is not
/// turned around again. The result is clamped to the legal range as a final
/// step, which also covers overshoots larger than the surface.
pub fn reflect_into(surface: &Surface, next: Point, width: f32, height: f32, vector: &mut Vector) -> Point {
    let max_x = (surface.width - width).max(0.0);
    let max_y = (surface.height - height).max(0.0);
    let mut p = next;

    // right / left
    if p.x > max_x {
        p.x -= 2.0 * (p.x - max_x);
        if vector.x() > 0.0 {
            vector.reverse_x();
        }
    } else if p.x < 0.0 {
        p.x = -p.x;
        if vector.x() < 0.0 {
            vector.reverse_x();
        }
    }

    // bottom / top
    if p.y > max_y {
        p.y -= 2.0 * (p.y - max_y);
        if vector.y() > 0.0 {
            vector.reverse_y();
        }
    } else if p.y < 0.0 {
        p.y = -p.y;
        if vector.y() < 0.0 {
            vector.reverse_y();
        }
    }

    Point::new(p.x.clamp(0.0, max_x), p.y.clamp(0.0, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn right_wall_mirrors_overshoot() {
        let surface = Surface::new(100.0, 100.0);
        let mut v = Vector::new(5.0, 0.0);
        let p = reflect_into(&surface, Point::new(102.0, 10.0), 10.0, 10.0, &mut v);
        assert!(close(p.x, 78.0));
        assert!(close(v.x(), -5.0));
        assert!(close(v.direction(), 180.0));
    }

    #[test]
    fn top_wall_flips_y_only() {
        let surface = Surface::new(100.0, 100.0);
        let mut v = Vector::new(4.0, 315.0);
        let x = v.x();
        let p = reflect_into(&surface, Point::new(40.0, -3.0), 10.0, 10.0, &mut v);
        assert!(close(p.y, 3.0));
        assert!(close(p.x, 40.0));
        assert!(close(v.x(), x));
        assert!(v.y() > 0.0);
        assert!(close(v.direction(), 45.0));
    }

    #[test]
    fn corner_hit_flips_both_axes() {
        let surface = Surface::new(50.0, 50.0);
        let mut v = Vector::from_xy(3.0, 3.0);
        let p = reflect_into(&surface, Point::new(42.0, 41.0), 10.0, 10.0, &mut v);
        assert!(close(p.x, 38.0));
        assert!(close(p.y, 39.0));
        assert!(close(v.x(), -3.0));
        assert!(close(v.y(), -3.0));
    }

    #[test]
    fn inside_point_is_untouched() {
        let surface = Surface::new(100.0, 100.0);
        let mut v = Vector::new(5.0, 10.0);
        let before = v;
        let p = reflect_into(&surface, Point::new(20.0, 30.0), 10.0, 10.0, &mut v);
        assert_eq!(p, Point::new(20.0, 30.0));
        assert_eq!(v, before);
    }

    #[test]
    fn huge_overshoot_is_clamped() {
        let surface = Surface::new(100.0, 100.0);
        let mut v = Vector::new(500.0, 0.0);
        let p = reflect_into(&surface, Point::new(600.0, 0.0), 10.0, 10.0, &mut v);
        assert!(p.x >= 0.0 && p.x <= 90.0);
        assert!(v.x() < 0.0);
    }

    #[test]
    fn actor_larger_than_surface_pins_to_origin() {
        let surface = Surface::new(20.0, 20.0);
        let mut v = Vector::new(1.0, 0.0);
        let p = reflect_into(&surface, Point::new(3.0, 0.0), 50.0, 50.0, &mut v);
        assert_eq!(p, Point::new(0.0, 0.0));
    }
}
