/// Closed interval `[a, b]` with `a <= b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub a: f32,
    pub b: f32,
}

impl Range {
    /// Endpoints may be given in either order.
    pub fn new(a: f32, b: f32) -> Self {
        if a > b {
            Self { a: b, b: a }
        } else {
            Self { a, b }
        }
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        ranges_overlap(self, other)
    }
}

/// Inclusive on both ends.
#[inline]
pub fn between(x: f32, range: &Range) -> bool {
    x >= range.a && x <= range.b
}

/// True when any endpoint of one range lies within the other.
/// Touching ranges overlap.
pub fn ranges_overlap(r1: &Range, r2: &Range) -> bool {
    between(r1.a, r2) || between(r1.b, r2) || between(r2.a, r1) || between(r2.b, r1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_orders_endpoints() {
        assert_eq!(Range::new(10.0, 2.0), Range { a: 2.0, b: 10.0 });
        assert_eq!(Range::new(2.0, 10.0), Range { a: 2.0, b: 10.0 });
    }

    #[test]
    fn between_is_inclusive() {
        let r = Range::new(0.0, 5.0);
        assert!(between(0.0, &r));
        assert!(between(5.0, &r));
        assert!(!between(5.01, &r));
    }

    #[test]
    fn touching_ranges_overlap() {
        assert!(ranges_overlap(&Range::new(0.0, 5.0), &Range::new(5.0, 10.0)));
        assert!(!ranges_overlap(&Range::new(0.0, 4.0), &Range::new(5.0, 10.0)));
    }

    #[test]
    fn containment_counts_both_ways() {
        let outer = Range::new(0.0, 100.0);
        let inner = Range::new(40.0, 60.0);
        assert!(ranges_overlap(&outer, &inner));
        assert!(ranges_overlap(&inner, &outer));
    }
}
