//! Straight-line interpolation between tabulated points.

use crate::table::PropertyPoint;

/// Interpolate linearly between `p1` and `p2` at `x`.
///
/// No bounds checking: the caller guarantees `x` lies between the two points
/// (or accepts extrapolation), and the points must have distinct temperatures.
/// Table temperatures are unique and exact matches are resolved before
/// interpolation, so a degenerate pair never reaches this function.
pub fn linear(p1: PropertyPoint, p2: PropertyPoint, x: f64) -> f64 {
    p1.value + (x - p1.temp_c) * (p2.value - p1.value) / (p2.temp_c - p1.temp_c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lq_core::{Tolerances, nearly_equal};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-12,
            rel: 1e-12,
        }
    }

    #[test]
    fn midpoint_is_average() {
        let p1 = PropertyPoint::new(0.0, 999.8);
        let p2 = PropertyPoint::new(10.0, 999.6);
        let y = linear(p1, p2, 5.0);
        assert!(nearly_equal(y, (999.8 + 999.6) / 2.0, tol()));
    }

    #[test]
    fn boundaries_reproduce_endpoints() {
        let p1 = PropertyPoint::new(20.0, 998.2);
        let p2 = PropertyPoint::new(30.0, 995.7);
        assert!(nearly_equal(linear(p1, p2, 20.0), 998.2, tol()));
        assert!(nearly_equal(linear(p1, p2, 30.0), 995.7, tol()));
    }

    #[test]
    fn known_intermediate_value() {
        // y = 1 + x on [0, 10]
        let p1 = PropertyPoint::new(0.0, 1.0);
        let p2 = PropertyPoint::new(10.0, 11.0);
        assert!(nearly_equal(linear(p1, p2, 2.5), 3.5, tol()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use lq_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn boundary_reproduction(
            x1 in -200.0_f64..200.0,
            dx in 1e-3_f64..500.0,
            y1 in -1e6_f64..1e6,
            y2 in -1e6_f64..1e6,
        ) {
            let p1 = PropertyPoint::new(x1, y1);
            let p2 = PropertyPoint::new(x1 + dx, y2);
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(linear(p1, p2, p1.temp_c), y1, tol));
            prop_assert!(nearly_equal(linear(p1, p2, p2.temp_c), y2, tol));
        }

        #[test]
        fn midpoint_is_mean(
            x1 in -200.0_f64..200.0,
            dx in 1e-3_f64..500.0,
            y1 in -1e6_f64..1e6,
            y2 in -1e6_f64..1e6,
        ) {
            let p1 = PropertyPoint::new(x1, y1);
            let p2 = PropertyPoint::new(x1 + dx, y2);
            let mid = x1 + dx / 2.0;
            let tol = Tolerances { abs: 1e-6, rel: 1e-9 };
            prop_assert!(nearly_equal(linear(p1, p2, mid), (y1 + y2) / 2.0, tol));
        }
    }
}
