//! Bearing-to-direction fuzzification.
//!
//! Bearings are computed as `atan2(dx, dy)` with x as the *first* argument,
//! so bearing 0 points straight down (+y, Bottom) and ±π points up. The four
//! quadrant tables below are tuned to that axis order; swapping the atan2
//! arguments without rotating the tables shifts every obstacle contribution
//! by 90 degrees.
//!
//! Each table spans π radians with linear blending at the quadrant
//! boundaries, so a bearing exactly between two directions contributes half
//! to each.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::membership::Trapezoid;

const TOWARD_BOTTOM: Trapezoid = Trapezoid::new_unchecked(-FRAC_PI_2, 0.0, 0.0, FRAC_PI_2);
const TOWARD_RIGHT: Trapezoid = Trapezoid::new_unchecked(0.0, FRAC_PI_2, FRAC_PI_2, PI);
const TOWARD_LEFT: Trapezoid = Trapezoid::new_unchecked(-PI, -FRAC_PI_2, -FRAC_PI_2, 0.0);
// Straddles the atan2 seam at ±π; evaluated on bearings lifted into [0, 2π).
const TOWARD_TOP: Trapezoid = Trapezoid::new_unchecked(FRAC_PI_2, PI, PI, 3.0 * FRAC_PI_2);

/// Per-direction contribution coefficients of a single obstacle bearing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DirectionalWeights {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl DirectionalWeights {
    /// Splits a bearing into its four cardinal coefficients.
    pub fn at(angle: f64) -> Self {
        Self {
            top: coefficient_top(angle),
            right: coefficient_right(angle),
            bottom: coefficient_bottom(angle),
            left: coefficient_left(angle),
        }
    }
}

/// Weight of an obstacle at `angle` against moving up (-y).
pub fn coefficient_top(angle: f64) -> f64 {
    let normalized = if angle < 0.0 { angle + TAU } else { angle };
    TOWARD_TOP.grade(normalized)
}

/// Weight of an obstacle at `angle` against moving right (+x).
pub fn coefficient_right(angle: f64) -> f64 {
    TOWARD_RIGHT.grade(angle)
}

/// Weight of an obstacle at `angle` against moving down (+y).
pub fn coefficient_bottom(angle: f64) -> f64 {
    TOWARD_BOTTOM.grade(angle)
}

/// Weight of an obstacle at `angle` against moving left (-x).
pub fn coefficient_left(angle: f64) -> f64 {
    TOWARD_LEFT.grade(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_bearings_grade_their_own_direction_fully() {
        // Bearing 0 = obstacle straight below; ±π/2 = beside; π = above.
        assert_eq!(coefficient_bottom(0.0), 1.0);
        assert_eq!(coefficient_right(FRAC_PI_2), 1.0);
        assert_eq!(coefficient_left(-FRAC_PI_2), 1.0);
        assert_eq!(coefficient_top(PI), 1.0);
    }

    #[test]
    fn negative_bearings_normalize_for_top() {
        // atan2 yields -π and π for the same upward bearing depending on
        // the sign of a zero dx; both must grade identically.
        assert_eq!(coefficient_top(-PI), coefficient_top(PI));
        assert!(coefficient_top(-PI + 0.2) > 0.0);
    }

    #[test]
    fn diagonal_bearings_blend_between_neighbors() {
        let diagonal = FRAC_PI_2 / 2.0; // down-right
        assert!((coefficient_bottom(diagonal) - 0.5).abs() < 1e-12);
        assert!((coefficient_right(diagonal) - 0.5).abs() < 1e-12);
        assert_eq!(coefficient_top(diagonal), 0.0);
        assert_eq!(coefficient_left(diagonal), 0.0);
    }

    #[test]
    fn coefficients_stay_in_unit_range_and_bounded_sum() {
        for i in 0..=360 {
            let angle = (i as f64).to_radians() - PI;
            let weights = DirectionalWeights::at(angle);
            for coefficient in [weights.top, weights.right, weights.bottom, weights.left] {
                assert!((0.0..=1.0).contains(&coefficient), "angle {angle}");
            }
            let sum = weights.top + weights.right + weights.bottom + weights.left;
            assert!(sum <= 2.0 + 1e-12, "angle {angle}: sum {sum}");
        }
    }
}
