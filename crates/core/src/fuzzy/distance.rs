//! Distance-to-obstacle fuzzification.

use super::membership::Trapezoid;

/// "Close" membership: full grade at contact and for adjacent cells,
/// fading linearly to nothing at five cells out.
const CLOSE: Trapezoid = Trapezoid::new_unchecked(0.0, 0.0, 1.0, 5.0);

/// Degree to which `distance` counts as close, in `[0, 1]`.
pub fn closeness(distance: f64) -> f64 {
    CLOSE.grade(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_and_adjacent_grade_one() {
        assert_eq!(closeness(0.0), 1.0);
        assert_eq!(closeness(1.0), 1.0);
    }

    #[test]
    fn falloff_reaches_zero_at_five() {
        assert_eq!(closeness(2.0), 0.75);
        assert_eq!(closeness(3.0), 0.5);
        assert_eq!(closeness(5.0), 0.0);
        assert_eq!(closeness(6.0), 0.0);
    }

    #[test]
    fn closeness_is_non_increasing() {
        let mut previous = 1.0;
        for i in 0..=60 {
            let grade = closeness(i as f64 * 0.1);
            assert!(grade <= previous);
            previous = grade;
        }
    }
}
