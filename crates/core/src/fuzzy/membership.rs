//! Trapezoidal membership function, the primitive behind every
//! fuzzification step in this crate.

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MembershipError {
    #[error("breakpoints must satisfy a <= b <= c <= d")]
    Unordered,

    #[error("breakpoints must not be NaN")]
    NotANumber,
}

/// Trapezoidal membership function over breakpoints `a <= b <= c <= d`.
///
/// The grade rises linearly from 0 at `a` to 1 at `b`, holds 1 through `c`,
/// falls linearly back to 0 at `d`, and is 0 outside `[a, d]`. Degenerate
/// shapes are all well-defined: `b == c` gives a triangle, infinite `c`/`d`
/// give a one-sided ramp, and `a == b` (or `c == d`) gives a vertical edge
/// that grades 1 at the shared breakpoint.
///
/// The function is pure and stateless: the same input always yields the
/// same grade, and the result is always in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoid {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Trapezoid {
    /// Builds a trapezoid, validating breakpoint order.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, MembershipError> {
        if a.is_nan() || b.is_nan() || c.is_nan() || d.is_nan() {
            return Err(MembershipError::NotANumber);
        }
        if !(a <= b && b <= c && c <= d) {
            return Err(MembershipError::Unordered);
        }
        Ok(Self::new_unchecked(a, b, c, d))
    }

    /// Builds a trapezoid without validating breakpoint order. Reserved for
    /// the fixed tables this crate defines in `const` context.
    pub const fn new_unchecked(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Membership grade of `value`, in `[0, 1]`.
    ///
    /// Branch order matters for the vertical edges: when `a == b` no value
    /// can fall in the rising branch (anything below `a` is already out),
    /// so `value == a == b` lands on the plateau and grades 1 rather than
    /// dividing by zero. `c == d` is symmetric on the falling side.
    pub fn grade(&self, value: f64) -> f64 {
        if value < self.a || value > self.d {
            return 0.0;
        }
        if value < self.b {
            return (value - self.a) / (self.b - self.a);
        }
        if value <= self.c {
            return 1.0;
        }
        (self.d - value) / (self.d - self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unordered_breakpoints() {
        assert_eq!(
            Trapezoid::new(1.0, 0.0, 2.0, 3.0),
            Err(MembershipError::Unordered)
        );
        assert_eq!(
            Trapezoid::new(0.0, 2.0, 1.0, 3.0),
            Err(MembershipError::Unordered)
        );
    }

    #[test]
    fn rejects_nan_breakpoints() {
        assert_eq!(
            Trapezoid::new(0.0, f64::NAN, 1.0, 2.0),
            Err(MembershipError::NotANumber)
        );
    }

    #[test]
    fn full_trapezoid_boundary_grades() {
        let trapezoid = Trapezoid::new(0.0, 1.0, 2.0, 4.0).unwrap();
        assert_eq!(trapezoid.grade(-0.5), 0.0);
        assert_eq!(trapezoid.grade(0.0), 0.0);
        assert_eq!(trapezoid.grade(0.5), 0.5);
        assert_eq!(trapezoid.grade(1.0), 1.0);
        assert_eq!(trapezoid.grade(1.7), 1.0);
        assert_eq!(trapezoid.grade(2.0), 1.0);
        assert_eq!(trapezoid.grade(3.0), 0.5);
        assert_eq!(trapezoid.grade(4.0), 0.0);
        assert_eq!(trapezoid.grade(4.5), 0.0);
    }

    #[test]
    fn ramps_are_monotonic() {
        let trapezoid = Trapezoid::new(0.0, 2.0, 3.0, 7.0).unwrap();
        let mut previous = 0.0;
        for i in 0..=20 {
            let grade = trapezoid.grade(i as f64 * 0.1);
            assert!(grade >= previous);
            previous = grade;
        }
        let mut previous = 1.0;
        for i in 30..=70 {
            let grade = trapezoid.grade(i as f64 * 0.1);
            assert!(grade <= previous);
            previous = grade;
        }
    }

    // Vertical edges must grade 1, never divide by zero into NaN.
    #[test]
    fn vertical_rising_edge_grades_one() {
        let trapezoid = Trapezoid::new(0.0, 0.0, 1.0, 5.0).unwrap();
        let grade = trapezoid.grade(0.0);
        assert!(!grade.is_nan());
        assert_eq!(grade, 1.0);
    }

    #[test]
    fn vertical_falling_edge_grades_one() {
        let trapezoid = Trapezoid::new(0.0, 1.0, 5.0, 5.0).unwrap();
        let grade = trapezoid.grade(5.0);
        assert!(!grade.is_nan());
        assert_eq!(grade, 1.0);
    }

    #[test]
    fn infinite_plateau_never_falls() {
        let ramp = Trapezoid::new(0.0, 15.0, f64::INFINITY, f64::INFINITY).unwrap();
        assert_eq!(ramp.grade(0.0), 0.0);
        assert_eq!(ramp.grade(7.5), 0.5);
        assert_eq!(ramp.grade(15.0), 1.0);
        assert_eq!(ramp.grade(1_000_000.0), 1.0);
    }

    #[test]
    fn triangle_peaks_at_shared_breakpoint() {
        let triangle = Trapezoid::new(-1.0, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(triangle.grade(0.0), 1.0);
        assert_eq!(triangle.grade(-0.5), 0.5);
        assert_eq!(triangle.grade(0.5), 0.5);
        assert_eq!(triangle.grade(-1.0), 0.0);
        assert_eq!(triangle.grade(1.0), 0.0);
    }
}
