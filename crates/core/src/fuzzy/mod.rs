//! Fuzzification primitives: the trapezoidal membership curve and the fixed
//! distance and bearing tables built on top of it.
pub mod bearing;
pub mod distance;
pub mod membership;

pub use bearing::{
    DirectionalWeights, coefficient_bottom, coefficient_left, coefficient_right, coefficient_top,
};
pub use distance::closeness;
pub use membership::{MembershipError, Trapezoid};
