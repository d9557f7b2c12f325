//! Reactive fuzzy-logic navigation for a discrete obstacle grid.
//!
//! `gridnav-core` implements the decision engine: per-obstacle distance and
//! bearing fuzzification, an obstacle field with a synthetic border ring, a
//! bounded move history with recency penalties, and the weight combination
//! that selects one cardinal move per tick. Everything here is pure,
//! synchronous, and deterministic; the driving loop and rendering live in
//! `gridnav-runtime` and `gridnav-client`.
pub mod config;
pub mod engine;
pub mod field;
pub mod fuzzy;
pub mod grid;
pub mod history;
pub mod rng;

pub use config::NavConfig;
pub use engine::{CollisionPressure, Robot, Step};
pub use field::{FieldError, ObstacleField};
pub use fuzzy::{DirectionalWeights, MembershipError, Trapezoid, closeness};
pub use grid::{Direction, Position};
pub use history::{HISTORY_CAPACITY, MoveHistory};
pub use rng::Pcg32;
