use crate::grid::Direction;

/// Controller weighting constants and runtime-tunable settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConfig {
    /// Standing directional bias applied before pressure and recency.
    pub priority: Direction,
}

impl NavConfig {
    // ===== fixed weighting constants =====
    /// Bias factor for the priority direction itself.
    pub const BIAS_TOWARD: f64 = 2.0;
    /// Bias factor for the two lateral directions.
    pub const BIAS_LATERAL: f64 = 1.5;
    /// Bias factor for the direction opposite the priority.
    pub const BIAS_AWAY: f64 = 1.0;
    /// Added to the recency grade before dividing, so a never-visited
    /// neighbor multiplies the weight tenfold instead of dividing by zero.
    pub const RECENCY_FLOOR: f64 = 0.1;
    /// Proximity grade above which an obstacle counts as touching.
    pub const SATURATION_THRESHOLD: f64 = 0.999;
    /// Multiplier that makes touching obstacles drown out every other
    /// signal. Deliberate saturation, not an overflow guard.
    pub const SATURATION_GAIN: f64 = 10_000.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PRIORITY: Direction = Direction::Bottom;

    pub fn new() -> Self {
        Self {
            priority: Self::DEFAULT_PRIORITY,
        }
    }

    pub fn with_priority(priority: Direction) -> Self {
        Self { priority }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::new()
    }
}
