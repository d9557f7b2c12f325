//! The per-tick fuzzy decision engine.
//!
//! Each [`Robot::step`] call aggregates obstacle pressure per direction,
//! applies the standing directional bias and the recency penalty of each
//! neighbor cell, and commits the move with the maximum combined weight.
//! There is no lookahead and no notion of an invalid move: obstacles are
//! advisory pressure, not hard constraints, so a move is always produced.

use crate::config::NavConfig;
use crate::field::ObstacleField;
use crate::fuzzy::{DirectionalWeights, closeness};
use crate::grid::{Direction, Position};
use crate::history::MoveHistory;

/// Aggregate obstacle pressure per candidate direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionPressure {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl CollisionPressure {
    /// One O(obstacles) pass over the field as seen from `from`: every
    /// stored and border obstacle contributes its closeness, split across
    /// the four directions by its bearing.
    pub fn accumulate(field: &ObstacleField, from: Position) -> Self {
        let mut pressure = Self::default();
        for obstacle in field.obstacles() {
            let mut proximity = closeness(from.distance_to(obstacle));
            // Touching or adjacent obstacles must drown out every other
            // signal; see NavConfig::SATURATION_GAIN.
            if proximity > NavConfig::SATURATION_THRESHOLD {
                proximity *= NavConfig::SATURATION_GAIN;
            }

            let coefficients = DirectionalWeights::at(from.bearing_to(obstacle));
            pressure.top += proximity * coefficients.top;
            pressure.right += proximity * coefficients.right;
            pressure.bottom += proximity * coefficients.bottom;
            pressure.left += proximity * coefficients.left;
        }
        pressure
    }

    pub fn toward(self, direction: Direction) -> f64 {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }
}

/// One committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub direction: Direction,
    pub from: Position,
    pub to: Position,
}

/// Reactive grid agent: one cardinal move per tick from local fuzzy
/// signals only.
///
/// The obstacle field is borrowed per step and must not change during the
/// pass; the robot owns its position and move history.
#[derive(Clone, Debug)]
pub struct Robot {
    position: Position,
    config: NavConfig,
    history: MoveHistory,
}

impl Robot {
    pub fn new(start: Position) -> Self {
        Self::with_config(start, NavConfig::default())
    }

    pub fn with_config(start: Position, config: NavConfig) -> Self {
        Self {
            position: start,
            config,
            history: MoveHistory::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn priority(&self) -> Direction {
        self.config.priority
    }

    /// Changes the standing directional bias for subsequent steps.
    pub fn set_priority(&mut self, priority: Direction) {
        self.config.priority = priority;
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Advances exactly one move and records it in the history.
    ///
    /// Ties resolve to the earliest entry of [`Direction::ORDER`]. A
    /// direction with zero pressure weighs +∞ and dominates outright
    /// (nothing in the way beats every other consideration); NaN cannot
    /// occur because membership grades are always finite and pressures are
    /// finite sums.
    pub fn step(&mut self, field: &ObstacleField) -> Step {
        let pressure = CollisionPressure::accumulate(field, self.position);

        let mut best = Direction::ORDER[0];
        let mut best_weight = f64::NEG_INFINITY;
        for direction in Direction::ORDER {
            let weight = self.weight(direction, pressure.toward(direction));
            // Strictly-greater keeps the earlier direction on ties.
            if weight > best_weight {
                best = direction;
                best_weight = weight;
            }
        }

        let from = self.position;
        self.position = from.step(best);
        // History updates before the step is reported, so observers always
        // see a trail that already contains the new position.
        self.history.push(self.position);
        Step {
            direction: best,
            from,
            to: self.position,
        }
    }

    /// Desirability of moving `toward`: standing bias, divided by obstacle
    /// pressure, divided by the recency penalty of the neighbor cell.
    fn weight(&self, toward: Direction, pressure: f64) -> f64 {
        let bias = if self.config.priority == toward {
            NavConfig::BIAS_TOWARD
        } else if self.config.priority == toward.opposite() {
            NavConfig::BIAS_AWAY
        } else {
            NavConfig::BIAS_LATERAL
        };
        let recency = self.history.recency(self.position.step(toward));
        bias / pressure / (NavConfig::RECENCY_FLOOR + recency)
    }
}
