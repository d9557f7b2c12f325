use gridnav_core::{Direction, Position};
use serde::{Deserialize, Serialize};

/// Events published while the simulation advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    /// The worker began driving a fresh controller.
    Started { position: Position },

    /// The agent committed one move. Published strictly after the move
    /// history has been updated, so a snapshot taken on receipt already
    /// reflects the new trail.
    Moved {
        direction: Direction,
        from: Position,
        to: Position,
    },
}
