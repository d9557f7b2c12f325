//! Async driving layer for the gridnav controller.
//!
//! A [`ControllerWorker`] owns the obstacle field and the robot, advances
//! one move per timer tick, and publishes [`NavEvent`]s on a broadcast
//! channel. Observers interact through the cloneable [`NavHandle`]: they
//! subscribe to events, query read-only snapshots, pause and resume the
//! clock, or change the standing priority direction.
pub mod error;
pub mod event;
pub mod handle;
pub mod worker;

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};

use gridnav_core::{ObstacleField, Robot};

pub use error::RuntimeError;
pub use event::NavEvent;
pub use handle::NavHandle;
pub use worker::{Command, ControllerWorker, Snapshot};

/// Buffered commands per handle before senders await.
const COMMAND_BUFFER: usize = 16;
/// Broadcast backlog before slow subscribers start lagging.
const EVENT_BUFFER: usize = 64;

/// Spawns a controller worker on the current tokio runtime and returns the
/// handle that drives and observes it. The worker stops when every handle
/// has been dropped.
pub fn spawn(field: ObstacleField, robot: Robot, tick: Duration) -> NavHandle {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (event_tx, _) = broadcast::channel(EVENT_BUFFER);

    let worker = ControllerWorker::new(field, robot, tick, command_rx, event_tx.clone());
    tokio::spawn(worker.run());

    NavHandle::new(command_tx, event_tx)
}
