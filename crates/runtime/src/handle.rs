//! Cloneable API surface over the worker's channels.

use tokio::sync::{broadcast, mpsc, oneshot};

use gridnav_core::Direction;

use crate::error::RuntimeError;
use crate::event::NavEvent;
use crate::worker::{Command, Snapshot};

/// Handle for driving and observing a [`ControllerWorker`](crate::ControllerWorker).
///
/// Cheap to clone; the worker shuts down once every clone is dropped.
#[derive(Clone)]
pub struct NavHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<NavEvent>,
}

impl NavHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<NavEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Subscribes to move events. Each subscriber gets every event from the
    /// moment of subscription; slow subscribers may lag and skip.
    pub fn subscribe(&self) -> broadcast::Receiver<NavEvent> {
        self.event_tx.subscribe()
    }

    /// Read-only copy of the current world.
    pub async fn snapshot(&self) -> Result<Snapshot, RuntimeError> {
        let (reply, response) = oneshot::channel();
        self.command_tx
            .send(Command::QuerySnapshot { reply })
            .await
            .map_err(|_| RuntimeError::WorkerGone)?;
        response.await.map_err(|_| RuntimeError::WorkerGone)
    }

    pub async fn pause(&self) -> Result<(), RuntimeError> {
        self.send(Command::Pause).await
    }

    pub async fn resume(&self) -> Result<(), RuntimeError> {
        self.send(Command::Resume).await
    }

    pub async fn set_priority(&self, direction: Direction) -> Result<(), RuntimeError> {
        self.send(Command::SetPriority(direction)).await
    }

    async fn send(&self, command: Command) -> Result<(), RuntimeError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::WorkerGone)
    }
}
