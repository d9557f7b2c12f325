//! Tick-driven worker that owns the field and the controller.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use gridnav_core::{Direction, ObstacleField, Position, Robot};

use crate::event::NavEvent;

/// Commands accepted by [`ControllerWorker`].
#[derive(Debug)]
pub enum Command {
    /// Read-only copy of the current world, for rendering or inspection.
    QuerySnapshot { reply: oneshot::Sender<Snapshot> },
    /// Stop advancing moves until resumed. Commands are still served.
    Pause,
    Resume,
    /// Change the standing directional bias of the controller.
    SetPriority(Direction),
}

/// Point-in-time copy of the world handed to observers.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub field: ObstacleField,
    pub position: Position,
    pub priority: Direction,
    pub ticks: u64,
    pub paused: bool,
}

/// Background task driving one robot across one field.
///
/// The worker is the single writer: the field and robot never leave it, and
/// observers only ever see cloned snapshots, so a tick always computes over
/// a consistent world.
pub struct ControllerWorker {
    field: ObstacleField,
    robot: Robot,
    tick: Duration,
    ticks: u64,
    paused: bool,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<NavEvent>,
}

impl ControllerWorker {
    pub fn new(
        field: ObstacleField,
        robot: Robot,
        tick: Duration,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<NavEvent>,
    ) -> Self {
        Self {
            field,
            robot,
            tick,
            ticks: 0,
            paused: false,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop. Returns when every handle has been dropped.
    pub async fn run(mut self) {
        info!(
            width = self.field.width(),
            height = self.field.height(),
            position = %self.robot.position(),
            "controller worker started"
        );
        let _ = self.event_tx.send(NavEvent::Started {
            position: self.robot.position(),
        });

        let mut ticker = tokio::time::interval(self.tick);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !self.paused {
                        self.advance();
                    }
                }
                command = self.command_rx.recv() => {
                    match command {
                        Some(command) => self.handle_command(command),
                        // No handles left; nobody is observing.
                        None => break,
                    }
                }
            }
        }
        info!(ticks = self.ticks, "controller worker stopped");
    }

    fn advance(&mut self) {
        let step = self.robot.step(&self.field);
        self.ticks += 1;
        debug!(
            tick = self.ticks,
            direction = %step.direction,
            from = %step.from,
            to = %step.to,
            "moved"
        );
        let _ = self.event_tx.send(NavEvent::Moved {
            direction: step.direction,
            from: step.from,
            to: step.to,
        });
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::QuerySnapshot { reply } => {
                let _ = reply.send(Snapshot {
                    field: self.field.clone(),
                    position: self.robot.position(),
                    priority: self.robot.priority(),
                    ticks: self.ticks,
                    paused: self.paused,
                });
            }
            Command::Pause => {
                self.paused = true;
                info!(ticks = self.ticks, "paused");
            }
            Command::Resume => {
                self.paused = false;
                info!(ticks = self.ticks, "resumed");
            }
            Command::SetPriority(direction) => {
                self.robot.set_priority(direction);
                info!(priority = %direction, "priority changed");
            }
        }
    }
}
