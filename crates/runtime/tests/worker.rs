//! Worker loop behavior under a paused tokio clock.

use std::time::Duration;

use gridnav_core::{Direction, NavConfig, ObstacleField, Position, Robot};
use gridnav_runtime::{NavEvent, spawn};

const TICK: Duration = Duration::from_millis(100);

fn start_center_robot() -> gridnav_runtime::NavHandle {
    let field = ObstacleField::new(5, 5);
    let robot = Robot::with_config(
        Position::new(2, 2),
        NavConfig::with_priority(Direction::Bottom),
    );
    spawn(field, robot, TICK)
}

#[tokio::test(start_paused = true)]
async fn worker_emits_chained_move_events() {
    let handle = start_center_robot();
    let mut events = handle.subscribe();

    assert_eq!(
        events.recv().await.unwrap(),
        NavEvent::Started {
            position: Position::new(2, 2)
        }
    );

    let mut previous = Position::new(2, 2);
    for _ in 0..4 {
        match events.recv().await.unwrap() {
            NavEvent::Moved {
                direction,
                from,
                to,
            } => {
                assert_eq!(from, previous);
                assert_eq!(from.step(direction), to);
                previous = to;
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn first_move_honors_priority_bias() {
    let handle = start_center_robot();
    let mut events = handle.subscribe();

    // Skip the start notification.
    events.recv().await.unwrap();

    match events.recv().await.unwrap() {
        NavEvent::Moved { direction, to, .. } => {
            assert_eq!(direction, Direction::Bottom);
            assert_eq!(to, Position::new(2, 3));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn snapshot_reflects_the_last_published_move() {
    let handle = start_center_robot();
    let mut events = handle.subscribe();

    events.recv().await.unwrap();
    let first_to = match events.recv().await.unwrap() {
        NavEvent::Moved { to, .. } => to,
        other => panic!("unexpected event: {other:?}"),
    };

    // Pause before the next tick can fire, then inspect.
    handle.pause().await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.position, first_to);
    assert_eq!(snapshot.ticks, 1);
    assert!(snapshot.paused);
}

#[tokio::test(start_paused = true)]
async fn priority_can_be_changed_at_runtime() {
    let handle = start_center_robot();

    handle.pause().await.unwrap();
    handle.set_priority(Direction::Top).await.unwrap();

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.priority, Direction::Top);
}

#[tokio::test(start_paused = true)]
async fn paused_worker_does_not_advance() {
    let handle = start_center_robot();
    handle.pause().await.unwrap();

    let before = handle.snapshot().await.unwrap();
    tokio::time::sleep(TICK * 10).await;
    let after = handle.snapshot().await.unwrap();

    assert_eq!(before.ticks, after.ticks);
    assert_eq!(before.position, after.position);
}
