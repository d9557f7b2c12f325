/// Errors surfaced by [`NavHandle`](crate::NavHandle) operations.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The worker task is gone; either it was never spawned on a live
    /// runtime or it has already shut down.
    #[error("controller worker is no longer running")]
    WorkerGone,
}
