//! Task identifiers and the task-future alias.

use futures::future::BoxFuture;

use crate::core::error::AppResult;

/// Identifier of a scheduled task.
///
/// Ids are allocated in pull order, starting at zero, so the id doubles as
/// the task's position in the producer's sequence. A pull that fails
/// synchronously also consumes an id, which lets its rejection be reported
/// through the completion sink like any other.
pub type TaskId = u64;

/// A pending asynchronous operation yielded by a producer.
///
/// Tasks settle with either a result or a failure; the scheduler never
/// inspects the result beyond forwarding it to the completion sink.
pub type TaskFuture<T> = BoxFuture<'static, AppResult<T>>;

/// Outcome of one settled task, reported back to the scheduler's run loop.
pub(crate) struct Settlement<T> {
    /// Which task settled.
    pub task: TaskId,
    /// How it settled.
    pub outcome: AppResult<T>,
}
