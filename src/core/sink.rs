//! Completion notification port.
//!
//! The scheduler requires only an emission primitive; subscription and
//! dispatch mechanics belong to the surrounding system. Events are emitted in
//! settlement (wall-clock) order, from the scheduler's single owning loop, so
//! implementations are never called concurrently for the same run.

use crate::core::error::SchedulerError;
use crate::core::task::TaskId;

/// A per-task completion event.
#[derive(Debug, Clone)]
pub enum CompletionEvent<T> {
    /// The task settled successfully.
    Fulfilled {
        /// Identifier of the settled task.
        task: TaskId,
        /// The task's result.
        result: T,
    },
    /// The task rejected, or a producer pull failed.
    Rejected {
        /// Identifier of the settled task (or failed pull).
        task: TaskId,
        /// The captured failure.
        error: SchedulerError,
    },
}

impl<T> CompletionEvent<T> {
    /// Identifier of the task this event concerns.
    pub const fn task(&self) -> TaskId {
        match self {
            Self::Fulfilled { task, .. } | Self::Rejected { task, .. } => *task,
        }
    }
}

/// Emission port for per-task completion notifications.
///
/// Every settlement is emitted, including rejections that occur after the
/// run's outcome is already determined; observers needing visibility into
/// every individual failure subscribe here rather than at the aggregate
/// outcome.
pub trait CompletionSink<T>: Send {
    /// A task settled successfully. Results are handed over by value; the
    /// run's aggregate outcome carries no payload.
    fn task_fulfilled(&self, task: TaskId, result: T);
    /// A task rejected or a producer pull failed.
    fn task_rejected(&self, task: TaskId, error: SchedulerError);
}

/// Sink that discards all events.
pub struct NoopSink;

impl<T> CompletionSink<T> for NoopSink {
    fn task_fulfilled(&self, _task: TaskId, _result: T) {}
    fn task_rejected(&self, _task: TaskId, _error: SchedulerError) {}
}

impl<T, S> CompletionSink<T> for std::sync::Arc<S>
where
    S: CompletionSink<T> + Send + Sync,
{
    fn task_fulfilled(&self, task: TaskId, result: T) {
        self.as_ref().task_fulfilled(task, result);
    }

    fn task_rejected(&self, task: TaskId, error: SchedulerError) {
        self.as_ref().task_rejected(task, error);
    }
}
