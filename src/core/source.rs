//! Producer adapters normalizing task sources behind one pull contract.
//!
//! Producers come in two shapes: a plain callback that yields a task or an
//! exhaustion marker per call ([`FnSource`]), and a restartable sequence
//! whose iterator is obtained once at construction and advanced one step per
//! pull ([`IterSource`]). The scheduler is agnostic to which shape it holds.

use crate::core::error::AppResult;
use crate::core::task::TaskFuture;

/// Result of asking a producer for more work.
pub enum Pull<T> {
    /// The producer yielded a pending operation.
    Task(TaskFuture<T>),
    /// The producer has no more work; it will never be pulled again.
    Exhausted,
}

impl<T> std::fmt::Debug for Pull<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task(_) => f.write_str("Task(..)"),
            Self::Exhausted => f.write_str("Exhausted"),
        }
    }
}

/// A producer of pending asynchronous operations.
///
/// Implementations must eventually return [`Pull::Exhausted`], or the
/// scheduler will keep pulling whenever concurrency headroom exists. A pull
/// may fail synchronously; the scheduler aggregates that failure exactly like
/// a task rejection.
pub trait TaskSource<T>: Send {
    /// Pull the next task, signal exhaustion, or fail.
    fn pull(&mut self) -> AppResult<Pull<T>>;
}

/// Plain-function producer shape.
///
/// Each pull invokes the callback once: `Ok(Some(task))` yields a task,
/// `Ok(None)` is the exhaustion marker, and `Err` is a synchronous producer
/// failure.
pub struct FnSource<F> {
    produce: F,
}

impl<F> FnSource<F> {
    /// Wrap a callback producer.
    pub fn new(produce: F) -> Self {
        Self { produce }
    }
}

impl<T, F> TaskSource<T> for FnSource<F>
where
    F: FnMut() -> AppResult<Option<TaskFuture<T>>> + Send,
{
    fn pull(&mut self) -> AppResult<Pull<T>> {
        Ok(match (self.produce)()? {
            Some(task) => Pull::Task(task),
            None => Pull::Exhausted,
        })
    }
}

/// Restartable-sequence producer shape.
///
/// The iterator is obtained once at construction; its completion is the
/// exhaustion marker. Pulls through this shape cannot fail.
pub struct IterSource<I> {
    tasks: I,
}

impl<I> IterSource<I> {
    /// Take one iterator from the sequence.
    pub fn new<T>(tasks: impl IntoIterator<Item = TaskFuture<T>, IntoIter = I>) -> Self
    where
        I: Iterator<Item = TaskFuture<T>>,
    {
        Self {
            tasks: tasks.into_iter(),
        }
    }
}

impl<T, I> TaskSource<T> for IterSource<I>
where
    I: Iterator<Item = TaskFuture<T>> + Send,
{
    fn pull(&mut self) -> AppResult<Pull<T>> {
        Ok(self.tasks.next().map_or(Pull::Exhausted, Pull::Task))
    }
}
