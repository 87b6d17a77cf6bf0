//! Async executor trait and the payload-driven task source built on it.

use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::core::source::{Pull, TaskSource};

/// Abstraction for executing a task payload and producing a result.
///
/// The executor owns the business logic of a task: it receives a payload `P`
/// and resolves to a result `T` or a failure. Executors are cloned once per
/// started task, so clones should be cheap (typically `Arc`-backed).
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use task_throttle::core::{AppResult, TaskExecutor};
///
/// #[derive(Clone)]
/// struct FetchExecutor;
///
/// #[async_trait]
/// impl TaskExecutor<String, usize> for FetchExecutor {
///     async fn execute(&self, url: String) -> AppResult<usize> {
///         let body = fetch(&url).await?;
///         Ok(body.len())
///     }
/// }
/// ```
#[async_trait]
pub trait TaskExecutor<P, T>: Send + Sync + Clone + 'static
where
    P: Send + 'static,
    T: Send + 'static,
{
    /// Execute a task payload and return the result.
    async fn execute(&self, payload: P) -> AppResult<T>;
}

/// Task source that pairs an executor with an iterator of payloads.
///
/// Each pull takes the next payload and boxes one execution of it; running
/// out of payloads is the exhaustion marker.
pub struct ExecutorSource<E, I> {
    executor: E,
    payloads: I,
}

impl<E, I> ExecutorSource<E, I> {
    /// Build a source from an executor and a payload sequence.
    pub fn new<P>(executor: E, payloads: impl IntoIterator<Item = P, IntoIter = I>) -> Self
    where
        I: Iterator<Item = P>,
    {
        Self {
            executor,
            payloads: payloads.into_iter(),
        }
    }
}

impl<P, T, E, I> TaskSource<T> for ExecutorSource<E, I>
where
    P: Send + 'static,
    T: Send + 'static,
    E: TaskExecutor<P, T>,
    I: Iterator<Item = P> + Send,
{
    fn pull(&mut self) -> AppResult<Pull<T>> {
        Ok(match self.payloads.next() {
            Some(payload) => {
                let executor = self.executor.clone();
                Pull::Task(Box::pin(async move { executor.execute(payload).await }))
            }
            None => Pull::Exhausted,
        })
    }
}
