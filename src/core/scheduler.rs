//! The scheduler: fill loop, in-flight tracking, and outcome aggregation.

use std::collections::HashSet;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::channel::mpsc::{unbounded, UnboundedSender};
use futures::StreamExt;

use crate::core::error::SchedulerError;
use crate::core::sink::CompletionSink;
use crate::core::source::{Pull, TaskSource};
use crate::core::task::{Settlement, TaskId};

/// Abstraction for spawning task execution on a runtime.
pub trait Spawn {
    /// Spawn an async task that returns a future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Mutable state of one run, owned exclusively by the `run` future.
///
/// All transitions (active-set mutation, first-error latch, fill re-entry)
/// happen inside the single loop that owns this value, so the invariant
/// `0 <= |active| <= limit` holds without any locking.
struct RunState<T> {
    /// In-flight task handles, unordered.
    active: HashSet<TaskId>,
    /// Set once the producer has signaled no more work; monotonic.
    exhausted: bool,
    /// First-writer-wins failure latch across all settlements.
    first_error: Option<SchedulerError>,
    /// Next identifier to allocate; ids are pull-ordered.
    next_task: TaskId,
    /// Settlement reporting channel handed to every spawned task.
    settlements: UnboundedSender<Settlement<T>>,
}

/// Bounded-concurrency scheduler over a lazily-pulled task source.
///
/// A scheduler is created once per batch of work, used for exactly one run,
/// and discarded; [`Scheduler::run`] consumes it.
pub struct Scheduler<T, S, K, R> {
    source: S,
    limit: usize,
    sink: K,
    spawner: R,
    _result_marker: PhantomData<fn() -> T>,
}

impl<T, S, K, R> Scheduler<T, S, K, R> {
    /// Create a scheduler from a task source, concurrency limit, completion
    /// sink, and spawner.
    ///
    /// The limit is validated when the run starts, not here, so an invalid
    /// limit surfaces through the run's rejection path.
    pub const fn new(source: S, limit: usize, sink: K, spawner: R) -> Self {
        Self {
            source,
            limit,
            sink,
            spawner,
            _result_marker: PhantomData,
        }
    }

    /// The configured concurrency ceiling.
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl<T, S, K, R> Scheduler<T, S, K, R>
where
    T: Send + 'static,
    S: TaskSource<T>,
    K: CompletionSink<T>,
    R: Spawn,
{
    /// Drive the producer to exhaustion with at most `limit` tasks in flight.
    ///
    /// The returned future is the run's outcome signal: it resolves `Ok(())`
    /// only once the producer is exhausted, every started task has settled,
    /// and no failure occurred; otherwise it resolves with the first failure
    /// observed. It settles exactly once. In-flight tasks keep running on
    /// their spawner if the future is dropped, but their settlements are no
    /// longer observed.
    pub async fn run(mut self) -> Result<(), SchedulerError> {
        if self.limit < 1 {
            let error = SchedulerError::InvalidConfiguration(
                "concurrency limit must be at least 1".into(),
            );
            tracing::error!("{}", error);
            return Err(error);
        }

        let (settlements, mut settled) = unbounded();
        let mut state = RunState {
            active: HashSet::with_capacity(self.limit),
            exhausted: false,
            first_error: None,
            next_task: 0,
            settlements,
        };

        self.fill(&mut state);

        // Covers the zero-task run and a producer that fails before anything
        // starts: with limit >= 1 the fill loop only stops with an empty
        // active set once exhaustion or a failure is recorded.
        if state.active.is_empty() {
            return state.first_error.map_or(Ok(()), Err);
        }

        while let Some(settlement) = settled.next().await {
            self.on_settled(settlement, &mut state);
            if state.active.is_empty()
                && (state.exhausted || state.first_error.is_some())
            {
                break;
            }
        }

        state.first_error.map_or(Ok(()), Err)
    }

    /// Pull tasks until the ceiling is reached, the producer is exhausted, or
    /// a failure is latched.
    fn fill(&mut self, state: &mut RunState<T>) {
        while state.active.len() < self.limit
            && !state.exhausted
            && state.first_error.is_none()
        {
            match self.source.pull() {
                Ok(Pull::Task(task)) => {
                    let id = state.next_task;
                    state.next_task += 1;
                    state.active.insert(id);
                    tracing::debug!("task {} started ({} in flight)", id, state.active.len());

                    let settlements = state.settlements.clone();
                    self.spawner.spawn(async move {
                        let outcome = task.await;
                        // Fails only if the run future was dropped; nothing
                        // is listening for the settlement in that case.
                        let _ = settlements.unbounded_send(Settlement { task: id, outcome });
                    });
                }
                Ok(Pull::Exhausted) => {
                    tracing::debug!("producer exhausted after {} pulls", state.next_task);
                    state.exhausted = true;
                }
                Err(error) => {
                    // A failed pull consumes an id so its rejection is
                    // observable through the sink like any other.
                    let id = state.next_task;
                    state.next_task += 1;
                    let error = SchedulerError::Producer {
                        task: id,
                        error: Arc::new(error),
                    };
                    tracing::warn!("{}", error);
                    self.sink.task_rejected(id, error.clone());
                    if state.first_error.is_none() {
                        state.first_error = Some(error);
                    }
                }
            }
        }
    }

    /// Settlement hook: free the slot, notify, latch, refill, and leave the
    /// terminal check to the run loop.
    fn on_settled(&mut self, settlement: Settlement<T>, state: &mut RunState<T>) {
        // Freed first, so the slot is released no matter what follows.
        state.active.remove(&settlement.task);

        match settlement.outcome {
            Ok(result) => {
                tracing::debug!(
                    "task {} fulfilled ({} in flight)",
                    settlement.task,
                    state.active.len()
                );
                self.sink.task_fulfilled(settlement.task, result);
            }
            Err(error) => {
                let error = SchedulerError::Task {
                    task: settlement.task,
                    error: Arc::new(error),
                };
                tracing::warn!("{}", error);
                self.sink.task_rejected(settlement.task, error.clone());
                // Only the first rejection determines the run's outcome;
                // later ones remain visible through the sink alone.
                if state.first_error.is_none() {
                    state.first_error = Some(error);
                }
            }
        }

        // Once an error is latched the run drains: outstanding tasks settle
        // naturally but no new work is started.
        if state.first_error.is_none() {
            self.fill(state);
        }
    }
}
