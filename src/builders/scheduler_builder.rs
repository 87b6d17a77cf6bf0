//! Construction helpers for schedulers.

use crate::config::SchedulerConfig;
use crate::core::{NoopSink, Scheduler, SchedulerError};

/// Build a scheduler from validated configuration and collaborators.
///
/// # Errors
///
/// Returns [`SchedulerError::InvalidConfiguration`] when the configuration
/// fails validation; the source is never pulled in that case.
pub fn build_scheduler<T, S, K, R>(
    cfg: &SchedulerConfig,
    source: S,
    sink: K,
    spawner: R,
) -> Result<Scheduler<T, S, K, R>, SchedulerError> {
    cfg.validate()
        .map_err(SchedulerError::InvalidConfiguration)?;
    Ok(Scheduler::new(source, cfg.limit, sink, spawner))
}

/// Fluent builder for a scheduler.
///
/// Starts from the machine's available parallelism and a no-op sink; callers
/// override what they need.
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = SchedulerBuilder::new(TokioSpawner::current())
///     .with_limit(8)
///     .with_sink(MemorySink::new())
///     .build(source);
/// ```
pub struct SchedulerBuilder<K, R> {
    limit: usize,
    sink: K,
    spawner: R,
}

impl<R> SchedulerBuilder<NoopSink, R> {
    /// Start a builder around a spawner, with defaults for everything else.
    pub fn new(spawner: R) -> Self {
        Self {
            limit: num_cpus::get(),
            sink: NoopSink,
            spawner,
        }
    }
}

impl<K, R> SchedulerBuilder<K, R> {
    /// Set the concurrency ceiling.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Take the limit from a configuration snapshot.
    #[must_use]
    pub const fn from_config(mut self, cfg: &SchedulerConfig) -> Self {
        self.limit = cfg.limit;
        self
    }

    /// Replace the completion sink.
    #[must_use]
    pub fn with_sink<K2>(self, sink: K2) -> SchedulerBuilder<K2, R> {
        SchedulerBuilder {
            limit: self.limit,
            sink,
            spawner: self.spawner,
        }
    }

    /// Finish the builder around a task source.
    ///
    /// The limit is validated when the run starts, matching the scheduler's
    /// construction contract.
    pub fn build<T, S>(self, source: S) -> Scheduler<T, S, K, R> {
        Scheduler::new(source, self.limit, self.sink, self.spawner)
    }
}
