//! Core scheduling abstractions: the fill loop, producers, and completion sinks.

pub mod error;
pub mod executor;
pub mod scheduler;
pub mod sink;
pub mod source;
pub mod task;

pub use error::{AppResult, SchedulerError};
pub use executor::{ExecutorSource, TaskExecutor};
pub use scheduler::{Scheduler, Spawn};
pub use sink::{CompletionEvent, CompletionSink, NoopSink};
pub use source::{FnSource, IterSource, Pull, TaskSource};
pub use task::{TaskFuture, TaskId};
