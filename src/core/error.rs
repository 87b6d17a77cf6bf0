//! Error types for scheduler operations.

use std::sync::Arc;

use thiserror::Error;

use crate::core::task::TaskId;

/// Errors produced by scheduler components.
///
/// Variants carrying an underlying cause hold it behind an `Arc` so a single
/// failure can be both emitted as a completion notification and latched as
/// the run's terminal outcome without cloning the cause itself.
#[derive(Debug, Clone, Error)]
pub enum SchedulerError {
    /// Malformed concurrency limit or invalid configuration. No tasks are
    /// ever produced when this is raised.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The producer failed synchronously during a pull.
    #[error("producer pull for task {task} failed: {error}")]
    Producer {
        /// Identifier consumed by the failed pull attempt.
        task: TaskId,
        /// The producer's failure.
        error: Arc<anyhow::Error>,
    },
    /// An in-flight task rejected.
    #[error("task {task} failed: {error}")]
    Task {
        /// Identifier of the rejected task.
        task: TaskId,
        /// The task's failure.
        error: Arc<anyhow::Error>,
    },
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
