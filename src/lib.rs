//! # Task Throttle
//!
//! A bounded-concurrency scheduler for lazily-produced streams of
//! asynchronous tasks.
//!
//! The scheduler drives an unbounded sequence of tasks to completion while
//! guaranteeing that at most `limit` tasks are in flight at any instant.
//! Tasks are pulled from a producer just-in-time: a slot must free up before
//! the producer is asked for more work, which bounds memory and external
//! resource usage to `O(limit)` in-flight operations regardless of how many
//! tasks the producer will eventually yield.
//!
//! ## Core Behavior
//!
//! - **Fill loop**: up to `limit` tasks are pulled and started; every
//!   settlement frees a slot and triggers another pull.
//! - **Exhaustion detection**: the producer signals "no more work" through its
//!   pull contract; the scheduler never invokes it again afterward.
//! - **Outcome aggregation**: the run fulfills once the producer is exhausted
//!   and every started task has settled. The first failure (task rejection or
//!   synchronous producer failure) becomes the run's error; later failures are
//!   still observable through notifications but never overwrite it. Once a
//!   failure is latched no new tasks are started, while in-flight tasks drain
//!   to their natural settlement.
//! - **Notifications**: every settlement emits a `fulfilled` or `rejected`
//!   event through a pluggable [`core::CompletionSink`], in wall-clock
//!   settlement order.
//!
//! ## Example
//!
//! ```rust,ignore
//! use task_throttle::builders::SchedulerBuilder;
//! use task_throttle::core::{IterSource, TaskFuture};
//! use task_throttle::infra::MemorySink;
//! use task_throttle::runtime::TokioSpawner;
//!
//! let tasks: Vec<TaskFuture<u32>> = (0..100)
//!     .map(|i| Box::pin(async move { Ok(i * 2) }) as TaskFuture<u32>)
//!     .collect();
//!
//! let scheduler = SchedulerBuilder::new(TokioSpawner::current())
//!     .with_limit(8)
//!     .with_sink(MemorySink::new())
//!     .build(IterSource::new(tasks));
//!
//! scheduler.run().await?;
//! ```
//!
//! Producers come in two shapes, both normalized behind one pull contract:
//! a plain callback ([`core::FnSource`]) and a restartable sequence
//! ([`core::IterSource`]). See [`core::ExecutorSource`] for pairing a payload
//! iterator with an async executor.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: errors, producers, sinks, and the Scheduler.
pub mod core;
/// Configuration model for the scheduler.
pub mod config;
/// Builders to construct a scheduler from configuration.
pub mod builders;
/// Infrastructure adapters for completion-event delivery.
pub mod infra;
/// Runtime adapters for spawning scheduler tasks.
pub mod runtime;
/// Shared utilities.
pub mod util;
