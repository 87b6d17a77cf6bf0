//! Configuration model for the scheduler.

pub mod scheduler;

pub use scheduler::SchedulerConfig;
