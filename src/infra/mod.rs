//! Infrastructure adapters for completion-event delivery.

pub mod sink;

pub use sink::{ChannelSink, MemorySink};
