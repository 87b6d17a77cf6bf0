//! Completion sink adapters.

pub mod channel;
pub mod memory;

pub use channel::ChannelSink;
pub use memory::MemorySink;
