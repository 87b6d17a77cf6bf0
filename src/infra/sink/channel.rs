//! Channel-backed completion sink.

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};

use crate::core::{CompletionEvent, CompletionSink, SchedulerError, TaskId};

/// Sink that forwards completion events over an unbounded channel.
///
/// Lets observers consume notifications as a stream while the run is still in
/// progress. Events emitted after the receiver is dropped are discarded.
pub struct ChannelSink<T> {
    events: UnboundedSender<CompletionEvent<T>>,
}

impl<T> ChannelSink<T> {
    /// Create a sink and the receiving half observers consume.
    pub fn unbounded() -> (Self, UnboundedReceiver<CompletionEvent<T>>) {
        let (events, rx) = unbounded();
        (Self { events }, rx)
    }
}

impl<T> CompletionSink<T> for ChannelSink<T>
where
    T: Send,
{
    fn task_fulfilled(&self, task: TaskId, result: T) {
        if self
            .events
            .unbounded_send(CompletionEvent::Fulfilled { task, result })
            .is_err()
        {
            tracing::debug!("completion receiver dropped; fulfilled event for {} discarded", task);
        }
    }

    fn task_rejected(&self, task: TaskId, error: SchedulerError) {
        if self
            .events
            .unbounded_send(CompletionEvent::Rejected { task, error })
            .is_err()
        {
            tracing::debug!("completion receiver dropped; rejected event for {} discarded", task);
        }
    }
}
