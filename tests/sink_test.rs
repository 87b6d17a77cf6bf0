//! Tests for the completion sink adapters.

use std::sync::Arc;

use futures::StreamExt;
use task_throttle::core::{
    CompletionEvent, CompletionSink, IterSource, NoopSink, Scheduler, SchedulerError, TaskFuture,
};
use task_throttle::infra::{ChannelSink, MemorySink};
use task_throttle::runtime::TokioSpawner;

fn ready(value: u32) -> TaskFuture<u32> {
    Box::pin(async move { Ok(value) })
}

fn failing(msg: &'static str) -> TaskFuture<u32> {
    Box::pin(async move { Err(anyhow::anyhow!(msg)) })
}

#[tokio::test]
async fn memory_sink_records_both_kinds_in_order() {
    let sink = MemorySink::new();
    sink.task_fulfilled(0, 10u32);
    sink.task_rejected(
        1,
        SchedulerError::Task {
            task: 1,
            error: Arc::new(anyhow::anyhow!("nope")),
        },
    );

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.fulfilled_count(), 1);
    assert_eq!(sink.rejected_count(), 1);

    let events = sink.events();
    assert!(matches!(
        events[0],
        CompletionEvent::Fulfilled { task: 0, result: 10 }
    ));
    assert!(matches!(events[1], CompletionEvent::Rejected { task: 1, .. }));
}

#[tokio::test]
async fn channel_sink_streams_events_to_observers() {
    let (sink, rx) = ChannelSink::unbounded();
    let tasks = vec![ready(1), ready(2), failing("bad"), ready(4)];
    let scheduler = Scheduler::new(IterSource::new(tasks), 4, sink, TokioSpawner::current());

    // The sender half drops with the scheduler when the run settles, ending
    // the event stream.
    let outcome = scheduler.run().await;
    assert!(outcome.is_err());

    let events: Vec<CompletionEvent<u32>> = rx.collect().await;
    assert_eq!(events.len(), 4);
    let rejected = events
        .iter()
        .filter(|e| matches!(e, CompletionEvent::Rejected { .. }))
        .count();
    assert_eq!(rejected, 1);
}

#[tokio::test]
async fn channel_sink_discards_events_after_receiver_drop() {
    let (sink, rx) = ChannelSink::unbounded();
    drop(rx);
    // Must not panic or error the run.
    sink.task_fulfilled(0, 1u32);
}

#[tokio::test]
async fn noop_sink_accepts_everything() {
    let tasks = vec![ready(1), failing("ignored")];
    let scheduler = Scheduler::new(IterSource::new(tasks), 2, NoopSink, TokioSpawner::current());
    assert!(scheduler.run().await.is_err());
}
