//! Tests for the producer adapters behind the pull contract.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use task_throttle::core::{
    AppResult, ExecutorSource, FnSource, IterSource, Pull, TaskExecutor, TaskFuture, TaskSource,
};
use task_throttle::infra::MemorySink;
use task_throttle::core::Scheduler;
use task_throttle::runtime::TokioSpawner;

fn ready(value: u32) -> TaskFuture<u32> {
    Box::pin(async move { Ok(value) })
}

#[tokio::test]
async fn fn_source_classifies_task_and_exhaustion() {
    let mut remaining = 2u32;
    let mut source = FnSource::new(move || -> AppResult<Option<TaskFuture<u32>>> {
        if remaining == 0 {
            return Ok(None);
        }
        remaining -= 1;
        Ok(Some(ready(remaining)))
    });

    let first: Pull<u32> = source.pull().unwrap();
    assert!(matches!(first, Pull::Task(_)));
    assert!(matches!(source.pull().unwrap(), Pull::Task(_)));
    assert!(matches!(source.pull().unwrap(), Pull::Exhausted));
}

#[tokio::test]
async fn fn_source_surfaces_synchronous_failure() {
    let mut source = FnSource::new(|| -> AppResult<Option<TaskFuture<u32>>> {
        Err(anyhow::anyhow!("pull blew up"))
    });

    let err = TaskSource::<u32>::pull(&mut source).unwrap_err();
    assert!(err.to_string().contains("pull blew up"));
}

#[tokio::test]
async fn iter_source_advances_one_step_per_pull() {
    let mut source = IterSource::new(vec![ready(1), ready(2)]);

    match source.pull().unwrap() {
        Pull::Task(task) => assert_eq!(task.await.unwrap(), 1),
        Pull::Exhausted => panic!("expected a task"),
    }
    match source.pull().unwrap() {
        Pull::Task(task) => assert_eq!(task.await.unwrap(), 2),
        Pull::Exhausted => panic!("expected a task"),
    }
    assert!(matches!(source.pull().unwrap(), Pull::Exhausted));
    // The iterator's completion is sticky.
    assert!(matches!(source.pull().unwrap(), Pull::Exhausted));
}

#[derive(Clone)]
struct DoublingExecutor {
    executed: Arc<AtomicU32>,
}

#[async_trait]
impl TaskExecutor<u32, u32> for DoublingExecutor {
    async fn execute(&self, payload: u32) -> AppResult<u32> {
        self.executed.fetch_add(1, Ordering::SeqCst);
        if payload == 13 {
            anyhow::bail!("unlucky payload");
        }
        Ok(payload * 2)
    }
}

#[tokio::test]
async fn executor_source_runs_payloads_through_executor() {
    let executed = Arc::new(AtomicU32::new(0));
    let executor = DoublingExecutor {
        executed: Arc::clone(&executed),
    };
    let mut source = ExecutorSource::new(executor, vec![3u32, 4, 5]);

    match source.pull().unwrap() {
        Pull::Task(task) => assert_eq!(task.await.unwrap(), 6),
        Pull::Exhausted => panic!("expected a task"),
    }
    match source.pull().unwrap() {
        Pull::Task(task) => assert_eq!(task.await.unwrap(), 8),
        Pull::Exhausted => panic!("expected a task"),
    }
    match source.pull().unwrap() {
        Pull::Task(task) => assert_eq!(task.await.unwrap(), 10),
        Pull::Exhausted => panic!("expected a task"),
    }
    assert!(matches!(source.pull().unwrap(), Pull::Exhausted));
    assert_eq!(executed.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn executor_source_drives_a_full_run() {
    let executor = DoublingExecutor {
        executed: Arc::new(AtomicU32::new(0)),
    };
    let source = ExecutorSource::new(executor, vec![1u32, 2, 13, 4]);

    let sink = Arc::new(MemorySink::new());
    let scheduler = Scheduler::new(source, 2, Arc::clone(&sink), TokioSpawner::current());

    // Payload 13 rejects; everything pulled before the rejection drains.
    assert!(scheduler.run().await.is_err());
    assert_eq!(sink.rejected_count(), 1);
    assert!(sink.fulfilled_count() >= 2);
}
