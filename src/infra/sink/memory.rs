//! In-memory completion sink.

use parking_lot::Mutex;

use crate::core::{CompletionEvent, CompletionSink, SchedulerError, TaskId};

/// Recording sink for development and testing.
///
/// Events are appended in emission order; since the scheduler emits in
/// settlement order, the stored sequence reflects wall-clock completion
/// order. Share it with the scheduler through an `Arc` to inspect events
/// after the run settles.
#[derive(Default)]
pub struct MemorySink<T> {
    events: Mutex<Vec<CompletionEvent<T>>>,
}

impl<T> MemorySink<T> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Number of recorded fulfillments.
    pub fn fulfilled_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, CompletionEvent::Fulfilled { .. }))
            .count()
    }

    /// Number of recorded rejections.
    pub fn rejected_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, CompletionEvent::Rejected { .. }))
            .count()
    }

    /// Snapshot of recorded events in emission order.
    pub fn events(&self) -> Vec<CompletionEvent<T>>
    where
        T: Clone,
    {
        self.events.lock().clone()
    }
}

impl<T> CompletionSink<T> for MemorySink<T>
where
    T: Send,
{
    fn task_fulfilled(&self, task: TaskId, result: T) {
        self.events
            .lock()
            .push(CompletionEvent::Fulfilled { task, result });
    }

    fn task_rejected(&self, task: TaskId, error: SchedulerError) {
        self.events
            .lock()
            .push(CompletionEvent::Rejected { task, error });
    }
}
