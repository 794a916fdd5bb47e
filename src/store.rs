//! State container with a FIFO task queue.
//!
//! `dispatch` runs the reducer and queues whatever tasks it emits.
//! `run_until_idle` drains the queue in enqueue order, feeding each
//! resolved task back through `dispatch`.

use std::collections::VecDeque;

use tracing::debug;

use crate::mvi::Reducer;
use crate::runner::TaskRunner;
use crate::state::{AppIntent, AppReducer, AppState};
use crate::task::Task;

#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    queue: VecDeque<Task>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn dispatch(&mut self, intent: impl Into<AppIntent>) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = AppReducer::reduce(state, intent.into()).into_parts();
        self.state = state;
        if !effects.is_empty() {
            debug!(count = effects.len(), "queued tasks");
        }
        self.queue.extend(effects);
    }

    /// Remove and return queued tasks without running them.
    pub fn drain_tasks(&mut self) -> Vec<Task> {
        self.queue.drain(..).collect()
    }

    /// Run queued tasks one at a time until none are left.
    ///
    /// Returns the number of tasks executed, including tasks queued by
    /// resolutions along the way.
    pub async fn run_until_idle(&mut self, runner: &TaskRunner) -> usize {
        let mut executed = 0;
        while let Some(task) = self.queue.pop_front() {
            executed += 1;
            if let Some(intent) = runner.execute(task).await {
                self.dispatch(intent);
            }
        }
        executed
    }
}
