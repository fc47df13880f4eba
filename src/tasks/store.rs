//! Concurrent Task State
//!
//! Process-wide map of task id to in-flight task, shared by the HTTP handlers,
//! the detached per-submission evaluation tasks, and external poll workers.
//! Per-key mutation is atomic; reads proceed concurrently.

use super::types::{Task, TaskId};

use dashmap::DashMap;
use std::sync::Arc;

/// Result of a `set_result` attempt. Carries a snapshot of the stored task so
/// callers can act on it without touching the map again.
#[derive(Debug, Clone)]
pub enum SetOutcome {
    /// The task was pending; the result is now recorded and the task terminal.
    Updated(Task),
    /// The task was already terminal; nothing changed.
    AlreadyReady(Task),
}

/// Owner of all in-flight task state.
pub struct TaskStore {
    tasks: DashMap<TaskId, Task>,
}

impl TaskStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tasks: DashMap::new(),
        })
    }

    /// Inserts a task, replacing any previous entry with the same id.
    pub fn put(&self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    /// Returns a snapshot of the task, if known.
    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.tasks.get(id).map(|entry| entry.value().clone())
    }

    /// Records a terminal result for a task.
    ///
    /// This is a compare-and-set on the `ready` flag: if the task is already
    /// terminal the stored result is left untouched and `AlreadyReady` is
    /// returned. Both completion paths (direct agent dispatch and the poll
    /// gateway) funnel through here, so whichever writer loses the race is
    /// provably a no-op.
    ///
    /// Returns `None` if the id is unknown.
    pub fn set_result(&self, id: &TaskId, value: f64) -> Option<SetOutcome> {
        let mut entry = self.tasks.get_mut(id)?;

        if entry.ready {
            return Some(SetOutcome::AlreadyReady(entry.value().clone()));
        }

        entry.result = value;
        entry.ready = true;

        Some(SetOutcome::Updated(entry.value().clone()))
    }

    /// Returns *some* task with `ready = false`, or `None` if every task is
    /// terminal.
    ///
    /// Iteration order over the map is unspecified, so no ordering guarantee
    /// exists across concurrent insertions. This weak contract is part of the
    /// poll protocol: workers get an arbitrary pending task, not the oldest.
    pub fn find_first_pending(&self) -> Option<Task> {
        self.tasks
            .iter()
            .find(|entry| !entry.value().ready)
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
