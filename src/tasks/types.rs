use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Wrapper around a UUID string so concurrent submissions can never collide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaskId(pub String);

impl TaskId {
    /// Generates a new random UUID v4-based TaskId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory unit of work tracking one submitted expression until it reaches
/// a terminal result.
///
/// `result` is meaningful only once `ready` is true. `ready` is monotonic:
/// the store never transitions a task back to pending, and the result is
/// write-once after readiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Original `op a b` input, immutable after creation.
    pub expression: String,
    pub result: f64,
    pub ready: bool,
}

impl Task {
    /// Creates a pending task with no result yet.
    pub fn new(id: TaskId, expression: String) -> Self {
        Self {
            id,
            expression,
            result: 0.0,
            ready: false,
        }
    }
}
