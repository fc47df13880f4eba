//! Task Dispatcher
//!
//! Owns task creation and the two completion paths. `submit` returns to its
//! caller before evaluation completes; the evaluation runs as a detached tokio
//! task with no timeout and no cancellation, so a hung agent hangs only that
//! task. Nothing is retried: every failure is terminal for its task and is
//! surfaced only as a durable `error` status plus a log line.

use super::error::EvalError;
use super::store::{SetOutcome, TaskStore};
use super::types::{Task, TaskId};
use crate::agent::client::AgentPool;
use crate::storage::sqlite::{ExpressionStore, RecordStatus};

use std::sync::Arc;

/// The only component that bridges the in-memory task state and the durable
/// record store. Cloning is cheap; every field is shared.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<TaskStore>,
    records: Arc<ExpressionStore>,
    agents: Arc<AgentPool>,
}

impl Dispatcher {
    pub fn new(
        store: Arc<TaskStore>,
        records: Arc<ExpressionStore>,
        agents: Arc<AgentPool>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store,
            records,
            agents,
        })
    }

    /// Creates a task for the expression and returns its id immediately.
    ///
    /// The `waiting` record is persisted before the task becomes visible in
    /// the store, so a poll worker can never claim a task whose durable
    /// record does not exist yet. If the durable write fails the submission
    /// fails, no task is created, and no background work is started.
    pub async fn submit(&self, expression: &str) -> Result<TaskId, EvalError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let task = Task::new(TaskId::new(), expression.to_string());
        let task_id = task.id.clone();

        self.records
            .save(&task_id.0, expression, RecordStatus::Waiting, 0.0)
            .await?;
        self.store.put(task.clone());

        tracing::info!("Submitted task {} ({})", task_id.0, expression);

        // Detached: the caller gets the id back while this runs.
        let dispatcher = self.clone();
        tokio::spawn(async move {
            dispatcher.evaluate_via_agent(task).await;
        });

        Ok(task_id)
    }

    /// Direct dispatch path: parse, pick a random agent, evaluate.
    ///
    /// Any failure (malformed expression, unreachable agent, agent-side fault)
    /// drives the task to its terminal failed state with result 0 and a
    /// durable `error` status.
    pub async fn evaluate_via_agent(&self, task: Task) {
        match self.run_evaluation(&task.expression).await {
            Ok(value) => {
                tracing::info!("Task {} completed with result {}", task.id.0, value);
                self.finish(&task.id, value, RecordStatus::Completed).await;
            }
            Err(e) => {
                tracing::warn!("Task {} failed: {}", task.id.0, e);
                self.finish(&task.id, 0.0, RecordStatus::Error).await;
            }
        }
    }

    async fn run_evaluation(&self, expression: &str) -> Result<f64, EvalError> {
        let (operation, operand1, operand2) = parse_expression(expression)?;
        self.agents.evaluate(&operation, operand1, operand2).await
    }

    /// Pull-worker path: record a result computed by an external worker.
    ///
    /// Uncoordinated with `evaluate_via_agent`; if the task is already
    /// terminal the report is a no-op success and the stored result stands.
    pub async fn report_result(&self, task_id: &TaskId, value: f64) -> Result<(), EvalError> {
        match self.store.set_result(task_id, value) {
            None => Err(EvalError::NotFound(task_id.0.clone())),
            Some(SetOutcome::AlreadyReady(task)) => {
                tracing::debug!(
                    "Task {} already terminal with result {}, ignoring reported {}",
                    task_id.0,
                    task.result,
                    value
                );
                Ok(())
            }
            Some(SetOutcome::Updated(_)) => {
                tracing::info!(
                    "Task {} completed via poll worker with result {}",
                    task_id.0,
                    value
                );
                if let Err(e) = self
                    .records
                    .update_result(&task_id.0, value, RecordStatus::Completed)
                    .await
                {
                    tracing::error!("Failed to persist result for task {}: {}", task_id.0, e);
                }
                Ok(())
            }
        }
    }

    /// Terminal transition shared by both outcomes of the direct path.
    ///
    /// The map guard is released inside `set_result`, so the durable write
    /// never blocks concurrent task lookups. A persistence failure here is
    /// logged and does not roll back the in-memory completion. The durable
    /// write is skipped entirely when another writer already finished the
    /// task.
    async fn finish(&self, task_id: &TaskId, value: f64, status: RecordStatus) {
        match self.store.set_result(task_id, value) {
            None => {
                tracing::warn!("Task {} vanished before completion", task_id.0);
            }
            Some(SetOutcome::AlreadyReady(task)) => {
                tracing::debug!(
                    "Task {} already terminal with result {}",
                    task_id.0,
                    task.result
                );
            }
            Some(SetOutcome::Updated(_)) => {
                if let Err(e) = self.records.update_result(&task_id.0, value, status).await {
                    tracing::error!("Failed to persist result for task {}: {}", task_id.0, e);
                }
            }
        }
    }
}

/// Parses the fixed `operation operand1 operand2` shape.
///
/// Trailing tokens are ignored. Division by zero is rejected here, before any
/// agent is contacted, mirroring the agent-side check.
pub fn parse_expression(expression: &str) -> Result<(String, f64, f64), EvalError> {
    let mut parts = expression.split_whitespace();

    let operation = parts
        .next()
        .ok_or_else(|| EvalError::InvalidOperand("missing operation".to_string()))?;
    let operand1 = parse_operand(parts.next(), "operand1")?;
    let operand2 = parse_operand(parts.next(), "operand2")?;

    if !matches!(operation, "+" | "-" | "*" | "/") {
        return Err(EvalError::UnsupportedOperation(operation.to_string()));
    }
    if operation == "/" && operand2 == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    Ok((operation.to_string(), operand1, operand2))
}

fn parse_operand(raw: Option<&str>, which: &str) -> Result<f64, EvalError> {
    let raw = raw.ok_or_else(|| EvalError::InvalidOperand(format!("missing {}", which)))?;
    raw.parse::<f64>()
        .map_err(|_| EvalError::InvalidOperand(format!("{}: {}", which, raw)))
}
