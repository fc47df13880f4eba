use thiserror::Error;

/// Everything that can go wrong between submission and a terminal task state.
///
/// Only `EmptyExpression` and `Persistence` are ever surfaced synchronously to
/// the submitting client; every other variant occurs on the asynchronous
/// evaluation path and is recorded as a durable `error` status instead.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("empty expression is not allowed")]
    EmptyExpression,

    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("task not found: {0}")]
    NotFound(String),

    #[error("agent unavailable: {0}")]
    AgentUnavailable(String),

    #[error("persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}
