//! HTTP API Contracts
//!
//! Request/response DTOs for the public endpoints. The `Task` and
//! `ExpressionRecord` types serialize directly as response bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddParams {
    pub expression: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpressionParams {
    pub id: String,
}

/// Body of `POST /receiveResult`: a poll worker pushing a result back.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResultRequest {
    pub task_id: String,
    pub result: f64,
}

/// One entry of `GET /operations`: a supported operation and its nominal cost.
#[derive(Debug, Serialize)]
pub struct OperationInfo {
    pub name: &'static str,
    pub time: u32,
}
