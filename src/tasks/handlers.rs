//! HTTP Surface
//!
//! Client-facing endpoints (`/add`, `/expression`, `/list`, `/operations`)
//! plus the poll gateway (`/getTask`, `/receiveResult`) external workers use
//! to pull pending work and push results back.

use super::dispatcher::Dispatcher;
use super::error::EvalError;
use super::protocol::{AddParams, ExpressionParams, OperationInfo, SubmitResultRequest};
use super::store::TaskStore;
use super::types::TaskId;
use crate::storage::sqlite::{ExpressionRecord, ExpressionStore};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

/// `GET /add?expression=<op> <a> <b>` — body is the generated task id.
pub async fn handle_add(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
    Query(params): Query<AddParams>,
) -> (StatusCode, String) {
    let expression = params.expression.unwrap_or_default();

    match dispatcher.submit(&expression).await {
        Ok(task_id) => (StatusCode::OK, task_id.0),
        Err(EvalError::EmptyExpression) => (
            StatusCode::BAD_REQUEST,
            "Empty expression is not allowed".to_string(),
        ),
        Err(e) => {
            tracing::error!("Failed to submit expression: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to save expression: {}", e),
            )
        }
    }
}

/// `GET /expression?id=<id>` — the durable record for one submission.
pub async fn handle_get_expression(
    Extension(records): Extension<Arc<ExpressionStore>>,
    Query(params): Query<ExpressionParams>,
) -> (StatusCode, Json<Option<ExpressionRecord>>) {
    match records.get(&params.id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(Some(record))),
        Ok(None) => (StatusCode::NOT_FOUND, Json(None)),
        Err(e) => {
            tracing::error!("Failed to read expression {}: {}", params.id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(None))
        }
    }
}

/// `GET /list` — every durable record.
pub async fn handle_list(
    Extension(records): Extension<Arc<ExpressionStore>>,
) -> (StatusCode, Json<Vec<ExpressionRecord>>) {
    match records.list().await {
        Ok(list) => (StatusCode::OK, Json(list)),
        Err(e) => {
            tracing::error!("Failed to list expressions: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::new()))
        }
    }
}

/// `GET /operations` — static catalog of supported operations.
pub async fn handle_operations() -> Json<Vec<OperationInfo>> {
    Json(vec![
        OperationInfo {
            name: "addition",
            time: 5,
        },
        OperationInfo {
            name: "subtraction",
            time: 5,
        },
        OperationInfo {
            name: "multiplication",
            time: 10,
        },
        OperationInfo {
            name: "division",
            time: 10,
        },
    ])
}

/// `GET /getTask` — hand some pending task to an external poll worker.
///
/// No claim is taken: two concurrent pollers can receive the same task. The
/// compare-and-set in the store keeps the resulting double completion benign,
/// with the second writer a no-op.
pub async fn handle_get_task(Extension(store): Extension<Arc<TaskStore>>) -> Response {
    match store.find_first_pending() {
        Some(task) => (StatusCode::OK, Json(task)).into_response(),
        None => (StatusCode::NOT_FOUND, "No tasks available").into_response(),
    }
}

/// `POST /receiveResult` — a poll worker pushing a computed result back.
pub async fn handle_receive_result(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
    body: Result<Json<SubmitResultRequest>, JsonRejection>,
) -> (StatusCode, String) {
    let Json(req) = match body {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                format!("Failed to decode result: {}", e),
            );
        }
    };

    match dispatcher
        .report_result(&TaskId(req.task_id), req.result)
        .await
    {
        Ok(()) => (StatusCode::OK, String::new()),
        Err(EvalError::NotFound(id)) => {
            (StatusCode::NOT_FOUND, format!("Task not found: {}", id))
        }
        Err(e) => {
            tracing::error!("Failed to apply reported result: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
