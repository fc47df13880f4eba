//! Agent-Side Evaluation Service
//!
//! The accept loop run by the `agent` binary: one spawned handler task per
//! connection, each serving evaluate frames until the peer closes the stream.

use super::protocol::{read_frame, write_frame, EvaluateFault, EvaluateRequest, EvaluateResponse};

use anyhow::Result;
use tokio::net::{TcpListener, TcpStream};

/// Performs one arithmetic operation.
pub fn apply(operation: &str, operand1: f64, operand2: f64) -> Result<f64, EvaluateFault> {
    match operation {
        "+" => Ok(operand1 + operand2),
        "-" => Ok(operand1 - operand2),
        "*" => Ok(operand1 * operand2),
        "/" => {
            if operand2 == 0.0 {
                return Err(EvaluateFault::DivisionByZero);
            }
            Ok(operand1 / operand2)
        }
        other => Err(EvaluateFault::UnsupportedOperation {
            operation: other.to_string(),
        }),
    }
}

/// Accepts connections forever, serving each on its own task.
pub async fn serve(listener: TcpListener) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        tracing::debug!("Accepted connection from {}", peer);

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream).await {
                tracing::warn!("Connection from {} ended with error: {}", peer, e);
            }
        });
    }
}

async fn handle_connection(mut stream: TcpStream) -> Result<()> {
    loop {
        let request: EvaluateRequest = match read_frame(&mut stream).await? {
            Some(request) => request,
            None => return Ok(()), // peer closed the session
        };

        let outcome = apply(&request.operation, request.operand1, request.operand2);
        match &outcome {
            Ok(value) => tracing::info!(
                "Evaluated {} {} {} = {}",
                request.operation,
                request.operand1,
                request.operand2,
                value
            ),
            Err(fault) => tracing::warn!(
                "Rejected {} {} {}: {}",
                request.operation,
                request.operand1,
                request.operand2,
                fault
            ),
        }

        write_frame(&mut stream, &EvaluateResponse { outcome }).await?;
    }
}
