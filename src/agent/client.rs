//! Orchestrator-Side Agent Client
//!
//! Holds the static agent address list and performs one-shot evaluate calls:
//! connect, one request frame, one response frame. Transport failures map to
//! `AgentUnavailable`; agent-side faults map to their dispatch counterparts.

use super::protocol::{read_frame, write_frame, EvaluateFault, EvaluateRequest, EvaluateResponse};
use crate::tasks::error::EvalError;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

/// The configured set of compute agents.
pub struct AgentPool {
    agents: Vec<SocketAddr>,
}

impl AgentPool {
    pub fn new(agents: Vec<SocketAddr>) -> Arc<Self> {
        Arc::new(Self { agents })
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Uniform random selection over the static list.
    fn pick(&self) -> Option<SocketAddr> {
        if self.agents.is_empty() {
            return None;
        }

        use rand::Rng;
        let idx = rand::thread_rng().gen_range(0..self.agents.len());
        Some(self.agents[idx])
    }

    /// Sends one expression to a randomly selected agent.
    ///
    /// No timeout is imposed: a hung agent hangs this call (and only the task
    /// behind it). There is no retry and no fallback to a second agent.
    pub async fn evaluate(
        &self,
        operation: &str,
        operand1: f64,
        operand2: f64,
    ) -> Result<f64, EvalError> {
        let agent = self
            .pick()
            .ok_or_else(|| EvalError::AgentUnavailable("no agents configured".to_string()))?;

        let mut stream = TcpStream::connect(agent)
            .await
            .map_err(|e| EvalError::AgentUnavailable(format!("{}: {}", agent, e)))?;

        let request = EvaluateRequest {
            operation: operation.to_string(),
            operand1,
            operand2,
        };

        write_frame(&mut stream, &request)
            .await
            .map_err(|e| EvalError::AgentUnavailable(format!("{}: {}", agent, e)))?;

        let response: EvaluateResponse = read_frame(&mut stream)
            .await
            .map_err(|e| EvalError::AgentUnavailable(format!("{}: {}", agent, e)))?
            .ok_or_else(|| {
                EvalError::AgentUnavailable(format!("{}: connection closed before response", agent))
            })?;

        match response.outcome {
            Ok(value) => Ok(value),
            Err(EvaluateFault::DivisionByZero) => Err(EvalError::DivisionByZero),
            Err(EvaluateFault::UnsupportedOperation { operation }) => {
                Err(EvalError::UnsupportedOperation(operation))
            }
        }
    }
}
