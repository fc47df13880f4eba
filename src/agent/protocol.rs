//! Agent Wire Protocol
//!
//! Request/response structs exchanged between the orchestrator and a compute
//! agent, bincode-encoded and framed with a u32 big-endian length prefix (TCP
//! is a byte stream, so frames need explicit boundaries).

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound for a single frame. Requests and responses are tiny; anything
/// larger is a corrupt or hostile peer.
pub const MAX_FRAME_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub operation: String,
    pub operand1: f64,
    pub operand2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub outcome: Result<f64, EvaluateFault>,
}

/// Agent-side evaluation failures, carried back over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum EvaluateFault {
    #[error("division by zero")]
    DivisionByZero,
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },
}

/// Writes one length-prefixed bincode frame.
pub async fn write_frame<T, W>(writer: &mut W, message: &T) -> Result<()>
where
    T: Serialize,
    W: AsyncWrite + Unpin,
{
    let payload = bincode::serialize(message)?;
    if payload.len() > MAX_FRAME_BYTES {
        anyhow::bail!("frame too large: {} bytes", payload.len());
    }

    writer.write_all(&(payload.len() as u32).to_be_bytes()).await?;
    writer.write_all(&payload).await?;
    writer.flush().await?;

    Ok(())
}

/// Reads one length-prefixed bincode frame.
///
/// Returns `Ok(None)` on a clean EOF before the length prefix, which is how a
/// peer ends its session.
pub async fn read_frame<T, R>(reader: &mut R) -> Result<Option<T>>
where
    T: DeserializeOwned,
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_FRAME_BYTES {
        anyhow::bail!("frame too large: {} bytes", len);
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;

    Ok(Some(bincode::deserialize(&payload)?))
}
