//! Compute Agent Module
//!
//! The remote arithmetic layer. Agents are standalone processes exposing a
//! single `Evaluate(operation, operand1, operand2)` call over a binary TCP
//! channel; the orchestrator holds a static pool of agent addresses and picks
//! one uniformly at random per evaluation. No health awareness, no retry, no
//! fallback to a second agent.
//!
//! ## Submodules
//! - **`protocol`**: bincode frame format and the request/response types.
//! - **`service`**: agent-side evaluation and the TCP accept loop.
//! - **`client`**: orchestrator-side agent pool and one-shot RPC client.

pub mod client;
pub mod protocol;
pub mod service;
