//! Distributed Arithmetic Orchestrator Library
//!
//! This library crate defines the core modules shared by the two binaries
//! (`orchestrator` in `main.rs`, `agent` in `bin/agent.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`tasks`**: The dispatch engine. Owns the in-memory task state, the two
//!   completion paths (direct agent invocation and the pull/push poll gateway),
//!   and the HTTP surface clients and workers talk to.
//! - **`agent`**: The compute layer. Contains the binary wire protocol, the
//!   agent-side evaluation service, and the orchestrator-side client pool.
//! - **`storage`**: The durable state layer. Persists one record per submitted
//!   expression so clients can poll for results after the fact.

pub mod agent;
pub mod cli;
pub mod storage;
pub mod tasks;
