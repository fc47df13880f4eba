//! Task Dispatch Module
//!
//! Implements the task dispatch and state-synchronization engine: one task per
//! submitted expression, tracked concurrently in memory and mirrored into the
//! durable store.
//!
//! ## Architecture Overview
//! A submission creates a `Task`, inserts it into the `TaskStore`, persists a
//! `waiting` record, and spawns a detached evaluation against a compute agent.
//! A task can reach its terminal state through **two competing paths**:
//! 1. **Direct dispatch**: the spawned evaluation sends the expression to a
//!    randomly selected agent and writes the response back.
//! 2. **Poll gateway**: an external worker pulls a pending task over HTTP and
//!    pushes a result back.
//!
//! The paths are not coordinated; the store's compare-and-set on the `ready`
//! flag guarantees that exactly one writer lands and the other is a no-op.
//!
//! ## Submodules
//! - **`types`**: The `Task` data model and id generation.
//! - **`store`**: Concurrent task map with the write-once result discipline.
//! - **`dispatcher`**: Task creation and both completion paths.
//! - **`handlers`**: HTTP surface, including the poll gateway endpoints.
//! - **`protocol`**: Request/response DTOs for the HTTP API.
//! - **`error`**: The dispatch error taxonomy.

pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod store;
pub mod types;
