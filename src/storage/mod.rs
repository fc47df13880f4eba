//! Durable Storage Module
//!
//! Persists one `ExpressionRecord` per submitted expression: the externally
//! visible projection of a task (id, raw expression, status, result). Clients
//! discover results by polling this store, never synchronously.

pub mod sqlite;

#[cfg(test)]
mod tests;
