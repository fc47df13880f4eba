//! SQLite-Backed Expression Records
//!
//! The read/write contract the dispatcher needs and nothing more: save a
//! `waiting` record at submission, update it to `completed`/`error` once the
//! task is terminal, and serve point and list reads for clients.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;

/// Durable lifecycle status of a submitted expression. Stored as lowercase
/// TEXT and serialized the same way in JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RecordStatus {
    Waiting,
    Completed,
    Error,
}

/// Durable projection of a task's identity, text, status, and result.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExpressionRecord {
    pub id: String,
    pub expression: String,
    pub status: RecordStatus,
    pub result: f64,
}

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS expressions (
    id TEXT PRIMARY KEY,
    expression TEXT NOT NULL,
    status TEXT NOT NULL,
    result REAL NOT NULL
)";

/// Owner of the `expressions` table. The store serializes its own writes; the
/// dispatcher never holds task-store guards while calling into it.
pub struct ExpressionStore {
    pool: SqlitePool,
}

impl ExpressionStore {
    /// Opens (creating if missing) the database at `url` and ensures the
    /// schema exists.
    ///
    /// The pool is capped at one connection: SQLite serializes writers
    /// anyway, and a single connection keeps `sqlite::memory:` databases
    /// coherent across calls.
    pub async fn connect(url: &str) -> Result<Arc<Self>, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;

        Ok(Arc::new(Self { pool }))
    }

    /// Inserts a new record. Fails if the id already exists.
    pub async fn save(
        &self,
        id: &str,
        expression: &str,
        status: RecordStatus,
        result: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO expressions (id, expression, status, result) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(expression)
            .bind(status)
            .bind(result)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Writes the terminal result and status for an existing record.
    pub async fn update_result(
        &self,
        id: &str,
        result: f64,
        status: RecordStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE expressions SET result = ?, status = ? WHERE id = ?")
            .bind(result)
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Option<ExpressionRecord>, sqlx::Error> {
        sqlx::query_as::<_, ExpressionRecord>(
            "SELECT id, expression, status, result FROM expressions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list(&self) -> Result<Vec<ExpressionRecord>, sqlx::Error> {
        sqlx::query_as::<_, ExpressionRecord>(
            "SELECT id, expression, status, result FROM expressions",
        )
        .fetch_all(&self.pool)
        .await
    }
}
