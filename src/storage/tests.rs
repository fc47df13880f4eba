//! Durable Store Tests
//!
//! All tests run against `sqlite::memory:` databases, one per test.

#[cfg(test)]
mod tests {
    use crate::storage::sqlite::{ExpressionStore, RecordStatus};

    async fn memory_store() -> std::sync::Arc<ExpressionStore> {
        ExpressionStore::connect("sqlite::memory:")
            .await
            .expect("in-memory database")
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let store = memory_store().await;

        store
            .save("task-1", "+ 2 3", RecordStatus::Waiting, 0.0)
            .await
            .unwrap();

        let record = store.get("task-1").await.unwrap().expect("record exists");
        assert_eq!(record.id, "task-1");
        assert_eq!(record.expression, "+ 2 3");
        assert_eq!(record.status, RecordStatus::Waiting);
        assert_eq!(record.result, 0.0);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = memory_store().await;
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_result() {
        let store = memory_store().await;

        store
            .save("task-1", "+ 2 3", RecordStatus::Waiting, 0.0)
            .await
            .unwrap();
        store
            .update_result("task-1", 5.0, RecordStatus::Completed)
            .await
            .unwrap();

        let record = store.get("task-1").await.unwrap().unwrap();
        assert_eq!(record.status, RecordStatus::Completed);
        assert_eq!(record.result, 5.0);
        // Expression text is untouched by the update.
        assert_eq!(record.expression, "+ 2 3");
    }

    #[tokio::test]
    async fn test_update_to_error_status() {
        let store = memory_store().await;

        store
            .save("task-1", "/ 5 0", RecordStatus::Waiting, 0.0)
            .await
            .unwrap();
        store
            .update_result("task-1", 0.0, RecordStatus::Error)
            .await
            .unwrap();

        let record = store.get("task-1").await.unwrap().unwrap();
        assert_eq!(record.status, RecordStatus::Error);
        assert_eq!(record.result, 0.0);
    }

    #[tokio::test]
    async fn test_list_returns_all_records() {
        let store = memory_store().await;

        store
            .save("task-1", "+ 1 1", RecordStatus::Waiting, 0.0)
            .await
            .unwrap();
        store
            .save("task-2", "* 2 2", RecordStatus::Completed, 4.0)
            .await
            .unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 2);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains(&"task-1"));
        assert!(ids.contains(&"task-2"));
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = memory_store().await;

        store
            .save("task-1", "+ 1 1", RecordStatus::Waiting, 0.0)
            .await
            .unwrap();
        let duplicate = store.save("task-1", "+ 2 2", RecordStatus::Waiting, 0.0).await;
        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn test_status_serializes_lowercase() {
        let store = memory_store().await;

        store
            .save("task-1", "+ 2 3", RecordStatus::Waiting, 0.0)
            .await
            .unwrap();

        let record = store.get("task-1").await.unwrap().unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "waiting");
    }
}
