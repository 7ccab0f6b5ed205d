use std::sync::Arc;

use super::{load_json, save_json, KeyValueStore, StorageError};
use crate::models::Pill;

pub const HISTORY_STORAGE_KEY: &str = "@pillscan_history";

/// Scan history, newest first. Unbounded; only a full clear is offered.
#[derive(Clone)]
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Prepend a result. Failures are logged and swallowed.
    pub async fn append(&self, pill: &Pill) {
        if let Err(e) = self.try_append(pill).await {
            tracing::error!(error = %e, "Error saving pill to history");
        }
    }

    async fn try_append(&self, pill: &Pill) -> Result<(), StorageError> {
        // An unreadable document is replaced; a failing backend is not written to.
        let mut history = match self.try_list().await {
            Ok(history) => history,
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(error = %e, "Discarding unreadable history");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        history.insert(0, pill.clone());
        save_json(self.store.as_ref(), HISTORY_STORAGE_KEY, &history).await?;
        tracing::debug!(id = %pill.id, total = history.len(), "Saved to history");
        Ok(())
    }

    /// All saved results, newest first. Empty on any read problem.
    pub async fn list(&self) -> Vec<Pill> {
        self.try_list().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error getting pill history");
            Vec::new()
        })
    }

    async fn try_list(&self) -> Result<Vec<Pill>, StorageError> {
        load_json(self.store.as_ref(), HISTORY_STORAGE_KEY).await
    }

    pub async fn clear(&self) {
        if let Err(e) = self.store.remove(HISTORY_STORAGE_KEY).await {
            tracing::error!(error = %e, "Error clearing history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::test_support::FailingKvStore;
    use crate::storage::MemoryKvStore;
    use chrono::Utc;

    fn pill(id: &str) -> Pill {
        Pill {
            id: id.to_string(),
            name: "Paracetamol 500mg".into(),
            description: "Pain reliever".into(),
            usage: Vec::new(),
            tags: Vec::new(),
            color: None,
            shape: None,
            dosage: None,
            confidence: 80,
            scanned_at: Utc::now(),
            important: None,
        }
    }

    #[tokio::test]
    async fn newest_first() {
        let history = HistoryStore::new(Arc::new(MemoryKvStore::new()));
        history.append(&pill("a")).await;
        history.append(&pill("b")).await;
        history.append(&pill("c")).await;
        let ids: Vec<String> = history.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn duplicates_are_kept() {
        let history = HistoryStore::new(Arc::new(MemoryKvStore::new()));
        history.append(&pill("a")).await;
        history.append(&pill("a")).await;
        assert_eq!(history.list().await.len(), 2);
    }

    #[tokio::test]
    async fn clear_empties() {
        let history = HistoryStore::new(Arc::new(MemoryKvStore::new()));
        history.append(&pill("a")).await;
        history.clear().await;
        assert!(history.list().await.is_empty());
    }

    #[tokio::test]
    async fn persisted_as_camel_case_json() {
        let store = Arc::new(MemoryKvStore::new());
        let history = HistoryStore::new(store.clone());
        history.append(&pill("a")).await;
        let raw = store.get(HISTORY_STORAGE_KEY).await.unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"scannedAt\""));
    }

    #[tokio::test]
    async fn corrupt_document_lists_empty() {
        let store = Arc::new(MemoryKvStore::new());
        store.set(HISTORY_STORAGE_KEY, "[{\"id\":").await.unwrap();
        assert!(HistoryStore::new(store).list().await.is_empty());
    }

    #[tokio::test]
    async fn append_recovers_from_corrupt_document() {
        let store = Arc::new(MemoryKvStore::new());
        store.set(HISTORY_STORAGE_KEY, "[{\"id\":").await.unwrap();
        let history = HistoryStore::new(store);

        history.append(&pill("a")).await;
        let ids: Vec<String> = history.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["a"]);

        history.append(&pill("b")).await;
        let ids: Vec<String> = history.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn failing_store_degrades_quietly() {
        let history = HistoryStore::new(Arc::new(FailingKvStore));
        history.append(&pill("a")).await;
        history.clear().await;
        assert!(history.list().await.is_empty());
    }
}
