//! Local persistence: a key/value store holding JSON documents, and the
//! result cache, scan history and preferences built on top of it.
//!
//! Every document is read, modified and written back whole. A single
//! in-process writer is assumed; there is no locking across operations.

pub mod cache;
pub mod history;
pub mod kv;
pub mod preferences;
pub mod sqlite;

pub use cache::{image_hash, CacheStats, ResultCache};
pub use history::HistoryStore;
pub use kv::{KeyValueStore, MemoryKvStore};
pub use preferences::PreferenceStore;
pub use sqlite::SqliteKvStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Stored document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Cannot create data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store connection lock poisoned")]
    LockPoisoned,

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read the JSON document under `key`, or `T::default()` when absent.
pub(crate) async fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    match store.get(key).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(T::default()),
    }
}

pub(crate) async fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}
