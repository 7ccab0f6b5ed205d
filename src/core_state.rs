//! Application state shared by every entry point.
//!
//! `CoreState` owns the key/value store and the stores built on it, plus
//! the remote configuration, and assembles a [`PillScanner`] on demand.

use std::path::Path;
use std::sync::Arc;

use crate::config::{self, ApiKeyStatus, RemoteConfig};
use crate::pipeline::features::FeatureExtractor;
use crate::pipeline::matching::{LocalMatcher, SelectionPolicy};
use crate::pipeline::remote::RemoteIdentifier;
use crate::pipeline::PillScanner;
use crate::storage::{
    HistoryStore, KeyValueStore, MemoryKvStore, PreferenceStore, ResultCache, SqliteKvStore, StorageError,
};

pub struct CoreState {
    pub cache: ResultCache,
    pub history: HistoryStore,
    pub preferences: PreferenceStore,
    pub remote_config: RemoteConfig,
}

impl CoreState {
    pub fn with_store(store: Arc<dyn KeyValueStore>, remote_config: RemoteConfig) -> Self {
        Self {
            cache: ResultCache::new(store.clone()),
            history: HistoryStore::new(store.clone()),
            preferences: PreferenceStore::new(store),
            remote_config,
        }
    }

    /// Open the SQLite store at `path`.
    pub fn open(path: &Path, remote_config: RemoteConfig) -> Result<Self, StorageError> {
        let store = SqliteKvStore::open(path)?;
        tracing::info!(path = %path.display(), "Store opened");
        Ok(Self::with_store(Arc::new(store), remote_config))
    }

    /// Open the default on-disk store, or fall back to a process-local one
    /// so scanning keeps working without persistence.
    pub fn open_default() -> Self {
        let remote_config = RemoteConfig::from_env();
        let path = config::store_path();
        match Self::open(&path, remote_config.clone()) {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Cannot open store, history and cache will not persist");
                Self::with_store(Arc::new(MemoryKvStore::new()), remote_config)
            }
        }
    }

    /// Remote identifier if a well-formed credential is configured.
    ///
    /// A missing or malformed credential still yields an identifier when
    /// `require_valid_key` is false, so the user sees the explanatory
    /// error result instead of a silent local fallback.
    pub fn remote_identifier(&self, require_valid_key: bool) -> Option<RemoteIdentifier> {
        if require_valid_key && self.remote_config.key_status() != ApiKeyStatus::Valid {
            return None;
        }
        match RemoteIdentifier::from_config(self.remote_config.clone(), self.cache.clone()) {
            Ok(identifier) => Some(identifier),
            Err(e) => {
                tracing::error!(error = %e, "Cannot build vision client");
                None
            }
        }
    }

    /// Scanner in the saved display language.
    pub async fn scanner(&self, extractor: FeatureExtractor, policy: SelectionPolicy) -> PillScanner {
        let locale = self.preferences.language().await;
        let matcher = LocalMatcher::default().with_policy(policy).with_locale(locale);
        PillScanner::new(extractor, matcher, self.remote_identifier(false), self.history.clone())
    }
}
