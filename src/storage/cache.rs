//! Result cache keyed by an image fingerprint.
//!
//! The whole cache is one JSON object `{hash: {pill, timestamp}}` under
//! [`CACHE_STORAGE_KEY`]. Expired entries are purged lazily on lookup; the
//! oldest entries are evicted on store once the capacity is exceeded.
//!
//! The fingerprint covers only the first [`HASH_SAMPLE_CHARS`] characters of
//! the base64 encoding, so distinct photos sharing that prefix collide.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{load_json, save_json, KeyValueStore, StorageError};
use crate::models::Pill;

pub const CACHE_STORAGE_KEY: &str = "@capsure_pill_cache";
pub const CACHE_EXPIRY_DAYS: i64 = 30;
pub const CACHE_MAX_ENTRIES: usize = 1000;
pub const HASH_SAMPLE_CHARS: usize = 1000;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Hex SHA-256 of the first [`HASH_SAMPLE_CHARS`] characters of `encoded`.
pub fn image_hash(encoded: &str) -> String {
    let end = encoded
        .char_indices()
        .nth(HASH_SAMPLE_CHARS)
        .map(|(i, _)| i)
        .unwrap_or(encoded.len());
    format!("{:x}", Sha256::digest(encoded[..end].as_bytes()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub pill: Pill,
    /// Unix milliseconds when stored.
    pub timestamp: i64,
}

type CacheMap = BTreeMap<String, CacheEntry>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Size of the persisted document in bytes.
    pub size_bytes: usize,
    pub entries: usize,
}

#[derive(Clone)]
pub struct ResultCache {
    store: Arc<dyn KeyValueStore>,
    expiry_ms: i64,
    capacity: usize,
}

impl ResultCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_limits(store, CACHE_EXPIRY_DAYS, CACHE_MAX_ENTRIES)
    }

    pub fn with_limits(store: Arc<dyn KeyValueStore>, expiry_days: i64, capacity: usize) -> Self {
        Self {
            store,
            expiry_ms: expiry_days.saturating_mul(DAY_MS),
            capacity: capacity.max(1),
        }
    }

    /// Cached result for `hash`, if present and not expired.
    pub async fn lookup(&self, hash: &str) -> Option<Pill> {
        self.lookup_at(hash, Utc::now().timestamp_millis()).await
    }

    pub async fn lookup_at(&self, hash: &str, now_ms: i64) -> Option<Pill> {
        match self.try_lookup_at(hash, now_ms).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::error!(error = %e, "Error reading cache");
                None
            }
        }
    }

    async fn try_lookup_at(&self, hash: &str, now_ms: i64) -> Result<Option<Pill>, StorageError> {
        let mut cache: CacheMap = load_json(self.store.as_ref(), CACHE_STORAGE_KEY).await?;
        let Some(entry) = cache.get(hash) else {
            return Ok(None);
        };

        let age_ms = now_ms.saturating_sub(entry.timestamp);
        if age_ms < self.expiry_ms {
            tracing::debug!(hash, "Using cached result");
            return Ok(Some(entry.pill.clone()));
        }

        tracing::debug!(hash, age_ms, "Removing expired cache entry");
        cache.remove(hash);
        save_json(self.store.as_ref(), CACHE_STORAGE_KEY, &cache).await?;
        Ok(None)
    }

    /// Insert or replace the entry for `hash`, evicting the oldest entries
    /// beyond capacity.
    pub async fn store(&self, hash: &str, pill: &Pill) {
        self.store_at(hash, pill, Utc::now().timestamp_millis()).await
    }

    pub async fn store_at(&self, hash: &str, pill: &Pill, now_ms: i64) {
        if let Err(e) = self.try_store_at(hash, pill, now_ms).await {
            tracing::error!(error = %e, "Error saving to cache");
        }
    }

    async fn try_store_at(&self, hash: &str, pill: &Pill, now_ms: i64) -> Result<(), StorageError> {
        let mut cache: CacheMap = load_json(self.store.as_ref(), CACHE_STORAGE_KEY).await?;
        cache.insert(
            hash.to_string(),
            CacheEntry {
                pill: pill.clone(),
                timestamp: now_ms,
            },
        );

        if cache.len() > self.capacity {
            let mut by_age: Vec<(i64, String)> = cache
                .iter()
                .map(|(key, entry)| (entry.timestamp, key.clone()))
                .collect();
            by_age.sort();
            let excess = cache.len() - self.capacity;
            for (_, key) in by_age.into_iter().take(excess) {
                cache.remove(&key);
            }
            tracing::debug!(evicted = excess, "Cache over capacity");
        }

        save_json(self.store.as_ref(), CACHE_STORAGE_KEY, &cache).await
    }

    pub async fn clear(&self) {
        match self.store.remove(CACHE_STORAGE_KEY).await {
            Ok(()) => tracing::info!("Cache cleared"),
            Err(e) => tracing::error!(error = %e, "Error clearing cache"),
        }
    }

    pub async fn stats(&self) -> CacheStats {
        match self.try_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!(error = %e, "Error getting cache stats");
                CacheStats::default()
            }
        }
    }

    async fn try_stats(&self) -> Result<CacheStats, StorageError> {
        let Some(raw) = self.store.get(CACHE_STORAGE_KEY).await? else {
            return Ok(CacheStats::default());
        };
        let cache: CacheMap = serde_json::from_str(&raw)?;
        Ok(CacheStats {
            size_bytes: raw.len(),
            entries: cache.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::test_support::FailingKvStore;
    use crate::storage::MemoryKvStore;
    use chrono::TimeZone;

    const T0: i64 = 1_700_000_000_000;

    fn pill(name: &str) -> Pill {
        Pill {
            id: format!("pill_{T0}_abcdefghi"),
            name: name.to_string(),
            description: "desc".into(),
            usage: vec!["Take with water".into()],
            tags: vec!["Pain relief".into()],
            color: Some("White".into()),
            shape: Some("Round".into()),
            dosage: None,
            confidence: 90,
            scanned_at: Utc.timestamp_millis_opt(T0).unwrap(),
            important: None,
        }
    }

    fn cache() -> (Arc<MemoryKvStore>, ResultCache) {
        let store = Arc::new(MemoryKvStore::new());
        let cache = ResultCache::new(store.clone());
        (store, cache)
    }

    #[test]
    fn hash_uses_prefix_only() {
        let long_a = format!("{}{}", "A".repeat(1000), "tail-one");
        let long_b = format!("{}{}", "A".repeat(1000), "tail-two");
        assert_eq!(image_hash(&long_a), image_hash(&long_b));
        assert_ne!(image_hash("abc"), image_hash("abd"));
    }

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        assert_eq!(
            image_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[tokio::test]
    async fn round_trip_within_expiry() {
        let (_, cache) = cache();
        let original = pill("Ibuprofen 200mg");
        cache.store_at("h1", &original, T0).await;
        let hit = cache.lookup_at("h1", T0 + 29 * DAY_MS).await;
        assert_eq!(hit, Some(original));
    }

    #[tokio::test]
    async fn expired_entry_is_absent_and_purged() {
        let (store, cache) = cache();
        cache.store_at("h1", &pill("Old"), T0).await;
        assert_eq!(cache.lookup_at("h1", T0 + 30 * DAY_MS).await, None);

        let raw = store.get(CACHE_STORAGE_KEY).await.unwrap().unwrap();
        let remaining: CacheMap = serde_json::from_str(&raw).unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn store_replaces_existing_entry() {
        let (_, cache) = cache();
        cache.store_at("h1", &pill("First"), T0).await;
        cache.store_at("h1", &pill("Second"), T0 + 1).await;
        assert_eq!(cache.lookup_at("h1", T0 + 2).await.unwrap().name, "Second");
        assert_eq!(cache.stats().await.entries, 1);
    }

    #[tokio::test]
    async fn evicts_oldest_beyond_capacity() {
        let store = Arc::new(MemoryKvStore::new());
        let cache = ResultCache::with_limits(store, CACHE_EXPIRY_DAYS, 3);
        for i in 0..4 {
            cache.store_at(&format!("h{i}"), &pill("P"), T0 + i).await;
        }
        assert_eq!(cache.stats().await.entries, 3);
        assert_eq!(cache.lookup_at("h0", T0 + 10).await, None);
        assert!(cache.lookup_at("h3", T0 + 10).await.is_some());
    }

    #[tokio::test]
    async fn default_capacity_keeps_one_thousand() {
        let (store, cache) = cache();
        let seeded: CacheMap = (0..CACHE_MAX_ENTRIES as i64)
            .map(|i| {
                (
                    format!("h{i:04}"),
                    CacheEntry {
                        pill: pill("P"),
                        timestamp: T0 + i,
                    },
                )
            })
            .collect();
        save_json(store.as_ref(), CACHE_STORAGE_KEY, &seeded).await.unwrap();

        cache.store_at("newest", &pill("N"), T0 + 5_000).await;

        assert_eq!(cache.stats().await.entries, CACHE_MAX_ENTRIES);
        assert_eq!(cache.lookup_at("h0000", T0 + 6_000).await, None);
        assert!(cache.lookup_at("h0001", T0 + 6_000).await.is_some());
        assert!(cache.lookup_at("newest", T0 + 6_000).await.is_some());
    }

    #[tokio::test]
    async fn clear_and_stats() {
        let (_, cache) = cache();
        assert_eq!(cache.stats().await, CacheStats::default());
        cache.store_at("h1", &pill("P"), T0).await;
        let stats = cache.stats().await;
        assert_eq!(stats.entries, 1);
        assert!(stats.size_bytes > 0);
        cache.clear().await;
        assert_eq!(cache.stats().await, CacheStats::default());
    }

    #[tokio::test]
    async fn extreme_timestamps_do_not_overflow() {
        let (store, cache) = cache();
        let seeded: CacheMap = [
            (
                "ancient".to_string(),
                CacheEntry {
                    pill: pill("A"),
                    timestamp: i64::MIN,
                },
            ),
            (
                "now".to_string(),
                CacheEntry {
                    pill: pill("N"),
                    timestamp: T0,
                },
            ),
        ]
        .into_iter()
        .collect();
        save_json(store.as_ref(), CACHE_STORAGE_KEY, &seeded).await.unwrap();

        assert_eq!(cache.lookup_at("ancient", T0).await, None);
        assert_eq!(cache.stats().await.entries, 1);
        assert!(cache.lookup_at("now", i64::MIN).await.is_some());

        let forever = ResultCache::with_limits(store, i64::MAX, 10);
        assert!(forever.lookup_at("now", i64::MAX).await.is_some());
    }

    #[tokio::test]
    async fn corrupt_document_reads_as_miss() {
        let (store, cache) = cache();
        store.set(CACHE_STORAGE_KEY, "{not json").await.unwrap();
        assert_eq!(cache.lookup_at("h1", T0).await, None);
        assert_eq!(cache.stats().await, CacheStats::default());
    }

    #[tokio::test]
    async fn failing_store_degrades_quietly() {
        let cache = ResultCache::new(Arc::new(FailingKvStore));
        cache.store("h1", &pill("P")).await;
        assert_eq!(cache.lookup("h1").await, None);
        cache.clear().await;
        assert_eq!(cache.stats().await, CacheStats::default());
    }
}
