use std::str::FromStr;
use std::sync::Arc;

use super::KeyValueStore;
use crate::models::{Locale, ThemeMode};

pub const LANGUAGE_KEY: &str = "@capsure_language";
pub const THEME_MODE_KEY: &str = "@pillscan_theme_mode";
pub const ONBOARDING_KEY: &str = "@pillscan_onboarding_completed";

/// Typed access to the small user settings kept next to the history.
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "Error reading preference");
                None
            }
        }
    }

    async fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value).await {
            tracing::error!(key, error = %e, "Error saving preference");
        }
    }

    /// Saved language. Unrecognized codes fall back to English.
    pub async fn language(&self) -> Locale {
        self.read(LANGUAGE_KEY)
            .await
            .map(|code| Locale::from_code(&code))
            .unwrap_or_default()
    }

    pub async fn set_language(&self, locale: Locale) {
        self.write(LANGUAGE_KEY, locale.as_str()).await;
    }

    pub async fn theme_mode(&self) -> ThemeMode {
        self.read(THEME_MODE_KEY)
            .await
            .and_then(|mode| ThemeMode::from_str(&mode).ok())
            .unwrap_or_default()
    }

    pub async fn set_theme_mode(&self, mode: ThemeMode) {
        self.write(THEME_MODE_KEY, mode.as_str()).await;
    }

    pub async fn onboarding_completed(&self) -> bool {
        self.read(ONBOARDING_KEY).await.as_deref() == Some("true")
    }

    /// Clearing the flag removes the key, so the next read is `false`.
    pub async fn set_onboarding_completed(&self, completed: bool) {
        if completed {
            self.write(ONBOARDING_KEY, "true").await;
        } else if let Err(e) = self.store.remove(ONBOARDING_KEY).await {
            tracing::error!(key = ONBOARDING_KEY, error = %e, "Error resetting preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::test_support::FailingKvStore;
    use crate::storage::MemoryKvStore;

    fn prefs() -> (Arc<MemoryKvStore>, PreferenceStore) {
        let store = Arc::new(MemoryKvStore::new());
        (store.clone(), PreferenceStore::new(store))
    }

    #[tokio::test]
    async fn defaults_when_unset() {
        let (_, prefs) = prefs();
        assert_eq!(prefs.language().await, Locale::En);
        assert_eq!(prefs.theme_mode().await, ThemeMode::System);
        assert!(!prefs.onboarding_completed().await);
    }

    #[tokio::test]
    async fn language_round_trip() {
        let (store, prefs) = prefs();
        prefs.set_language(Locale::Uz).await;
        assert_eq!(prefs.language().await, Locale::Uz);
        assert_eq!(store.get(LANGUAGE_KEY).await.unwrap().as_deref(), Some("uz"));
    }

    #[tokio::test]
    async fn unknown_language_code_is_english() {
        let (store, prefs) = prefs();
        store.set(LANGUAGE_KEY, "fr").await.unwrap();
        assert_eq!(prefs.language().await, Locale::En);
    }

    #[tokio::test]
    async fn theme_round_trip_and_garbage() {
        let (store, prefs) = prefs();
        prefs.set_theme_mode(ThemeMode::Dark).await;
        assert_eq!(prefs.theme_mode().await, ThemeMode::Dark);
        store.set(THEME_MODE_KEY, "sepia").await.unwrap();
        assert_eq!(prefs.theme_mode().await, ThemeMode::System);
    }

    #[tokio::test]
    async fn onboarding_flag_stored_as_true() {
        let (store, prefs) = prefs();
        prefs.set_onboarding_completed(true).await;
        assert!(prefs.onboarding_completed().await);
        assert_eq!(store.get(ONBOARDING_KEY).await.unwrap().as_deref(), Some("true"));
        prefs.set_onboarding_completed(false).await;
        assert!(!prefs.onboarding_completed().await);
    }

    #[tokio::test]
    async fn failing_store_reads_defaults() {
        let prefs = PreferenceStore::new(Arc::new(FailingKvStore));
        prefs.set_language(Locale::Ru).await;
        assert_eq!(prefs.language().await, Locale::En);
        assert_eq!(prefs.theme_mode().await, ThemeMode::System);
        assert!(!prefs.onboarding_completed().await);
    }
}
