use std::path::PathBuf;
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "CapSure";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default chat-completions endpoint for the vision identifier.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model tried last, after the fallbacks.
pub const DEFAULT_PREFERRED_MODEL: &str = "gpt-4o";

/// Fallback models, cheaper first for better rate limits.
pub const FALLBACK_MODELS: &[&str] = &["gpt-4o-mini", "gpt-4-turbo", "gpt-4"];

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;

/// Credentials must start with this prefix to be considered well-formed.
pub const API_KEY_PREFIX: &str = "sk-";
/// Credentials must be strictly longer than this.
pub const API_KEY_MIN_LEN: usize = 20;

const ENV_API_KEY: &str = "CAPSURE_OPENAI_API_KEY";
const ENV_API_KEY_FALLBACK: &str = "OPENAI_API_KEY";
const ENV_MODEL: &str = "CAPSURE_OPENAI_MODEL";
const ENV_API_URL: &str = "CAPSURE_OPENAI_URL";
const ENV_TIMEOUT: &str = "CAPSURE_HTTP_TIMEOUT_SECS";
const ENV_DATA_DIR: &str = "CAPSURE_DATA_DIR";

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,capsure_lib=debug"
}

/// Get the application data directory.
/// `$CAPSURE_DATA_DIR` if set, else ~/CapSure/ (falls back to the working
/// directory when no home directory can be determined).
pub fn app_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(ENV_DATA_DIR) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Path of the SQLite file holding cache, history and preferences.
pub fn store_path() -> PathBuf {
    app_data_dir().join("capsure.db")
}

// ═══════════════════════════════════════════════════════════
// Remote identifier configuration
// ═══════════════════════════════════════════════════════════

/// Shape check on the configured credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyStatus {
    Missing,
    Malformed,
    Valid,
}

pub fn api_key_status(key: Option<&str>) -> ApiKeyStatus {
    match key.map(str::trim) {
        None | Some("") => ApiKeyStatus::Missing,
        Some(k) if k.starts_with(API_KEY_PREFIX) && k.len() > API_KEY_MIN_LEN => {
            ApiKeyStatus::Valid
        }
        Some(_) => ApiKeyStatus::Malformed,
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{variable} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { variable: &'static str, value: String },
}

/// Parse a timeout given in whole seconds.
pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            variable: ENV_TIMEOUT,
            value: raw.to_string(),
        }),
    }
}

/// Settings for the vision-service identifier.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub preferred_model: String,
    pub fallback_models: Vec<String>,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            preferred_model: DEFAULT_PREFERRED_MODEL.to_string(),
            fallback_models: FALLBACK_MODELS.iter().map(|m| m.to_string()).collect(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl RemoteConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = non_empty(ENV_API_KEY).or_else(|| non_empty(ENV_API_KEY_FALLBACK));
        if let Some(model) = non_empty(ENV_MODEL) {
            config.preferred_model = model.trim().to_string();
        }
        if let Some(url) = non_empty(ENV_API_URL) {
            config.api_url = url.trim().to_string();
        }
        if let Some(raw) = non_empty(ENV_TIMEOUT) {
            match parse_timeout(&raw) {
                Ok(timeout) => config.timeout = timeout,
                Err(e) => tracing::warn!(error = %e, "Keeping default HTTP timeout"),
            }
        }

        match config.key_status() {
            ApiKeyStatus::Missing => tracing::warn!("Vision API key not found, remote identification disabled"),
            ApiKeyStatus::Malformed => tracing::warn!(
                "Vision API key format appears invalid, keys start with \"{API_KEY_PREFIX}\" and exceed {API_KEY_MIN_LEN} characters"
            ),
            ApiKeyStatus::Valid => {}
        }
        config
    }

    pub fn key_status(&self) -> ApiKeyStatus {
        api_key_status(self.api_key.as_deref())
    }

    /// Fallback models in the order they are tried before the preferred one.
    /// The preferred model is skipped here so it is only asked once, last.
    pub fn fallbacks_to_try(&self) -> Vec<String> {
        self.fallback_models
            .iter()
            .filter(|m| **m != self.preferred_model)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn app_name_is_capsure() {
        assert_eq!(APP_NAME, "CapSure");
    }

    #[test]
    fn store_path_under_app_data() {
        assert!(store_path().starts_with(app_data_dir()));
        assert!(store_path().ends_with("capsure.db"));
    }

    #[test]
    fn key_status_missing() {
        assert_eq!(api_key_status(None), ApiKeyStatus::Missing);
        assert_eq!(api_key_status(Some("   ")), ApiKeyStatus::Missing);
    }

    #[test]
    fn key_status_requires_prefix_and_length() {
        assert_eq!(api_key_status(Some("pk-aaaaaaaaaaaaaaaaaaaaaaaa")), ApiKeyStatus::Malformed);
        assert_eq!(api_key_status(Some("sk-short")), ApiKeyStatus::Malformed);
        // Exactly 20 characters is not enough.
        assert_eq!(api_key_status(Some("sk-12345678901234567")), ApiKeyStatus::Malformed);
        assert_eq!(api_key_status(Some("sk-123456789012345678")), ApiKeyStatus::Valid);
    }

    #[test]
    fn defaults_without_environment() {
        let config = RemoteConfig::from_lookup(lookup(&[]));
        assert_eq!(config.key_status(), ApiKeyStatus::Missing);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.preferred_model, "gpt-4o");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
    }

    #[test]
    fn reads_overrides() {
        let config = RemoteConfig::from_lookup(lookup(&[
            ("CAPSURE_OPENAI_API_KEY", "sk-abcdefghijklmnopqrstuvwxyz"),
            ("CAPSURE_OPENAI_MODEL", "gpt-5"),
            ("CAPSURE_OPENAI_URL", "http://127.0.0.1:9999/v1/chat/completions"),
            ("CAPSURE_HTTP_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(config.key_status(), ApiKeyStatus::Valid);
        assert_eq!(config.preferred_model, "gpt-5");
        assert_eq!(config.api_url, "http://127.0.0.1:9999/v1/chat/completions");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn falls_back_to_generic_key_variable() {
        let config = RemoteConfig::from_lookup(lookup(&[(
            "OPENAI_API_KEY",
            "sk-abcdefghijklmnopqrstuvwxyz",
        )]));
        assert!(config.api_key.is_some());
    }

    #[test]
    fn invalid_timeout_keeps_default() {
        let config = RemoteConfig::from_lookup(lookup(&[("CAPSURE_HTTP_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
    }

    #[test]
    fn parse_timeout_rejects_zero_and_text() {
        assert_eq!(parse_timeout(" 30 "), Ok(Duration::from_secs(30)));
        assert!(matches!(parse_timeout("0"), Err(ConfigError::InvalidTimeout { .. })));
        let err = parse_timeout("-5").unwrap_err();
        assert!(err.to_string().contains("CAPSURE_HTTP_TIMEOUT_SECS"));
    }

    #[test]
    fn fallbacks_exclude_preferred_model() {
        let config = RemoteConfig::default();
        assert_eq!(config.fallbacks_to_try(), vec!["gpt-4o-mini", "gpt-4-turbo", "gpt-4"]);
    }

    #[test]
    fn preferred_model_in_fallbacks_is_skipped() {
        let config = RemoteConfig {
            preferred_model: "gpt-4-turbo".into(),
            ..RemoteConfig::default()
        };
        assert_eq!(config.fallbacks_to_try(), vec!["gpt-4o-mini", "gpt-4"]);
    }
}
