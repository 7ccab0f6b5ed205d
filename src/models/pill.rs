use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tag attached to every placeholder result produced for a failure.
pub const ERROR_TAG: &str = "Error";

/// Name used when an identification carries no usable name.
pub const UNKNOWN_PILL_NAME: &str = "Unknown Pill";

/// One identification result, local or remote.
///
/// Values are copied into the cache and the history; no copy is shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pill {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub usage: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    /// Heuristic score 0-100, not a calibrated probability.
    pub confidence: u8,
    pub scanned_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<String>,
}

impl Pill {
    /// Placeholder result describing a failure. Confidence is always 0.
    pub fn error(name: impl Into<String>, description: impl Into<String>, important: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("pill_error_{}", now.timestamp_millis()),
            name: name.into(),
            description: description.into(),
            usage: Vec::new(),
            tags: vec![ERROR_TAG.to_string()],
            color: None,
            shape: None,
            dosage: None,
            confidence: 0,
            scanned_at: now,
            important: Some(important.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.confidence == 0 && self.tags.iter().any(|t| t == ERROR_TAG)
    }
}

/// Generate a result id: `pill_<unix-millis>_<9 lowercase alphanumerics>`.
pub fn generate_pill_id(at: DateTime<Utc>) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("pill_{}_{suffix}", at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Pill {
        Pill {
            id: "pill_1_abc".into(),
            name: "Ibuprofen 200mg".into(),
            description: "NSAID".into(),
            usage: vec!["Take with food".into()],
            tags: vec!["Pain relief".into()],
            color: Some("White".into()),
            shape: Some("Round".into()),
            dosage: Some("200mg".into()),
            confidence: 90,
            scanned_at: Utc::now(),
            important: None,
        }
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("scannedAt").is_some());
        assert!(json.get("scanned_at").is_none());
        assert!(json.get("important").is_none(), "None fields are omitted");
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let pill = sample();
        let json = serde_json::to_string(&pill).unwrap();
        let back: Pill = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pill);
    }

    #[test]
    fn missing_arrays_default_to_empty() {
        let json = r#"{"id":"x","name":"n","description":"d","confidence":60,"scannedAt":"2025-01-01T00:00:00Z"}"#;
        let pill: Pill = serde_json::from_str(json).unwrap();
        assert!(pill.usage.is_empty());
        assert!(pill.tags.is_empty());
    }

    #[test]
    fn error_pill_shape() {
        let pill = Pill::error("Network Error", "Could not reach the API.", "details");
        assert!(pill.id.starts_with("pill_error_"));
        assert_eq!(pill.confidence, 0);
        assert_eq!(pill.tags, vec!["Error".to_string()]);
        assert!(pill.is_error());
        assert_eq!(pill.important.as_deref(), Some("details"));
    }

    #[test]
    fn generated_ids_have_expected_format() {
        let now = Utc::now();
        let id = generate_pill_id(now);
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "pill");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn generated_ids_differ() {
        let now = Utc::now();
        assert_ne!(generate_pill_id(now), generate_pill_id(now));
    }
}
