//! Lenient reading of the model's reply.

use chrono::Utc;
use serde_json::{Map, Value};

use super::types::ChatCompletionResponse;
use super::RemoteError;
use crate::models::{generate_pill_id, Pill, UNKNOWN_PILL_NAME};

pub const FALLBACK_DESCRIPTION: &str =
    "Could not identify this pill. Please consult a healthcare professional.";

/// Pill fields as the model returned them, after type filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PillReply {
    pub name: Option<String>,
    pub description: Option<String>,
    pub usage: Vec<String>,
    pub tags: Vec<String>,
    pub color: Option<String>,
    pub shape: Option<String>,
    pub dosage: Option<String>,
    pub important: Option<String>,
}

/// Text of the first choice, `{}` when absent.
pub fn extract_content(body: &str) -> Result<String, RemoteError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| RemoteError::MalformedReply(e.to_string()))?;
    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "{}".to_string()))
}

/// Remove Markdown code fences the model sometimes adds despite the prompt.
pub fn strip_fences(content: &str) -> String {
    content
        .replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

pub fn parse_reply(content: &str) -> Result<PillReply, RemoteError> {
    let cleaned = strip_fences(content);
    let value: Value =
        serde_json::from_str(&cleaned).map_err(|e| RemoteError::MalformedReply(e.to_string()))?;
    let obj = match value {
        Value::Object(obj) => obj,
        other => {
            return Err(RemoteError::MalformedReply(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    Ok(PillReply {
        name: text(&obj, "name"),
        description: text(&obj, "description"),
        usage: text_list(&obj, "usage"),
        tags: text_list(&obj, "tags"),
        color: text(&obj, "color"),
        shape: text(&obj, "shape"),
        dosage: text(&obj, "dosage"),
        important: text(&obj, "important"),
    })
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Non-array values become empty; non-string items are dropped.
fn text_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Models whose answers get a small confidence bonus. Fine-tuned ids such as
/// `ft:gpt-4o-2024-08-06:org::id` count as their base model.
pub fn is_premium_model(model: &str) -> bool {
    model.contains("gpt-5") || model.contains("gpt-4o")
}

impl PillReply {
    /// 85 with both name and description, else 60; +5 for premium models,
    /// capped at 95.
    pub fn confidence(&self, model: &str) -> u8 {
        let named = self.name.as_deref().is_some_and(|s| !s.is_empty())
            && self.description.as_deref().is_some_and(|s| !s.is_empty());
        let base: u8 = if named { 85 } else { 60 };
        if is_premium_model(model) {
            (base + 5).min(95)
        } else {
            base
        }
    }

    pub fn into_pill(self, model: &str) -> Pill {
        let confidence = self.confidence(model);
        let now = Utc::now();
        Pill {
            id: generate_pill_id(now),
            name: self
                .name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_PILL_NAME.to_string()),
            description: self
                .description
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            usage: self.usage,
            tags: self.tags,
            color: self.color,
            shape: self.shape,
            dosage: self.dosage,
            confidence,
            scanned_at: now,
            important: self.important,
        }
    }
}
