use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use tracing::Instrument;

use super::parser::{extract_content, parse_reply};
use super::retry::BackoffPolicy;
use super::transport::{OpenAiTransport, VisionTransport};
use super::types::ChatCompletionRequest;
use super::RemoteError;
use crate::config::{ApiKeyStatus, RemoteConfig};
use crate::models::Pill;
use crate::storage::{image_hash, ResultCache};

/// Identifies pills by asking a hosted vision model, with model fallback,
/// rate-limit backoff and a local result cache.
pub struct RemoteIdentifier {
    config: RemoteConfig,
    transport: Arc<dyn VisionTransport>,
    cache: ResultCache,
    backoff: BackoffPolicy,
}

impl RemoteIdentifier {
    pub fn new(config: RemoteConfig, transport: Arc<dyn VisionTransport>, cache: ResultCache) -> Self {
        Self {
            config,
            transport,
            cache,
            backoff: BackoffPolicy::default(),
        }
    }

    /// Production wiring: HTTPS transport built from `config`.
    pub fn from_config(config: RemoteConfig, cache: ResultCache) -> Result<Self, RemoteError> {
        let transport = OpenAiTransport::new(&config.api_url, config.timeout)?;
        Ok(Self::new(config, Arc::new(transport), cache))
    }

    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Identify the pill in `image_bytes`. Never fails: problems come back
    /// as an error pill (tag `Error`, confidence 0).
    pub async fn identify(&self, image_bytes: &[u8]) -> Pill {
        let span = tracing::info_span!("remote_identify", image_size = image_bytes.len());
        self.try_identify(image_bytes)
            .instrument(span)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Error identifying pill with vision model");
                error_pill(&e)
            })
    }

    /// Read the photo at `path` and identify it.
    pub async fn identify_path(&self, path: &Path) -> Pill {
        if let Err(e) = self.credential() {
            return error_pill(&e);
        }
        match tokio::fs::read(path).await {
            Ok(bytes) => self.identify(&bytes).await,
            Err(e) => {
                let err = RemoteError::ImageRead(format!("{}: {e}", path.display()));
                tracing::error!(error = %err, "Error identifying pill with vision model");
                error_pill(&err)
            }
        }
    }

    fn credential(&self) -> Result<&str, RemoteError> {
        match self.config.key_status() {
            ApiKeyStatus::Missing => Err(RemoteError::MissingApiKey),
            ApiKeyStatus::Malformed => Err(RemoteError::MalformedApiKey),
            ApiKeyStatus::Valid => self
                .config
                .api_key
                .as_deref()
                .map(str::trim)
                .ok_or(RemoteError::MissingApiKey),
        }
    }

    async fn try_identify(&self, image_bytes: &[u8]) -> Result<Pill, RemoteError> {
        let api_key = self.credential()?;
        if image_bytes.is_empty() {
            return Err(RemoteError::ImageRead("image is empty".into()));
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(image_bytes);
        let hash = image_hash(&encoded);
        if let Some(cached) = self.cache.lookup(&hash).await {
            tracing::info!(name = %cached.name, "Using cached result");
            return Ok(cached);
        }

        let (model, body) = self.request_with_fallback(api_key, &encoded).await?;
        let content = extract_content(&body)?;
        let pill = parse_reply(&content)?.into_pill(&model);

        tracing::info!(model = %model, name = %pill.name, confidence = pill.confidence, "Vision identification complete");
        self.cache.store(&hash, &pill).await;
        Ok(pill)
    }

    /// Try each fallback in order, then the preferred model. On a fallback,
    /// 400/404 and exhausted 429 move on; anything else stops immediately.
    /// The preferred model's result is returned as is.
    async fn request_with_fallback(&self, api_key: &str, encoded: &str) -> Result<(String, String), RemoteError> {
        for model in self.config.fallbacks_to_try() {
            tracing::debug!(model = %model, "Trying model");
            let request = ChatCompletionRequest::identify_pill(&model, encoded);
            match self.send_with_retry(api_key, &request).await {
                Ok(body) => {
                    tracing::debug!(model = %model, "Model answered");
                    return Ok((model, body));
                }
                Err(e) => match e.status() {
                    Some(400 | 404) => {
                        tracing::warn!(model = %model, status = ?e.status(), "Model not available, trying next");
                    }
                    Some(429) => {
                        tracing::warn!(model = %model, "Rate limit on model, trying next");
                    }
                    _ => return Err(e),
                },
            }
        }

        let model = self.config.preferred_model.clone();
        tracing::debug!(model = %model, "Trying preferred model");
        let request = ChatCompletionRequest::identify_pill(&model, encoded);
        let body = self.send_with_retry(api_key, &request).await?;
        Ok((model, body))
    }

    /// Send one request, sleeping and retrying on 429 within the backoff
    /// budget.
    async fn send_with_retry(&self, api_key: &str, request: &ChatCompletionRequest) -> Result<String, RemoteError> {
        let mut attempts = 0u32;
        loop {
            let response = self.transport.send(api_key, request).await?;
            attempts += 1;

            if response.is_success() {
                return Ok(response.body);
            }

            if response.status == 429 && self.backoff.allows_retry(attempts) {
                let delay = self.backoff.delay(attempts - 1, response.retry_after.as_deref());
                tracing::warn!(
                    model = %request.model,
                    attempt = attempts,
                    max_attempts = self.backoff.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "Rate limit hit, retrying"
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            return Err(RemoteError::Http {
                status: response.status,
                body: response.body,
            });
        }
    }
}

/// Map a failure to the placeholder pill shown to the user.
pub fn error_pill(err: &RemoteError) -> Pill {
    let details = format!("Error details: {err}");
    match err {
        RemoteError::MissingApiKey => Pill::error(
            "API Key Missing",
            "Please configure your OpenAI API key.",
            "Set CAPSURE_OPENAI_API_KEY (or OPENAI_API_KEY) in the environment.",
        ),
        RemoteError::MalformedApiKey => Pill::error(
            "Invalid API Key Format",
            "Your OpenAI API key format appears to be invalid. Keys should start with \"sk-\" and be longer than 20 characters.",
            "Please check your API key. Get a valid key from https://platform.openai.com/api-keys",
        ),
        RemoteError::Http { status: 401, .. } => Pill::error(
            "Invalid API Key",
            "Please check your OpenAI API key. It may be incorrect or expired.",
            details,
        ),
        RemoteError::Http { status: 402, .. } => Pill::error(
            "Payment Required",
            "Your OpenAI account has insufficient credits. Please add credits to your account.",
            details,
        ),
        RemoteError::Http { status: 403, .. } => Pill::error(
            "Access Forbidden",
            "Your API key does not have permission to access this endpoint. Please check your OpenAI account settings.",
            details,
        ),
        RemoteError::Http { status: 429, .. } => Pill::error(
            "Rate Limit Exceeded",
            "You have exceeded your API rate limit. Please wait a few minutes and try again, or check your OpenAI account for usage limits.",
            details,
        ),
        RemoteError::Http { status, .. } => {
            let reason = reqwest::StatusCode::from_u16(*status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown status");
            Pill::error(
                format!("API Error ({status})"),
                format!("OpenAI API returned: {reason}. Please check your API key and account status."),
                details,
            )
        }
        RemoteError::Network(_) => Pill::error(
            "Network Error",
            "Could not reach OpenAI API. Please check your internet connection.",
            details,
        ),
        RemoteError::MalformedReply(_) => Pill::error(
            "Unexpected Response",
            "The vision model returned a reply that could not be read. Please try again.",
            details,
        ),
        RemoteError::HttpClient(_) | RemoteError::ImageRead(_) => {
            Pill::error("Unable to identify the pill.", "Please try again later.", details)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::pipeline::remote::types::TransportResponse;

    /// Transport that replays a fixed script and records every call.
    #[derive(Default)]
    pub struct ScriptedTransport {
        script: Mutex<VecDeque<Result<TransportResponse, RemoteError>>>,
        calls: Mutex<Vec<(String, tokio::time::Instant)>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn then_status(self, status: u16, body: &str) -> Self {
            self.push(Ok(TransportResponse {
                status,
                retry_after: None,
                body: body.to_string(),
            }))
        }

        pub fn then_rate_limited(self, retry_after: Option<&str>) -> Self {
            self.push(Ok(TransportResponse {
                status: 429,
                retry_after: retry_after.map(str::to_string),
                body: "rate limited".into(),
            }))
        }

        pub fn then_reply(self, content: &str) -> Self {
            let body = serde_json::json!({ "choices": [{ "message": { "content": content } }] });
            self.then_status(200, &body.to_string())
        }

        pub fn then_error(self, err: RemoteError) -> Self {
            self.push(Err(err))
        }

        fn push(self, step: Result<TransportResponse, RemoteError>) -> Self {
            self.script.lock().unwrap().push_back(step);
            self
        }

        /// Models requested, in order.
        pub fn models(&self) -> Vec<String> {
            self.calls.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
        }

        /// Elapsed (virtual) time between consecutive calls, in seconds.
        pub fn gaps_secs(&self) -> Vec<u64> {
            let calls = self.calls.lock().unwrap();
            calls
                .windows(2)
                .map(|w| (w[1].1 - w[0].1).as_secs())
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl VisionTransport for ScriptedTransport {
        async fn send(
            &self,
            _api_key: &str,
            request: &ChatCompletionRequest,
        ) -> Result<TransportResponse, RemoteError> {
            self.calls
                .lock()
                .unwrap()
                .push((request.model.clone(), tokio::time::Instant::now()));
            let step = self.script.lock().unwrap().pop_front();
            step.unwrap_or_else(|| {
                Ok(TransportResponse {
                    status: 429,
                    retry_after: None,
                    body: "script exhausted".into(),
                })
            })
        }
    }
}
