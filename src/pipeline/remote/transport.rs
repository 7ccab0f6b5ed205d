use std::time::Duration;

use async_trait::async_trait;

use super::types::{ChatCompletionRequest, TransportResponse};
use super::RemoteError;

/// Sends one chat-completions request. Any HTTP status is returned as data;
/// only a failure to get a response at all is an error.
#[async_trait]
pub trait VisionTransport: Send + Sync {
    async fn send(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportResponse, RemoteError>;
}

/// HTTPS transport to an OpenAI-compatible endpoint.
pub struct OpenAiTransport {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl OpenAiTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::HttpClient(e.to_string()))?;

        Ok(Self {
            url: url.to_string(),
            client,
            timeout,
        })
    }
}

#[async_trait]
impl VisionTransport for OpenAiTransport {
    async fn send(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<TransportResponse, RemoteError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key.trim())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RemoteError::Network(format!("Request timed out after {}s", self.timeout.as_secs()))
                } else {
                    RemoteError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        tracing::debug!(status, model = %request.model, body_len = body.len(), "Vision API response");

        Ok(TransportResponse {
            status,
            retry_after,
            body,
        })
    }
}
