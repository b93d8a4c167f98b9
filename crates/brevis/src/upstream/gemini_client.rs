//! Gemini `generateContent` HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use super::wire::GenerateContentRequest;
use crate::config::UpstreamConfig;
use crate::errors::{BrevisResult, TransportError};

/// Common interface for the generative-text backend
///
/// This trait allows swapping the production client (`GeminiClient`) with
/// test stubs.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
  /// Sends one `generateContent` call and returns the decoded JSON payload as-is.
  ///
  /// The payload is returned even for non-success HTTP statuses; deciding whether it
  /// carries a usable answer is left to the caller.
  ///
  /// # Errors
  /// `Transport` on connection failure, timeout, or a body that is not JSON.
  async fn generate_content(
    &self,
    request: &GenerateContentRequest,
    api_key: &str,
  ) -> BrevisResult<JsonValue>;
}

/// Client for the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiClient {
  client: Client,
  config: UpstreamConfig,
}

impl GeminiClient {
  /// Builds the client.
  ///
  /// No timeout is applied unless `config.timeout` is set.
  ///
  /// # Errors
  /// Returns an error if the underlying HTTP client cannot be built
  pub fn new(config: UpstreamConfig) -> BrevisResult<Self> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }

    let client = builder.build().map_err(TransportError::ClientBuild)?;

    Ok(Self { client, config })
  }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
  async fn generate_content(
    &self,
    request: &GenerateContentRequest,
    api_key: &str,
  ) -> BrevisResult<JsonValue> {
    // The credential travels in the query string, so only the bare endpoint is logged.
    let url = self.config.generate_content_url();
    debug!(endpoint = %url, model = %self.config.model, "generateContent を呼び出します");

    let response = self
      .client
      .post(&url)
      .query(&[("key", api_key)])
      .json(request)
      .send()
      .await
      .map_err(|e| TransportError::Request(e.without_url()))?;

    let status = response.status();
    let body = response.bytes().await.map_err(|e| TransportError::Body(e.without_url()))?;

    if !status.is_success() {
      warn!(status = status.as_u16(), "上流が失敗ステータスを返しました");
    }

    let payload = serde_json::from_slice::<JsonValue>(&body).map_err(TransportError::Decode)?;

    Ok(payload)
  }
}
