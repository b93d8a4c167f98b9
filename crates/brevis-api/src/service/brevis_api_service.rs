//! Summarization and Summary Store Service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use brevis::models::SummaryRecord;
use brevis::store::SummaryStore;
use brevis::upstream::{GeminiClient, GenerationBackend};
use brevis::Summarizer;

use crate::config::Config;
use crate::errors::Result;
use crate::models::{MessageResponse, SaveSummaryRequest, SummarizeRequest, SummarizeResponse};

/// Common interface for the API service
///
/// This trait allows swapping production implementation (`BrevisApiServiceFull`) with
/// test stubs/mocks.
#[async_trait]
pub trait BrevisApiService: Send + Sync {
  /// Summarizes the request text
  ///
  /// # Errors
  /// - Input error (missing text or credential)
  /// - Upstream returned no summary
  /// - Upstream transport failure
  async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResponse>;

  /// Appends a summary record
  ///
  /// # Errors
  /// Input error if `title` or `summary` is missing
  fn save_summary(&self, request: SaveSummaryRequest) -> Result<MessageResponse>;

  /// Returns all saved records in insertion order
  fn list_summaries(&self) -> Vec<SummaryRecord>;
}

/// Production service
///
/// Holds the summarizer, the process-wide store and the credential read at startup.
#[derive(Clone)]
pub struct BrevisApiServiceFull {
  summarizer: Summarizer,
  store: Arc<SummaryStore>,
  api_key: Option<String>,
}

impl BrevisApiServiceFull {
  /// Initializes the service with the Gemini client
  ///
  /// # Arguments
  /// * `config` - Configuration (credential and upstream settings)
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built
  pub fn new(config: &Config) -> Result<Self> {
    let client = GeminiClient::new(config.upstream.clone())?;
    Ok(Self::with_backend(config, Arc::new(client)))
  }

  /// Initializes the service with an arbitrary upstream backend
  #[must_use]
  pub fn with_backend(config: &Config, backend: Arc<dyn GenerationBackend>) -> Self {
    Self {
      summarizer: Summarizer::new(backend),
      store: Arc::new(SummaryStore::new()),
      api_key: config.api_key.clone(),
    }
  }

  /// The process-wide summary store
  pub fn store(&self) -> &Arc<SummaryStore> {
    &self.store
  }
}

#[async_trait]
impl BrevisApiService for BrevisApiServiceFull {
  async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResponse> {
    let text = request.text.unwrap_or_default();
    let summary = self.summarizer.summarize(&text, self.api_key.as_deref()).await?;
    Ok(SummarizeResponse { summary })
  }

  fn save_summary(&self, request: SaveSummaryRequest) -> Result<MessageResponse> {
    let new_summary = request.into_new_summary()?;
    let record = self.store.append(new_summary);

    info!(
      title = %record.title,
      source = ?record.source,
      published_at = ?record.published_at,
      url = ?record.url,
      summary = %record.summary,
      timestamp = record.timestamp,
      "要約を保存しました"
    );

    Ok(MessageResponse::saved())
  }

  fn list_summaries(&self) -> Vec<SummaryRecord> {
    let records = self.store.list();
    info!(count = records.len(), "保存済みの要約を返します");
    records
  }
}

#[cfg(test)]
mod tests {
  use std::io;
  use std::sync::Mutex;

  use serde_json::{Value as JsonValue, json};
  use tracing_subscriber::fmt::writer::MakeWriter;

  use brevis::errors::BrevisResult;
  use brevis::upstream::GenerateContentRequest;

  use super::*;

  struct FixedBackend;

  #[async_trait]
  impl GenerationBackend for FixedBackend {
    async fn generate_content(
      &self,
      _request: &GenerateContentRequest,
      _api_key: &str,
    ) -> BrevisResult<JsonValue> {
      Ok(json!({ "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }] }))
    }
  }

  /// ログ出力を取り込むバッファ
  #[derive(Clone, Default)]
  struct SharedLogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
  }

  impl SharedLogBuffer {
    fn as_string(&self) -> String {
      match self.inner.lock() {
        Ok(guard) => String::from_utf8_lossy(&guard).to_string(),
        Err(_) => String::new(),
      }
    }
  }

  struct SharedLogWriter {
    inner: Arc<Mutex<Vec<u8>>>,
  }

  impl<'a> MakeWriter<'a> for SharedLogBuffer {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
      SharedLogWriter {
        inner: Arc::clone(&self.inner),
      }
    }
  }

  impl io::Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      match self.inner.lock() {
        Ok(mut guard) => {
          guard.extend_from_slice(buf);
          Ok(buf.len())
        }
        Err(_) => Err(io::Error::other("failed to lock shared log buffer")),
      }
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  fn create_test_config(api_key: Option<&str>) -> Config {
    Config {
      bind_addr: "127.0.0.1:0".to_string(),
      api_key: api_key.map(str::to_string),
      upstream: brevis::UpstreamConfig::default(),
    }
  }

  #[test]
  fn test_service_creation_with_gemini_client() {
    let service = BrevisApiServiceFull::new(&create_test_config(None));
    assert!(service.is_ok());
  }

  #[tokio::test]
  async fn test_summarize_without_key_is_invalid_request() {
    let service =
      BrevisApiServiceFull::with_backend(&create_test_config(None), Arc::new(FixedBackend));
    let err = service
      .summarize(SummarizeRequest {
        text: Some("text".to_string()),
      })
      .await
      .unwrap_err();
    assert_eq!(err.code(), "invalid_request");
  }

  #[tokio::test]
  async fn test_summarize_success() {
    let service =
      BrevisApiServiceFull::with_backend(&create_test_config(Some("k")), Arc::new(FixedBackend));
    let response = service
      .summarize(SummarizeRequest {
        text: Some("text".to_string()),
      })
      .await
      .unwrap();
    assert_eq!(response.summary, "ok");
  }

  #[test]
  fn test_save_then_list() {
    let service =
      BrevisApiServiceFull::with_backend(&create_test_config(None), Arc::new(FixedBackend));
    let request = SaveSummaryRequest {
      title: Some("A".to_string()),
      summary: Some("B".to_string()),
      ..SaveSummaryRequest::default()
    };

    let ack = service.save_summary(request).unwrap();
    assert_eq!(ack, MessageResponse::saved());

    let records = service.list_summaries();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "A");
    assert_eq!(records[0].summary, "B");
  }

  #[test]
  fn test_invalid_save_leaves_store_untouched() {
    let service =
      BrevisApiServiceFull::with_backend(&create_test_config(None), Arc::new(FixedBackend));
    let err = service
      .save_summary(SaveSummaryRequest {
        title: Some("A".to_string()),
        ..SaveSummaryRequest::default()
      })
      .unwrap_err();

    assert_eq!(err.code(), "invalid_request");
    assert!(service.store().is_empty());
  }

  #[test]
  fn test_save_logs_the_appended_record() {
    let logs = SharedLogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
      .with_ansi(false)
      .without_time()
      .with_writer(logs.clone())
      .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let service =
      BrevisApiServiceFull::with_backend(&create_test_config(None), Arc::new(FixedBackend));
    service
      .save_summary(SaveSummaryRequest {
        title: Some("Launch day".to_string()),
        source: Some(json!("Example News")),
        url: Some(json!("https://example.com/launch")),
        summary: Some("- rocket went up".to_string()),
        ..SaveSummaryRequest::default()
      })
      .unwrap();

    let output = logs.as_string();
    assert!(output.contains("Launch day"), "log: {output}");
    assert!(output.contains("Example News"), "log: {output}");
    assert!(output.contains("https://example.com/launch"), "log: {output}");
    assert!(output.contains("- rocket went up"), "log: {output}");
  }
}
