//! Data Model Definition
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::errors::{BrevisError, BrevisResult};

/// Reason returned when `title` or `summary` is missing.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields.";

/// A saved article summary.
///
/// Created once by [`SummaryStore::append`](crate::store::SummaryStore::append) and never mutated.
/// Serialized with camelCase keys; absent optional fields are omitted.
/// Optional fields hold whatever JSON value the client sent (usually a string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
  /// Article title
  pub title: String,

  /// Publisher or feed name
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source: Option<JsonValue>,

  /// Publication time as supplied by the client (not parsed)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub published_at: Option<JsonValue>,

  /// Article URL
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<JsonValue>,

  /// Summary body
  pub summary: String,

  /// Creation instant, milliseconds since the Unix epoch
  pub timestamp: i64,
}

/// A validated summary waiting to be stored.
///
/// Guarantees non-empty `title` and `summary`; the optional fields are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSummary {
  title: String,
  summary: String,
  source: Option<JsonValue>,
  published_at: Option<JsonValue>,
  url: Option<JsonValue>,
}

impl NewSummary {
  /// Validates the required fields.
  ///
  /// # Errors
  /// `InvalidRequest` if `title` or `summary` is empty.
  pub fn new(title: impl Into<String>, summary: impl Into<String>) -> BrevisResult<Self> {
    let title = title.into();
    let summary = summary.into();
    if title.is_empty() || summary.is_empty() {
      return Err(BrevisError::invalid_request(MISSING_REQUIRED_FIELDS));
    }

    Ok(Self {
      title,
      summary,
      source: None,
      published_at: None,
      url: None,
    })
  }

  /// Builds from possibly-absent required fields (as they arrive in a request body).
  ///
  /// # Errors
  /// `InvalidRequest` if `title` or `summary` is absent or empty.
  pub fn from_parts(title: Option<String>, summary: Option<String>) -> BrevisResult<Self> {
    match (title, summary) {
      (Some(title), Some(summary)) => Self::new(title, summary),
      _ => Err(BrevisError::invalid_request(MISSING_REQUIRED_FIELDS)),
    }
  }

  /// Sets the source
  #[must_use]
  pub fn with_source(mut self, source: Option<JsonValue>) -> Self {
    self.source = source;
    self
  }

  /// Sets the publication time
  #[must_use]
  pub fn with_published_at(mut self, published_at: Option<JsonValue>) -> Self {
    self.published_at = published_at;
    self
  }

  /// Sets the URL
  #[must_use]
  pub fn with_url(mut self, url: Option<JsonValue>) -> Self {
    self.url = url;
    self
  }

  /// Title
  pub fn title(&self) -> &str {
    &self.title
  }

  /// Summary body
  pub fn summary(&self) -> &str {
    &self.summary
  }

  /// Stamps the summary with its creation instant.
  pub(crate) fn into_record(self, timestamp: i64) -> SummaryRecord {
    SummaryRecord {
      title: self.title,
      source: self.source,
      published_at: self.published_at,
      url: self.url,
      summary: self.summary,
      timestamp,
    }
  }
}
