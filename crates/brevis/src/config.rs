// crates/brevis/src/config.rs

use std::time::Duration;

/// Base URL of the public Gemini REST API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for summarization unless overridden.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Connection settings for the upstream generative-text endpoint.
///
/// The credential is deliberately not part of this struct: it is passed per call
/// so that a missing key can be reported as a request error instead of a startup error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
  /// Base URL up to (but excluding) `/models/...`
  pub base_url: String,
  /// Model name (e.g. `gemini-1.5-flash`)
  pub model: String,
  /// Per-request timeout. `None` means the request may wait indefinitely.
  pub timeout: Option<Duration>,
}

impl Default for UpstreamConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
      model: DEFAULT_GEMINI_MODEL.to_string(),
      timeout: None,
    }
  }
}

impl UpstreamConfig {
  /// Returns the `generateContent` endpoint URL (without the credential query).
  ///
  /// # Examples
  /// - base `https://host/v1beta`, model `m` → `https://host/v1beta/models/m:generateContent`
  #[must_use]
  pub fn generate_content_url(&self) -> String {
    format!(
      "{}/models/{}:generateContent",
      self.base_url.trim_end_matches('/'),
      self.model
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_points_at_public_gemini() {
    let config = UpstreamConfig::default();
    assert_eq!(config.base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
    assert!(config.timeout.is_none());
  }

  #[test]
  fn generate_content_url_trims_trailing_slash() {
    let config = UpstreamConfig {
      base_url: "http://127.0.0.1:9999/v1beta/".to_string(),
      model: "gemini-test".to_string(),
      timeout: None,
    };
    assert_eq!(
      config.generate_content_url(),
      "http://127.0.0.1:9999/v1beta/models/gemini-test:generateContent"
    );
  }
}
