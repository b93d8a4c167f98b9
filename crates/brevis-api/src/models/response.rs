//! Response Model Definition

use serde::Serialize;

/// Message returned after a summary is saved
pub const SAVED_MESSAGE: &str = "Summary saved successfully.";

/// Summarization Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeResponse {
  /// Summary text exactly as returned upstream
  pub summary: String,
}

/// Acknowledgement Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
  /// Human-readable message
  pub message: String,
}

impl MessageResponse {
  /// Acknowledgement for a saved summary
  #[must_use]
  pub fn saved() -> Self {
    Self {
      message: SAVED_MESSAGE.to_string(),
    }
  }
}
