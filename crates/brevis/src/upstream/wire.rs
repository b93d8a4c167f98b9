//! Wire format of `generateContent`.
//!
//! Request: `{contents: [{role, parts: [{text}]}]}`
//! Response: `{candidates: [{content: {parts: [{text}]}}]}`
//!
//! The response is kept as raw JSON; [`extract_summary`] walks the path to the first text.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::errors::{BrevisError, BrevisResult};

/// Role of the single conversational turn sent upstream.
const USER_ROLE: &str = "user";

/// `generateContent` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateContentRequest {
  /// Conversation turns
  pub contents: Vec<Content>,
}

impl GenerateContentRequest {
  /// Single user turn carrying `prompt` as its only part.
  #[must_use]
  pub fn user_prompt(prompt: impl Into<String>) -> Self {
    Self {
      contents: vec![Content {
        role: Some(USER_ROLE.to_string()),
        parts: Some(vec![Part {
          text: Some(prompt.into()),
        }]),
      }],
    }
  }

  /// Text of the first part of the first turn, if any.
  pub fn prompt_text(&self) -> Option<&str> {
    self
      .contents
      .first()?
      .parts
      .as_ref()?
      .first()?
      .text
      .as_deref()
  }
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
  /// `user` / `model`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role: Option<String>,
  /// Content segments
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parts: Option<Vec<Part>>,
}

/// A content segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
  /// Text of the segment
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
}

/// Path of the summary text inside a `generateContent` response.
///
/// Only the first candidate and its first part are inspected.
fn first_candidate_text(payload: &JsonValue) -> Option<&str> {
  payload
    .get("candidates")?
    .get(0)?
    .get("content")?
    .get("parts")?
    .get(0)?
    .get("text")?
    .as_str()
    .filter(|text| !text.is_empty())
}

/// Extracts the summary text from a raw upstream payload.
///
/// # Errors
/// `UpstreamEmptyResult` if any level of `candidates[0].content.parts[0].text` is absent,
/// of the wrong type, or empty.
pub fn extract_summary(payload: &JsonValue) -> BrevisResult<String> {
  first_candidate_text(payload)
    .map(str::to_string)
    .ok_or(BrevisError::UpstreamEmptyResult)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn request_serializes_to_expected_shape() {
    let request = GenerateContentRequest::user_prompt("hello");
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
      json,
      json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
    );
    assert_eq!(request.prompt_text(), Some("hello"));
  }

  #[test]
  fn extracts_first_candidate_first_part() {
    let payload = json!({
      "candidates": [
        { "content": { "role": "model", "parts": [{ "text": "- one\n- two\n- three" }, { "text": "ignored" }] },
          "finishReason": "STOP" },
        { "content": { "parts": [{ "text": "second candidate" }] } }
      ],
      "usageMetadata": { "totalTokenCount": 42 }
    });
    assert_eq!(extract_summary(&payload).unwrap(), "- one\n- two\n- three");
  }

  #[test]
  fn missing_candidates_is_empty_result() {
    let payload = json!({ "error": { "code": 400, "message": "API key not valid" } });
    assert!(matches!(
      extract_summary(&payload),
      Err(BrevisError::UpstreamEmptyResult)
    ));
  }

  #[test]
  fn empty_candidates_or_parts_is_empty_result() {
    for payload in [
      json!({ "candidates": [] }),
      json!({ "candidates": null }),
      json!({ "candidates": [{}] }),
      json!({ "candidates": [{ "content": {} }] }),
      json!({ "candidates": [{ "content": { "parts": [] } }] }),
      json!({ "candidates": [{ "content": { "parts": [{}] } }] }),
      json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
    ] {
      assert!(
        matches!(extract_summary(&payload), Err(BrevisError::UpstreamEmptyResult)),
        "payload should yield no summary: {payload}"
      );
    }
  }

  #[test]
  fn malformed_siblings_do_not_hide_first_text() {
    let junk_second_candidate = json!({
      "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }, "junk"]
    });
    assert_eq!(extract_summary(&junk_second_candidate).unwrap(), "ok");

    let non_string_second_part = json!({
      "candidates": [{ "content": { "parts": [{ "text": "ok" }, { "text": 5 }] } }]
    });
    assert_eq!(extract_summary(&non_string_second_part).unwrap(), "ok");
  }

  #[test]
  fn malformed_shape_is_empty_result() {
    for payload in [
      json!([1, 2, 3]),
      json!("text"),
      json!({ "candidates": "not a list" }),
      json!({ "candidates": [{ "content": { "parts": [{ "text": 7 }] } }] }),
    ] {
      assert!(matches!(
        extract_summary(&payload),
        Err(BrevisError::UpstreamEmptyResult)
      ));
    }
  }
}
