// crates/brevis/src/service.rs

//! Summarizer: 要約リクエストの統合ファサード。
//!
//! 1. 入力検証（テキストと API キー）
//! 2. マークアップ除去
//! 3. プロンプト構築
//! 4. 上流呼び出し（1 回のみ、リトライなし）
//! 5. 要約テキストの抽出

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::errors::{BrevisError, BrevisResult};
use crate::markup::strip_markup;
use crate::prompt::build_summary_prompt;
use crate::upstream::{GenerateContentRequest, GenerationBackend, extract_summary};

/// テキストまたは API キーが欠けている場合の理由文
pub const MISSING_TEXT_OR_KEY: &str = "Missing text or API key";

/// 要約ファサード
///
/// 上流バックエンドは差し替え可能（本番: `GeminiClient`、テスト: スタブ）。
#[derive(Clone)]
pub struct Summarizer {
  backend: Arc<dyn GenerationBackend>,
}

impl Summarizer {
  /// バックエンドを指定して作成
  #[must_use]
  pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
    Self { backend }
  }

  /// テキストを要約する
  ///
  /// # Arguments
  /// * `text` - 要約対象（HTML 断片を含んでもよい）
  /// * `api_key` - 上流の認証情報。`None` または空文字列は未設定として扱う
  ///
  /// # Errors
  /// - `InvalidRequest`: テキストまたは API キーが空（上流は呼ばない）
  /// - `UpstreamEmptyResult`: 上流のレスポンスに要約テキストがない
  /// - `Transport`: 上流に到達できない、またはレスポンスが JSON でない
  pub async fn summarize(&self, text: &str, api_key: Option<&str>) -> BrevisResult<String> {
    let api_key = match api_key {
      Some(key) if !key.is_empty() && !text.is_empty() => key,
      _ => return Err(BrevisError::invalid_request(MISSING_TEXT_OR_KEY)),
    };

    let clean_text = strip_markup(text);
    debug!(
      original_len = text.len(),
      clean_len = clean_text.len(),
      "マークアップを除去しました"
    );

    let request = GenerateContentRequest::user_prompt(build_summary_prompt(&clean_text));

    let payload = self.backend.generate_content(&request, api_key).await.map_err(|e| {
      error!(error = %e, "要約 API の呼び出しに失敗しました");
      e
    })?;

    let summary = extract_summary(&payload).map_err(|e| {
      error!(payload = %payload, "上流から要約が返されませんでした");
      e
    })?;

    info!(summary_len = summary.len(), "要約を取得しました");

    Ok(summary)
  }
}
