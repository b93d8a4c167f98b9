//! リクエストモデル定義
//!
//! 必須項目も `Option` で受け取り、欠落はサービス層で 400 として扱う。
//! （Json エクストラクタ側で弾くとエラー形式が揃わないため）
//! 任意項目は JSON 値のまま受け取り、検証せずに保存する。

use serde::Deserialize;
use serde_json::Value as JsonValue;

use brevis::errors::BrevisResult;
use brevis::models::NewSummary;

/// 要約リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
  /// 要約対象のテキスト（HTML を含んでもよい）
  #[serde(default)]
  pub text: Option<String>,
}

/// 要約保存リクエスト
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSummaryRequest {
  /// 記事タイトル（必須）
  #[serde(default)]
  pub title: Option<String>,
  /// 配信元
  #[serde(default)]
  pub source: Option<JsonValue>,
  /// 公開日時（検証しない）
  #[serde(default)]
  pub published_at: Option<JsonValue>,
  /// 記事 URL
  #[serde(default)]
  pub url: Option<JsonValue>,
  /// 要約本文（必須）
  #[serde(default)]
  pub summary: Option<String>,
}

impl SaveSummaryRequest {
  /// 必須項目を検証して保存用の値に変換する
  ///
  /// # Errors
  /// `title` または `summary` が欠落・空の場合
  pub fn into_new_summary(self) -> BrevisResult<NewSummary> {
    Ok(
      NewSummary::from_parts(self.title, self.summary)?
        .with_source(self.source)
        .with_published_at(self.published_at)
        .with_url(self.url),
    )
  }
}
