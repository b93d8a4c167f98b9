//! エラー定義

use thiserror::Error;

/// 上流 API との通信に関するエラー
///
/// タイムアウト、接続失敗、レスポンスのデコード失敗などを含む。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
  /// HTTP クライアントの構築に失敗
  #[error("HTTP クライアントの構築に失敗しました: {0}")]
  ClientBuild(#[source] reqwest::Error),

  /// リクエスト送信の失敗（接続エラー、タイムアウト等）
  #[error("上流へのリクエストに失敗しました: {0}")]
  Request(#[source] reqwest::Error),

  /// レスポンスボディの読み取り失敗
  #[error("上流レスポンスの読み取りに失敗しました: {0}")]
  Body(#[source] reqwest::Error),

  /// レスポンスボディが JSON としてデコードできない
  #[error("上流レスポンスの JSON デコードに失敗しました: {0}")]
  Decode(#[source] serde_json::Error),
}

/// brevis クレート全体のエラー型
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BrevisError {
  /// 呼び出し側の入力が不足している（外部呼び出しや保存は行われない）
  #[error("{reason}")]
  InvalidRequest {
    /// 利用者に返してよい理由文
    reason: String,
  },

  /// 上流には到達したが、要約テキストが含まれていなかった
  #[error("上流から要約が返されませんでした")]
  UpstreamEmptyResult,

  /// 上流に到達できない、またはレスポンスが解釈できない
  #[error(transparent)]
  Transport(#[from] TransportError),
}

impl BrevisError {
  /// 入力不足エラーを作成
  #[must_use]
  pub fn invalid_request(reason: impl Into<String>) -> Self {
    Self::InvalidRequest {
      reason: reason.into(),
    }
  }
}

/// brevis クレートの Result 型エイリアス
pub type BrevisResult<T> = Result<T, BrevisError>;
