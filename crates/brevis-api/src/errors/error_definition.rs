//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// brevis クレートのエラー型をインポート
use brevis::errors::BrevisError;

/// 要約が得られなかった場合に利用者へ返す文言
const NO_SUMMARY_MESSAGE: &str = "No summary returned";

/// 上流との通信に失敗した場合に利用者へ返す文言
const SUMMARIZATION_FAILED_MESSAGE: &str = "Summarization failed.";

/// 内部エラー時に利用者へ返す文言
const INTERNAL_MESSAGE: &str = "Internal server error";

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が不足・不正
  InvalidRequest,
  /// 上流が要約を返さなかった
  UpstreamEmptyResult,
  /// 上流との通信失敗
  TransportFailure,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidRequest => "invalid_request",
      Self::UpstreamEmptyResult => "upstream_empty_result",
      Self::TransportFailure => "transport_failure",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidRequest => StatusCode::BAD_REQUEST,
      Self::UpstreamEmptyResult | Self::TransportFailure | Self::Internal | Self::Config => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

/// APIエラー
///
/// `Display` はログ向けの詳細を含む。レスポンスには [`ApiError::public_message`] のみを載せる。
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が不足・不正
  #[error("入力値が無効です: {0}")]
  InvalidRequest(String),

  /// 上流が要約を返さなかった
  #[error("上流から要約が返されませんでした")]
  UpstreamEmptyResult,

  /// 上流との通信失敗
  #[error("上流との通信に失敗しました: {0}")]
  TransportFailure(String),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidRequest(_) => ApiErrorKind::InvalidRequest,
      Self::UpstreamEmptyResult => ApiErrorKind::UpstreamEmptyResult,
      Self::TransportFailure(_) => ApiErrorKind::TransportFailure,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 利用者に返す文言
  ///
  /// 入力エラー以外は固定文言とし、上流のペイロードや内部の詳細を含めない。
  #[must_use]
  pub fn public_message(&self) -> String {
    match self {
      Self::InvalidRequest(reason) => reason.clone(),
      Self::UpstreamEmptyResult => NO_SUMMARY_MESSAGE.to_string(),
      Self::TransportFailure(_) => SUMMARIZATION_FAILED_MESSAGE.to_string(),
      Self::Internal(_) | Self::Config(_) => INTERNAL_MESSAGE.to_string(),
    }
  }

  /// 入力エラーを作成
  #[must_use]
  pub fn invalid_request(message: impl Into<String>) -> Self {
    Self::InvalidRequest(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  code: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: self.public_message(),
      code: self.code(),
    };

    (status, Json(body)).into_response()
  }
}

/// BrevisError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<BrevisError> for ApiError {
  fn from(err: BrevisError) -> Self {
    match err {
      BrevisError::InvalidRequest { reason } => ApiError::invalid_request(reason),
      BrevisError::UpstreamEmptyResult => ApiError::UpstreamEmptyResult,
      BrevisError::Transport(err) => ApiError::TransportFailure(err.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
