//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
};
use tracing::{debug, warn};

use brevis::models::SummaryRecord;

use crate::errors::ApiError;
use crate::models::{MessageResponse, SaveSummaryRequest, SummarizeRequest, SummarizeResponse};

use super::state::AppState;

/// 生存確認で返す固定文言
pub const LIVENESS_TEXT: &str = "API is running successful";

/// Json エクストラクタの失敗を JSON 形式の 400 に揃える
fn reject_body(rejection: JsonRejection) -> ApiError {
  warn!(error = %rejection.body_text(), "リクエストボディを解釈できません");
  ApiError::invalid_request("Invalid JSON body")
}

/// POST /api/summarize エンドポイント
///
/// テキストからタグを除去し、上流 API で 3 点の箇条書きに要約する。
///
/// # Request Body
/// ```json
/// { "text": "<p>記事本文</p>" }
/// ```
///
/// # Response
/// - 200 OK: `{ "summary": "..." }`
/// - 400 Bad Request: テキストまたは API キーが未設定
/// - 500 Internal Server Error: 上流が要約を返さない、または通信失敗
pub async fn post_summarize(
  State(state): State<AppState>,
  payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
  let Json(request) = payload.map_err(reject_body)?;
  debug!(
    text_len = request.text.as_ref().map_or(0, String::len),
    "要約リクエストを受信"
  );

  let response = state.service.summarize(request).await?;

  Ok(Json(response))
}

/// POST /api/save-summary エンドポイント
///
/// # Response
/// - 201 Created: `{ "message": "Summary saved successfully." }`
/// - 400 Bad Request: `title` または `summary` が未設定
pub async fn post_save_summary(
  State(state): State<AppState>,
  payload: Result<Json<SaveSummaryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
  let Json(request) = payload.map_err(reject_body)?;
  let response = state.service.save_summary(request)?;

  Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/summaries エンドポイント
///
/// 保存済みの要約を保存順で返す。
pub async fn get_summaries(State(state): State<AppState>) -> Json<Vec<SummaryRecord>> {
  Json(state.service.list_summaries())
}

/// GET / エンドポイント
pub async fn liveness() -> &'static str {
  LIVENESS_TEXT
}
