//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{get_summaries, liveness, post_save_summary, post_summarize};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(liveness))
    .route("/api/summarize", post(post_summarize))
    .route("/api/save-summary", post(post_save_summary))
    .route("/api/summaries", get(get_summaries))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// サーバーを起動する
///
/// Ctrl-C または SIGTERM を受けると処理中のリクエストを終えてから停止する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  tracing::info!("サーバーを停止しました");

  Ok(())
}

/// 停止シグナル（Ctrl-C / SIGTERM）を待つ
pub async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "Ctrl-C ハンドラーの登録に失敗しました");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "SIGTERM ハンドラーの登録に失敗しました");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }

  tracing::info!("停止シグナルを受信しました");
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use async_trait::async_trait;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{MessageResponse, SaveSummaryRequest, SummarizeRequest, SummarizeResponse};
  use crate::service::BrevisApiService;
  use brevis::models::SummaryRecord;

  /// テスト用のダミー実装（上流を一切触らない）
  #[derive(Clone)]
  struct DummyService;

  #[async_trait]
  impl BrevisApiService for DummyService {
    async fn summarize(&self, _request: SummarizeRequest) -> ApiResult<SummarizeResponse> {
      Ok(SummarizeResponse {
        summary: String::new(),
      })
    }

    fn save_summary(&self, _request: SaveSummaryRequest) -> ApiResult<MessageResponse> {
      Ok(MessageResponse::saved())
    }

    fn list_summaries(&self) -> Vec<SummaryRecord> {
      Vec::new()
    }
  }

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:10001".to_string(),
      api_key: None,
      upstream: brevis::UpstreamConfig::default(),
    };

    // スタブを注入（上流呼び出し不要）
    let service = Arc::new(DummyService) as Arc<dyn BrevisApiService>;
    AppState::new(config, service)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // ルーターが正常に作成できることを確認
  }
}
