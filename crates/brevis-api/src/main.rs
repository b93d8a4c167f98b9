//! brevis-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use brevis_api::ApiError;
use brevis_api::api::AppState;
use brevis_api::api::run_server;
use brevis_api::config::Config;
use brevis_api::service::BrevisApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env があれば読み込む（なくてもよい）
  let dotenv_loaded = dotenvy::dotenv().is_ok();

  // ロギングの初期化
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    model = %config.upstream.model,
    api_key_configured = config.api_key.is_some(),
    dotenv_loaded,
    "設定を読み込みました"
  );
  if config.api_key.is_none() {
    tracing::warn!("GEMINI_API_KEY が未設定です。要約リクエストは 400 になります");
  }

  // サービスの初期化（要約ストアはここで 1 つだけ作られる）
  let service = Arc::new(BrevisApiServiceFull::new(&config)?);
  tracing::info!("要約サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
