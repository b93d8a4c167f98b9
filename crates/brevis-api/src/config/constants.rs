//! API設定の定数定義

/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 10000;

/// デフォルトの待ち受けホスト
///
/// コンテナやPaaS上での利用を想定し、全インターフェースで待ち受ける。
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// 待ち受けポートの環境変数名
pub const ENV_PORT: &str = "PORT";

/// 待ち受けホストの環境変数名
pub const ENV_BIND_HOST: &str = "BREVIS_BIND_HOST";

/// Gemini API キーの環境変数名
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Gemini API ベース URL の環境変数名
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_API_BASE_URL";

/// Gemini モデル名の環境変数名
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";

/// 上流タイムアウト秒数の環境変数名（未設定ならタイムアウトなし）
pub const ENV_GEMINI_TIMEOUT_SECS: &str = "GEMINI_TIMEOUT_SECS";
