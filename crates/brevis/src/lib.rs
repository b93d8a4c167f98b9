//! brevis 要約リレーライブラリー
//!
//! 記事テキストを生成系 API (Gemini) に中継して要約し、
//! クライアントが保存した要約レコードをプロセス内に保持する。

/// 設定モジュール - 上流 API の接続設定を定義
pub mod config;

/// エラーモジュール - BrevisError, BrevisResult 等のエラー型を定義
pub mod errors;

/// マークアップ除去モジュール - 入力テキストからタグを取り除く
pub mod markup;

/// データモデルモジュール - SummaryRecord, NewSummary 等のデータ構造を定義
pub mod models;

/// プロンプトモジュール - 要約プロンプトのテンプレート
pub mod prompt;

/// サービスモジュール - Summarizer 等の上位レベルAPIを提供
pub mod service;

/// ストアモジュール - 要約レコードのインメモリ保存
pub mod store;

/// 上流モジュール - Gemini generateContent クライアントとワイヤ形式
pub mod upstream;

/// 再エクスポート
pub use config::UpstreamConfig;
pub use errors::{BrevisError, BrevisResult};
pub use models::{NewSummary, SummaryRecord};
pub use service::Summarizer;
pub use store::SummaryStore;
