// crates/brevis/src/store.rs

//! SummaryStore: プロセス内の要約レコード保存領域。
//!
//! - 追記のみ（更新・削除なし）
//! - 挿入順を保持
//! - プロセス終了で消える（永続化なし）

use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use crate::models::{NewSummary, SummaryRecord};

/// 追記専用の要約ストア。
///
/// ロックは 1 回の追記または 1 回のスナップショット取得の間だけ保持される。
/// 読み手は常に、読み取り時点までに追記されたレコードの先頭部分を完全な形で観測する。
#[derive(Debug, Default)]
pub struct SummaryStore {
  records: RwLock<Vec<SummaryRecord>>,
}

impl SummaryStore {
  /// 空のストアを作成
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// 現在時刻をタイムスタンプとして付与し、末尾に追記する。
  ///
  /// 追記されたレコードのコピーを返す。
  pub fn append(&self, summary: NewSummary) -> SummaryRecord {
    let record = summary.into_record(Utc::now().timestamp_millis());

    // 追記途中で panic するコードはないため、ポイズン状態でもデータは整合している
    let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
    records.push(record.clone());

    record
  }

  /// 全レコードを挿入順でコピーして返す。
  pub fn list(&self) -> Vec<SummaryRecord> {
    self.records.read().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// 保存済みレコード数
  pub fn len(&self) -> usize {
    self.records.read().unwrap_or_else(PoisonError::into_inner).len()
  }

  /// レコードが 1 件もないか
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
