//! RecordStore port - 永続化された WorkOrder コレクションの正本（source of truth）
//!
//! 永続状態の読み書きはすべてこの trait を通ります。
//!
//! # 設計原則
//! - どの操作も「全件読み → 全件書き」。インデックスも差分更新もない
//! - load と save の間は排他されない。並行する書き込みはファイル全体の
//!   last-write-wins になる（単一プロセス・低頻度アクセスを前提に許容）
//! - 不在（NotFound）はエラーではなく `None` / `false` で返す

use async_trait::async_trait;

use crate::domain::{NewWorkOrder, StoreError, WorkOrder, WorkOrderId, WorkOrderUpdate};

/// Record store port (interface).
///
/// 本番はファイル実装（`JsonFileStore`）、開発・テストはインメモリ実装
/// （`InMemoryStore`）が入る差し替えポイントです。
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// 全件を読む。バッキングファイルが無い・壊れている場合は空の
    /// コレクションとして自己修復し、空列を返す（実装側の責務）。
    async fn load_all(&self) -> Result<Vec<WorkOrder>, StoreError>;

    /// 全件を書き戻す（ファイル全体を上書き）。
    async fn save_all(&self, records: &[WorkOrder]) -> Result<(), StoreError>;

    /// id で 1 件探す（線形走査で十分な規模）。
    async fn find_by_id(&self, id: WorkOrderId) -> Result<Option<WorkOrder>, StoreError>;

    /// 新しいレコードを採番・タイムスタンプ付与のうえ末尾に追加する。
    async fn insert(&self, new: NewWorkOrder) -> Result<WorkOrder, StoreError>;

    /// 指定フィールドだけをマージして書き戻す。id が無ければ書き込みを
    /// 行わず `None`。`updated_at` は常に再スタンプされる。
    async fn replace(
        &self,
        id: WorkOrderId,
        update: WorkOrderUpdate,
    ) -> Result<Option<WorkOrder>, StoreError>;

    /// id のレコードを取り除く。無ければ書き込みを行わず `false`。
    async fn delete_by_id(&self, id: WorkOrderId) -> Result<bool, StoreError>;
}
