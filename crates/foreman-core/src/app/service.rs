//! WorkOrderService - 検証と委譲のアプリケーション層
//!
//! boundary（HTTP など）が呼ぶ 5 つの操作を提供します。どの操作も
//! 「構文検証 → ストアへ委譲」の順で、ストアに触る前に検証エラーを
//! 確定させます（部分的な変更を残さないため）。
//!
//! # 使用例
//! ```ignore
//! let service = WorkOrderService::new(JsonFileStore::new("work_orders.json"));
//! let created = service
//!     .create(WorkOrderDraft::new("Fix HVAC", "Repair the rooftop unit", "High", "Open"))
//!     .await?;
//! service.update(&created.id.to_string(), patch).await?;
//! ```
//!
//! # 不在（NotFound）の扱い
//! update / remove は変更を試みる前に存在確認をします。見つからない場合は
//! `None` / `false` を返すだけで書き込みは発生せず、boundary は不在を
//! 決定的に 404 相当へ写せます。

use crate::domain::{
    ServiceError, WorkOrder, WorkOrderDraft, WorkOrderId, WorkOrderPatch, validate_draft,
    validate_patch,
};
use crate::ports::RecordStore;

use super::status::WorkOrderCounts;

/// Validation + delegation over any [`RecordStore`].
pub struct WorkOrderService<S> {
    store: S,
}

impl<S: RecordStore> WorkOrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 全件を挿入順で返す（空もあり得る）。
    pub async fn list(&self) -> Result<Vec<WorkOrder>, ServiceError> {
        self.store
            .load_all()
            .await
            .map_err(|source| ServiceError::Storage {
                op: "list work orders",
                source,
            })
    }

    /// 1 件取得。id が UUID として不正なら `InvalidIdentifier`。
    pub async fn get(&self, id: &str) -> Result<Option<WorkOrder>, ServiceError> {
        let id = parse_id(id)?;
        self.store
            .find_by_id(id)
            .await
            .map_err(|source| ServiceError::Storage {
                op: "get work order",
                source,
            })
    }

    /// 新規作成。4 フィールドすべてを検証し、違反は全件まとめて返す。
    pub async fn create(&self, draft: WorkOrderDraft) -> Result<WorkOrder, ServiceError> {
        let new = validate_draft(&draft).map_err(ServiceError::ValidationFailed)?;

        tracing::debug!(title = %new.title, "creating work order");
        self.store
            .insert(new)
            .await
            .map_err(|source| ServiceError::Storage {
                op: "create work order",
                source,
            })
    }

    /// 部分更新。提供されたフィールドだけを検証・反映する。
    ///
    /// patch の `id` / `updatedAt` は無視される（id は不変、タイムスタンプは
    /// ストアが再スタンプ）。可変フィールドがひとつも無い patch は
    /// `ValidationFailed`。id が存在しなければ書き込みせず `None`。
    pub async fn update(
        &self,
        id: &str,
        patch: WorkOrderPatch,
    ) -> Result<Option<WorkOrder>, ServiceError> {
        let id = parse_id(id)?;
        let update = validate_patch(&patch).map_err(ServiceError::ValidationFailed)?;

        // 存在確認を先に行う。不在と検証エラーを混ぜないため
        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(|source| ServiceError::Storage {
                op: "update work order",
                source,
            })?;
        if existing.is_none() {
            return Ok(None);
        }

        tracing::debug!(%id, "updating work order");
        self.store
            .replace(id, update)
            .await
            .map_err(|source| ServiceError::Storage {
                op: "update work order",
                source,
            })
    }

    /// 削除。id が存在しなければ `false`（二度目の削除もエラーではない）。
    pub async fn remove(&self, id: &str) -> Result<bool, ServiceError> {
        let id = parse_id(id)?;

        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(|source| ServiceError::Storage {
                op: "remove work order",
                source,
            })?;
        if existing.is_none() {
            return Ok(false);
        }

        tracing::debug!(%id, "removing work order");
        self.store
            .delete_by_id(id)
            .await
            .map_err(|source| ServiceError::Storage {
                op: "remove work order",
                source,
            })
    }

    /// ステータス別の件数ビュー。
    pub async fn counts(&self) -> Result<WorkOrderCounts, ServiceError> {
        Ok(WorkOrderCounts::tally(&self.list().await?))
    }
}

fn parse_id(raw: &str) -> Result<WorkOrderId, ServiceError> {
    WorkOrderId::parse(raw).ok_or_else(|| ServiceError::InvalidIdentifier(raw.to_string()))
}
