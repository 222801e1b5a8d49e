//! InMemoryStore - 開発・テスト用のレコードストア
//!
//! ファイル実装と同じ契約をメモリ上で満たします。service 層のテストや
//! 使い捨てのデモ実行で、ディスクに触らずに済ませたいときに使います。
//!
//! # 実装詳細
//! - `tokio::sync::Mutex<Vec<WorkOrder>>` でコレクションを保持
//! - ロックは各呼び出しの内部だけ。呼び出しをまたぐ排他はしない
//!   （ファイル実装と同じく read-modify-write の競合は許容）

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{NewWorkOrder, StoreError, WorkOrder, WorkOrderId, WorkOrderUpdate};
use crate::ports::{Clock, IdGenerator, RecordStore, SystemClock, UuidGenerator};

/// In-memory record store.
pub struct InMemoryStore<C = SystemClock, G = UuidGenerator> {
    records: Mutex<Vec<WorkOrder>>,
    clock: C,
    ids: G,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_parts(SystemClock, UuidGenerator)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, G: IdGenerator> InMemoryStore<C, G> {
    pub fn with_parts(clock: C, ids: G) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            clock,
            ids,
        }
    }
}

#[async_trait]
impl<C: Clock, G: IdGenerator> RecordStore for InMemoryStore<C, G> {
    async fn load_all(&self) -> Result<Vec<WorkOrder>, StoreError> {
        Ok(self.records.lock().await.clone())
    }

    async fn save_all(&self, records: &[WorkOrder]) -> Result<(), StoreError> {
        *self.records.lock().await = records.to_vec();
        Ok(())
    }

    async fn find_by_id(&self, id: WorkOrderId) -> Result<Option<WorkOrder>, StoreError> {
        Ok(self.records.lock().await.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, new: NewWorkOrder) -> Result<WorkOrder, StoreError> {
        let mut records = self.records.lock().await;

        let mut id = self.ids.generate();
        while records.iter().any(|r| r.id == id) {
            id = self.ids.generate();
        }

        let record = WorkOrder {
            id,
            title: new.title,
            description: new.description,
            priority: new.priority,
            status: new.status,
            updated_at: self.clock.now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn replace(
        &self,
        id: WorkOrderId,
        update: WorkOrderUpdate,
    ) -> Result<Option<WorkOrder>, StoreError> {
        let mut records = self.records.lock().await;

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.apply(&update, self.clock.now());
        Ok(Some(record.clone()))
    }

    async fn delete_by_id(&self, id: WorkOrderId) -> Result<bool, StoreError> {
        let mut records = self.records.lock().await;

        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}
