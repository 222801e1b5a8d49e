//! IdGenerator port - ID 採番の抽象化
//!
//! ストアが insert 時に使う採番器です。テスト容易性のために trait に
//! しています（衝突時の再採番をテストするには、わざと重複を返す採番器を
//! 差し込める必要がある）。

use crate::domain::WorkOrderId;

/// IdGenerator は新しい WorkOrderId を採番
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数タスクから使える）
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> WorkOrderId;
}

/// UuidGenerator は UUID v4 ベースの採番器（本番用）
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> WorkOrderId {
        WorkOrderId::generate()
    }
}
