//! Domain identifier (strongly-typed work order ID).
//!
//! # UUID v4 ベースの ID
//! 作業指示の ID は UUID v4 を使用します。
//!
//! ## UUID v4 の特性
//! - **ランダム生成**: 122-bit のランダム値。調整なしで衝突がほぼ起きない
//! - **永続化に安定**: 正規化された文字列表現をそのまま JSON に載せられる
//! - **順序情報なし**: 生成順は ID からは分からない（一覧は挿入順を保持する）
//!
//! ## Newtype パターン
//! `WorkOrderId(Uuid)` の newtype にすることで、生の `Uuid` や他の文字列と
//! 取り違えないようにしています。

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 作業指示の識別子
///
/// ストアが insert 時に採番し、以後変更されません。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkOrderId(Uuid);

impl WorkOrderId {
    /// 新しい ID をランダム生成（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// 文字列から ID をパース
    ///
    /// UUID として構文的に妥当でない文字列は `None` を返します。
    /// 呼び出し側（service 層）が `InvalidIdentifier` に変換します。
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    /// 内部の UUID を取得
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for WorkOrderId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for WorkOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
