//! Boundary input types and their validated counterparts.
//!
//! 外側（HTTP boundary など）から入ってくるデータは文字列のままの
//! `WorkOrderDraft` / `WorkOrderPatch` で受け取り、`rules` の検証を通過した
//! ものだけが型付きの `NewWorkOrder` / `WorkOrderUpdate` になります。
//! ストアは検証済みの型しか受け取りません。

use serde::{Deserialize, Serialize};

use super::work_order::{Priority, Status};

/// Create input, as the boundary hands it over.
///
/// All fields are required; enum membership is a validation outcome here,
/// not a type error, so priority/status stay strings until validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderDraft {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
}

impl WorkOrderDraft {
    /// Convenience constructor for callers assembling a draft in code.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
            status: status.into(),
        }
    }
}

/// Update input: a partial record.
///
/// Design:
/// - Every field is optional; absent means "leave untouched".
/// - `id` and `updatedAt` are accepted but ignored. The id is immutable
///   and the store re-stamps the timestamp on every write, so neither can
///   be changed through a patch.
/// - Any key outside the entity's six is rejected at deserialization
///   (`deny_unknown_fields`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkOrderPatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub updated_at: Option<String>,
}

impl WorkOrderPatch {
    /// True when none of the four mutable fields is present.
    ///
    /// A patch carrying only the ignored `id`/`updatedAt` keys counts as
    /// empty: it would mutate nothing.
    pub fn provides_no_fields(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

/// A validated create input: trimmed strings, typed enums.
///
/// Only `rules::validate_draft` produces this; the store consumes it and
/// adds the id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkOrder {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
}

/// A validated partial update, ready for the store's merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl WorkOrderUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_rejects_unknown_keys() {
        let raw = r#"{"title": "New title", "assignee": "someone"}"#;
        assert!(serde_json::from_str::<WorkOrderPatch>(raw).is_err());
    }

    #[test]
    fn patch_accepts_ignored_id_and_timestamp_keys() {
        let raw = r#"{
            "id": "6253242b-78ee-4dbf-8461-a600fece75ca",
            "updatedAt": "2024-01-15T10:30:00Z",
            "status": "Done"
        }"#;

        let patch: WorkOrderPatch = serde_json::from_str(raw).unwrap();
        assert_eq!(patch.status.as_deref(), Some("Done"));
        assert!(!patch.provides_no_fields());
    }

    #[test]
    fn patch_with_only_ignored_keys_is_empty() {
        let raw = r#"{"id": "abc", "updatedAt": "whenever"}"#;

        // id/updatedAt はパースは通るが、可変フィールドが無いので空扱い
        let patch: WorkOrderPatch = serde_json::from_str(raw).unwrap();
        assert!(patch.provides_no_fields());
    }

    #[test]
    fn absent_keys_deserialize_to_none() {
        let patch: WorkOrderPatch = serde_json::from_str(r#"{"title": "Replace filters"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Replace filters"));
        assert!(patch.description.is_none());
        assert!(patch.priority.is_none());
        assert!(patch.status.is_none());
    }
}
