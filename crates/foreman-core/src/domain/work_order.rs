//! Work order record: the single persisted entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::WorkOrderId;
use super::draft::WorkOrderUpdate;

/// Priority of a work order (closed set).
///
/// Wire spellings are the variant names: "Low", "Medium", "High".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Allowed wire spellings, in display order.
    pub const NAMES: [&'static str; 3] = ["Low", "Medium", "High"];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse a wire spelling. Returns `None` for anything outside the set.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a work order (closed set).
///
/// Wire spellings: "Open", "In Progress", "Done". Note the space in
/// "In Progress"; the serde rename keeps the persisted form stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Done];

    /// Allowed wire spellings, in display order.
    pub const NAMES: [&'static str; 3] = ["Open", "In Progress", "Done"];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Parse a wire spelling. Returns `None` for anything outside the set.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Is this a terminal status (no further work expected)?
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Done)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted work order.
///
/// Design:
/// - This is the exact on-disk shape: six fields, camelCase keys, no
///   envelope. The backing file holds a top-level JSON array of these.
/// - `id` is assigned once by the store and never rewritten.
/// - `updated_at` (wire key `updatedAt`) is stamped by the store on every
///   insert/replace; callers cannot supply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub updated_at: DateTime<Utc>,
}

impl WorkOrder {
    /// Merge only the provided fields of `update` over this record and
    /// re-stamp `updated_at`. The id is untouchable by construction:
    /// `WorkOrderUpdate` has no id field.
    pub fn apply(&mut self, update: &WorkOrderUpdate, now: DateTime<Utc>) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}
