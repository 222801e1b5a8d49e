//! Error taxonomy for the store and service layers.
//!
//! NotFound はエラーではなく不在値（`Option` / `bool`）で表現します。
//! 外側の boundary が 404 相当へどう写すかを自由に決められるようにする
//! ためで、この層では「見つからなかった」を例外扱いしません。

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One violated field constraint: which field, and why.
///
/// Serializable so a boundary can surface the (field, message) pairs
/// verbatim in a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: String) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Storage-level failure: unexpected I/O or serialization trouble outside
/// the self-healing initialization path.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialize work orders: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Service-level failure, as seen by the boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The supplied id is not a syntactically valid UUID. Caller-side
    /// fixable; never retried.
    #[error("invalid work order id: {0:?}")]
    InvalidIdentifier(String),

    /// One or more fields violate their constraints. Carries every
    /// violation, not just the first.
    #[error("validation failed: {}", join(.0))]
    ValidationFailed(Vec<FieldViolation>),

    /// The store failed underneath us. Wrapped with the operation name;
    /// the cause stays reachable through `source()` for diagnostics.
    #[error("{op}: storage failure")]
    Storage {
        op: &'static str,
        #[source]
        source: StoreError,
    },
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn validation_failed_lists_every_violation() {
        let err = ServiceError::ValidationFailed(vec![
            FieldViolation::new("title", "must be between 2 and 80 characters".to_string()),
            FieldViolation::new("priority", "must be one of: Low, Medium, High".to_string()),
        ]);

        let rendered = err.to_string();
        assert!(rendered.contains("title:"));
        assert!(rendered.contains("priority:"));
    }

    #[test]
    fn storage_error_keeps_the_cause_reachable() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ServiceError::Storage {
            op: "list work orders",
            source: StoreError::io("read", "/tmp/work_orders.json", io),
        };

        assert!(err.to_string().contains("list work orders"));
        let source = err.source().expect("store error attached");
        assert!(source.to_string().contains("work_orders.json"));
    }

    #[test]
    fn field_violations_serialize_as_pairs() {
        let violation = FieldViolation::new("status", "must be one of: Open, In Progress, Done".to_string());
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["field"], "status");
        assert!(json["message"].as_str().unwrap().starts_with("must be one of"));
    }
}
