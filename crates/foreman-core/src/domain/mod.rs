//! Domain model (work orders, ids, drafts, rules, errors).

pub mod draft;
pub mod errors;
pub mod ids;
pub mod rules;
pub mod work_order;

pub use self::draft::{NewWorkOrder, WorkOrderDraft, WorkOrderPatch, WorkOrderUpdate};
pub use self::errors::{FieldViolation, ServiceError, StoreError};
pub use self::ids::WorkOrderId;
pub use self::rules::{validate_draft, validate_patch};
pub use self::work_order::{Priority, Status, WorkOrder};
