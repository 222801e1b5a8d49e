//! Status counts view for dashboards and quick health checks.

use serde::{Deserialize, Serialize};

use crate::domain::{Status, WorkOrder};

/// Per-status tallies over a record collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderCounts {
    pub open: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl WorkOrderCounts {
    pub fn tally(records: &[WorkOrder]) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.status {
                Status::Open => counts.open += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Done => counts.done += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, WorkOrderId};
    use chrono::Utc;

    fn record(status: Status) -> WorkOrder {
        WorkOrder {
            id: WorkOrderId::generate(),
            title: "Fix HVAC".to_string(),
            description: "Repair the rooftop unit".to_string(),
            priority: Priority::Medium,
            status,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn tally_counts_each_status() {
        let records = vec![
            record(Status::Open),
            record(Status::Open),
            record(Status::InProgress),
            record(Status::Done),
        ];

        let counts = WorkOrderCounts::tally(&records);
        assert_eq!(counts.open, 2);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.done, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn empty_collection_tallies_to_zero() {
        assert_eq!(WorkOrderCounts::tally(&[]), WorkOrderCounts::default());
    }
}
