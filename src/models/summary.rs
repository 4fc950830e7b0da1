use serde::Serialize;

use super::UtilizationRecord;
use crate::utils::{format_tib, truncate_count};

/// The report printed on success. Field order is the output key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageSummary {
    pub active: String,
    pub deleted: String,
    pub objects: i64,
}

impl From<&UtilizationRecord> for UsageSummary {
    fn from(record: &UtilizationRecord) -> Self {
        UsageSummary {
            active: format_tib(record.active_tib()),
            deleted: format_tib(record.deleted_tib()),
            objects: truncate_count(record.billable_objects),
        }
    }
}
