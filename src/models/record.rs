use serde_json::{Map, Value};

use crate::error::ReportError;
use crate::utils::bytes_to_tib;

pub const RECORDS_FIELD: &str = "Records";
pub const PADDED_STORAGE_FIELD: &str = "PaddedStorageSizeBytes";
pub const METADATA_STORAGE_FIELD: &str = "MetadataStorageSizeBytes";
pub const DELETED_STORAGE_FIELD: &str = "DeletedStorageSizeBytes";
pub const BILLABLE_OBJECTS_FIELD: &str = "NumBillableObjects";

/// Numeric fields of one utilization record. Absent or non-numeric fields
/// read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UtilizationRecord {
    pub padded_storage_bytes: f64,
    pub metadata_storage_bytes: f64,
    pub deleted_storage_bytes: f64,
    pub billable_objects: f64,
}

impl UtilizationRecord {
    pub fn from_json(record: &Map<String, Value>) -> Self {
        UtilizationRecord {
            padded_storage_bytes: number_or_zero(record, PADDED_STORAGE_FIELD),
            metadata_storage_bytes: number_or_zero(record, METADATA_STORAGE_FIELD),
            deleted_storage_bytes: number_or_zero(record, DELETED_STORAGE_FIELD),
            billable_objects: number_or_zero(record, BILLABLE_OBJECTS_FIELD),
        }
    }

    pub fn active_tib(&self) -> f64 {
        bytes_to_tib(self.padded_storage_bytes + self.metadata_storage_bytes)
    }

    pub fn deleted_tib(&self) -> f64 {
        bytes_to_tib(self.deleted_storage_bytes)
    }
}

fn number_or_zero(record: &Map<String, Value>, key: &str) -> f64 {
    record.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// The latest record out of a utilization response, plus how many records
/// the response carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Utilization {
    pub record: UtilizationRecord,
    pub record_count: usize,
}

impl Utilization {
    pub fn from_body(body: &[u8]) -> Result<Self, ReportError> {
        // Invalid UTF-8 in fields that are never read must not fail the run
        let text = String::from_utf8_lossy(body);
        let envelope: Option<Map<String, Value>> =
            serde_json::from_str(&text).map_err(ReportError::MalformedResponse)?;

        let records = envelope
            .as_ref()
            .and_then(|envelope| envelope.get(RECORDS_FIELD))
            .and_then(Value::as_array)
            .filter(|records| !records.is_empty())
            .ok_or(ReportError::NoRecords)?;

        let first = records[0]
            .as_object()
            .ok_or(ReportError::InvalidRecordShape)?;

        Ok(Utilization {
            record: UtilizationRecord::from_json(first),
            record_count: records.len(),
        })
    }
}
