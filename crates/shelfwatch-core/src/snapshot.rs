//! Snapshot parsing
//!
//! A snapshot is one complete `/latest` response. Parsing comes in two flavors:
//! [`Snapshot::parse`] reports why a body was rejected, [`Snapshot::from_json_str`]
//! never fails and degrades to an empty snapshot.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SnapshotError;
use crate::record::{parse_timestamp, InventoryRecord};

/// Envelope keys that may hold the record list, in lookup order.
const RECORD_KEYS: [&str; 2] = ["records", "predictions"];

/// One fetched set of inventory records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Records in response order
    pub records: Vec<InventoryRecord>,
    /// Snapshot-wide update time
    pub last_updated: Option<DateTime<Utc>>,
    /// Array entries dropped because they were not record objects
    pub skipped: usize,
}

impl Snapshot {
    /// An empty snapshot
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from already-decoded records.
    pub fn from_records(records: Vec<InventoryRecord>) -> Self {
        let last_updated = latest_timestamp(&records);
        Self {
            records,
            last_updated,
            skipped: 0,
        }
    }

    /// Strict parse of a response body.
    pub fn parse(body: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Lenient parse of a response body.
    ///
    /// Any body that cannot be read as a snapshot yields an empty one.
    pub fn from_json_str(body: &str) -> Self {
        match Self::parse(body) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "Discarding unreadable snapshot body");
                Self::empty()
            }
        }
    }

    /// Strict conversion from a decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        let Value::Object(mut envelope) = value else {
            return Err(SnapshotError::NotAnObject(json_kind(&value).to_string()));
        };

        let entries = RECORD_KEYS
            .iter()
            .find_map(|key| match envelope.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or(SnapshotError::MissingRecords)?;

        let mut records = Vec::with_capacity(entries.len());
        let mut skipped = 0;
        for (index, entry) in entries.into_iter().enumerate() {
            if !entry.is_object() {
                warn!(index, kind = json_kind(&entry), "Skipping non-object record");
                skipped += 1;
                continue;
            }
            match serde_json::from_value::<InventoryRecord>(entry) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(index, error = %err, "Skipping malformed record");
                    skipped += 1;
                }
            }
        }

        let last_updated = latest_timestamp(&records)
            .or_else(|| envelope.get("last_updated").and_then(parse_timestamp));

        debug!(
            records = records.len(),
            skipped,
            last_updated = ?last_updated,
            "Parsed snapshot"
        );

        Ok(Self {
            records,
            last_updated,
            skipped,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Latest `last_updated` across records.
///
/// Records of one snapshot are expected to agree; when they do not, the newest
/// value wins so the result does not depend on response order.
fn latest_timestamp(records: &[InventoryRecord]) -> Option<DateTime<Utc>> {
    records.iter().filter_map(|r| r.last_updated).max()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RiskStatus;

    #[test]
    fn test_parse_records() {
        let body = r#"{"records": [
            {"sku_id": "A1", "store_id": "S1", "status": "Critical", "last_updated": "2024-05-01T10:00:00Z"},
            {"sku_id": "A2", "store_id": "S2", "status": "Safe", "last_updated": "2024-05-01T10:00:00Z"}
        ]}"#;
        let snapshot = Snapshot::parse(body).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.records[0].status, RiskStatus::Critical);
        assert_eq!(
            snapshot.last_updated.unwrap().to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_missing_records_is_empty() {
        assert!(matches!(
            Snapshot::parse("{}"),
            Err(SnapshotError::MissingRecords)
        ));
        let snapshot = Snapshot::from_json_str("{}");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.last_updated, None);
    }

    #[test]
    fn test_malformed_bodies_are_empty() {
        for body in ["", "not json", "[1, 2]", "null", r#"{"records": "nope"}"#] {
            assert!(Snapshot::from_json_str(body).is_empty(), "body: {body:?}");
        }
        assert!(matches!(
            Snapshot::parse("[1, 2]"),
            Err(SnapshotError::NotAnObject(kind)) if kind == "array"
        ));
        assert!(matches!(
            Snapshot::parse("not json"),
            Err(SnapshotError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_predictions_alias() {
        let body = r#"{
            "predictions": [{"sku_id": "A1", "store_id": "S1", "status": "Warning"}],
            "last_updated": "2024-05-01T10:00:00.5"
        }"#;
        let snapshot = Snapshot::from_json_str(body);
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.last_updated.is_some());
    }

    #[test]
    fn test_records_key_wins_over_predictions() {
        let body = r#"{
            "records": [{"sku_id": "R"}],
            "predictions": [{"sku_id": "P1"}, {"sku_id": "P2"}]
        }"#;
        let snapshot = Snapshot::from_json_str(body);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.records[0].sku_id, "R");
    }

    #[test]
    fn test_non_object_entries_skipped() {
        let body = r#"{"records": [{"sku_id": "A1"}, 7, "x", null, {"sku_id": "A2"}]}"#;
        let snapshot = Snapshot::from_json_str(body);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.skipped, 3);
    }

    #[test]
    fn test_wrongly_typed_field_skips_record() {
        let body = r#"{"records": [{"sku_id": "A1", "current_stock": -4}, {"sku_id": "A2"}]}"#;
        let snapshot = Snapshot::from_json_str(body);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.records[0].sku_id, "A2");
        assert_eq!(snapshot.skipped, 1);
    }

    #[test]
    fn test_whole_float_stock_kept() {
        let body = r#"{"records": [
            {"sku_id": "A1", "current_stock": 12.0, "recommended_reorder_quantity": 30.0, "status": "Warning"}
        ]}"#;
        let snapshot = Snapshot::from_json_str(body);
        assert_eq!(snapshot.skipped, 0);
        assert_eq!(snapshot.records[0].current_stock, 12);
        assert_eq!(snapshot.records[0].recommended_reorder_quantity, Some(30));
        assert_eq!(crate::summary_counts(&snapshot.records).warning, 1);
    }

    #[test]
    fn test_disagreeing_timestamps_take_latest() {
        let body = r#"{"records": [
            {"sku_id": "A1", "last_updated": "2024-05-01T10:00:00Z"},
            {"sku_id": "A2", "last_updated": "2024-05-02T09:00:00Z"},
            {"sku_id": "A3", "last_updated": "2024-04-30T23:00:00Z"}
        ]}"#;
        let snapshot = Snapshot::from_json_str(body);
        assert_eq!(
            snapshot.last_updated.unwrap().to_rfc3339(),
            "2024-05-02T09:00:00+00:00"
        );
    }

    #[test]
    fn test_record_timestamp_beats_envelope() {
        let body = r#"{
            "records": [{"sku_id": "A1", "last_updated": "2024-05-01T10:00:00Z"}],
            "last_updated": "2030-01-01T00:00:00Z"
        }"#;
        let snapshot = Snapshot::from_json_str(body);
        assert_eq!(
            snapshot.last_updated.unwrap().to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }
}
