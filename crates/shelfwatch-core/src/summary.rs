//! Global risk summary
//!
//! Counters always cover the full snapshot, never the filtered view.

use serde::Serialize;

use crate::record::InventoryRecord;
use crate::status::RiskStatus;

/// Per-tier record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub critical: usize,
    pub warning: usize,
    pub safe: usize,
    /// Records whose tag is none of the three tiers
    pub unrecognized: usize,
}

impl SummaryCounts {
    /// Count of all records, recognized or not
    pub fn total(&self) -> usize {
        self.critical + self.warning + self.safe + self.unrecognized
    }

    /// Count for one tier
    pub fn count_for(&self, status: &RiskStatus) -> usize {
        match status {
            RiskStatus::Critical => self.critical,
            RiskStatus::Warning => self.warning,
            RiskStatus::Safe => self.safe,
            RiskStatus::Unrecognized(_) => self.unrecognized,
        }
    }
}

/// Count records per risk tier over the full record set.
pub fn summary_counts(records: &[InventoryRecord]) -> SummaryCounts {
    records
        .iter()
        .fold(SummaryCounts::default(), |mut counts, record| {
            match record.status {
                RiskStatus::Critical => counts.critical += 1,
                RiskStatus::Warning => counts.warning += 1,
                RiskStatus::Safe => counts.safe += 1,
                RiskStatus::Unrecognized(_) => counts.unrecognized += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: RiskStatus) -> InventoryRecord {
        InventoryRecord::new("SKU", "S1", status)
    }

    #[test]
    fn test_empty() {
        let counts = summary_counts(&[]);
        assert_eq!(counts, SummaryCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_counts_each_tier() {
        let records = vec![
            record(RiskStatus::Critical),
            record(RiskStatus::Critical),
            record(RiskStatus::Warning),
            record(RiskStatus::Safe),
            record(RiskStatus::from_tag("Overstock")),
        ];
        let counts = summary_counts(&records);
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.warning, 1);
        assert_eq!(counts.safe, 1);
        assert_eq!(counts.unrecognized, 1);
        assert_eq!(counts.total(), records.len());
        assert_eq!(counts.count_for(&RiskStatus::Critical), 2);
    }
}
