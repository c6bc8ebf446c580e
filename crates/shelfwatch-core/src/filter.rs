//! Filter engine
//!
//! Narrows the record set by store and SKU substring and derives the store
//! selector options. Filtering is recomputed from the full record set every
//! time; it is linear in the snapshot size.

use std::collections::HashSet;

use crate::record::InventoryRecord;

/// Store selector value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum StoreFilter {
    /// Wildcard, displayed as "ALL"
    #[default]
    All,
    /// One specific store
    Store(String),
}

impl StoreFilter {
    /// Label of the wildcard option
    pub const ALL_LABEL: &'static str = "ALL";

    pub fn store(store_id: impl Into<String>) -> Self {
        StoreFilter::Store(store_id.into())
    }

    /// Whether a record passes this store predicate.
    ///
    /// Store comparison is exact and case-sensitive.
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        match self {
            StoreFilter::All => true,
            StoreFilter::Store(id) => record.store_id == *id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StoreFilter::All => Self::ALL_LABEL,
            StoreFilter::Store(id) => id,
        }
    }

    /// The option after this one, wrapping around.
    ///
    /// A selection that is no longer among the options steps to `All`.
    pub fn cycle_next(&self, options: &[StoreFilter]) -> StoreFilter {
        self.step(options, 1)
    }

    /// The option before this one, wrapping around.
    pub fn cycle_prev(&self, options: &[StoreFilter]) -> StoreFilter {
        self.step(options, options.len().saturating_sub(1))
    }

    fn step(&self, options: &[StoreFilter], offset: usize) -> StoreFilter {
        match options.iter().position(|o| o == self) {
            Some(i) => options[(i + offset) % options.len()].clone(),
            None => StoreFilter::All,
        }
    }
}

impl std::fmt::Display for StoreFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Operator-controlled filter settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub store_filter: StoreFilter,
    /// Raw search text as typed
    pub search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed, case-folded search term; `None` when blank.
    pub fn normalized_term(&self) -> Option<String> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    /// Whether this state leaves the record set untouched.
    pub fn is_unfiltered(&self) -> bool {
        self.store_filter == StoreFilter::All && self.normalized_term().is_none()
    }
}

/// Records passing the current filters, in their original order.
pub fn visible_rows<'a>(
    records: &'a [InventoryRecord],
    filter: &FilterState,
) -> Vec<&'a InventoryRecord> {
    let term = filter.normalized_term();
    records
        .iter()
        .filter(|r| filter.store_filter.matches(r))
        .filter(|r| match &term {
            Some(term) => r.sku_id.to_lowercase().contains(term.as_str()),
            None => true,
        })
        .collect()
}

/// `All` followed by each distinct store in first-seen order.
pub fn store_options(records: &[InventoryRecord]) -> Vec<StoreFilter> {
    let mut seen = HashSet::new();
    let mut options = vec![StoreFilter::All];
    for record in records {
        if seen.insert(record.store_id.as_str()) {
            options.push(StoreFilter::Store(record.store_id.clone()));
        }
    }
    options
}
