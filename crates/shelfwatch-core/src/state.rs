//! Dashboard state and its transitions
//!
//! The state record changes only through [`DashboardEvent`]s. Everything the
//! screen shows is derived afterwards by [`DashboardState::view`].

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::filter::{store_options, visible_rows, FilterState, StoreFilter};
use crate::record::InventoryRecord;
use crate::snapshot::Snapshot;
use crate::summary::{summary_counts, SummaryCounts};

/// Progress of the one snapshot fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Fetch still in flight
    #[default]
    Loading,
    /// Snapshot received (possibly empty)
    Loaded,
    /// Fetch failed; records stay empty
    Failed(String),
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadStatus::Loading => write!(f, "LOADING"),
            LoadStatus::Loaded => write!(f, "LOADED"),
            LoadStatus::Failed(_) => write!(f, "FAILED"),
        }
    }
}

/// Discrete state transitions
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// A snapshot arrived and replaces the current one
    FetchCompleted(Snapshot),
    /// The fetch failed
    FetchFailed(String),
    /// Operator picked a store
    StoreFilterChanged(StoreFilter),
    /// Operator edited the search box
    SearchChanged(String),
}

impl DashboardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardEvent::FetchCompleted(_) => "fetch_completed",
            DashboardEvent::FetchFailed(_) => "fetch_failed",
            DashboardEvent::StoreFilterChanged(_) => "store_filter_changed",
            DashboardEvent::SearchChanged(_) => "search_changed",
        }
    }
}

/// Display-ready derivation of one state
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a> {
    /// Filtered rows in snapshot order
    pub visible_rows: Vec<&'a InventoryRecord>,
    /// Counters over the full snapshot, filters ignored
    pub summary_counts: SummaryCounts,
    /// `ALL` plus each distinct store of the full snapshot
    pub store_options: Vec<StoreFilter>,
}

/// Complete dashboard state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    snapshot: Snapshot,
    filter: FilterState,
    load_status: LoadStatus,
}

impl DashboardState {
    /// Initial state: no records, `ALL` stores, empty search
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, producing the next state.
    pub fn apply(mut self, event: DashboardEvent) -> Self {
        debug!(event = event.name(), "Applying dashboard event");
        match event {
            DashboardEvent::FetchCompleted(snapshot) => {
                info!(
                    records = snapshot.len(),
                    skipped = snapshot.skipped,
                    "Snapshot loaded"
                );
                // The store selection is kept even if the new snapshot lacks it.
                self.snapshot = snapshot;
                self.load_status = LoadStatus::Loaded;
            }
            DashboardEvent::FetchFailed(reason) => {
                warn!(%reason, "Snapshot fetch failed");
                self.load_status = LoadStatus::Failed(reason);
            }
            DashboardEvent::StoreFilterChanged(store) => {
                self.filter.store_filter = store;
            }
            DashboardEvent::SearchChanged(term) => {
                self.filter.search_term = term;
            }
        }
        self
    }

    /// Recompute everything the screen shows.
    pub fn view(&self) -> DerivedView<'_> {
        let records = &self.snapshot.records;
        DerivedView {
            visible_rows: visible_rows(records, &self.filter),
            summary_counts: summary_counts(records),
            store_options: store_options(records),
        }
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.snapshot.records
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn last_updated(&self) -> Option<&DateTime<Utc>> {
        self.snapshot.last_updated.as_ref()
    }
}
