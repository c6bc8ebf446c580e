//! Shelfwatch Core - Inventory health derivation for the shelfwatch dashboard
//!
//! This crate turns a raw inventory snapshot into everything the dashboard renders:
//!
//! - **Record**: Inventory records as delivered by the prediction backend
//! - **Status**: Risk tiers (Critical, Warning, Safe) and their display colors
//! - **Snapshot**: Lenient parsing of the `/latest` response body
//! - **Summary**: Global Critical/Warning/Safe counters
//! - **Filter**: Store and SKU-substring filtering plus store option derivation
//! - **Format**: Display rules for stockout horizons, reorder quantities and timestamps
//! - **State**: Dashboard state record updated through discrete events
//! - **Config**: Base URL, timeout and logging settings
//!
//! # Architecture
//!
//! All derivation is pure:
//! - The record set is replaced wholesale when a snapshot arrives
//! - Filter state changes only through [`DashboardEvent`]s
//! - [`DashboardState::view`] recomputes the [`DerivedView`] from scratch after every transition
//!
//! ```text
//! Snapshot ─┬─> summary_counts ──┐
//!           ├─> store_options ───┼─> DerivedView
//!           └─> visible_rows ────┘
//!                  ^
//!             FilterState
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod record;
pub mod snapshot;
pub mod state;
pub mod status;
pub mod summary;

pub use config::{ApiConfig, ConfigError, DashboardConfig, LogConfig};
pub use error::{Result, ShelfwatchError, SnapshotError};
pub use filter::{store_options, visible_rows, FilterState, StoreFilter};
pub use format::{
    format_avg_daily_sales, format_days_to_stockout, format_last_updated, format_reorder_quantity,
};
pub use record::{InventoryRecord, StockoutHorizon};
pub use snapshot::Snapshot;
pub use state::{DashboardEvent, DashboardState, DerivedView, LoadStatus};
pub use status::{RiskStatus, StatusColor};
pub use summary::{summary_counts, SummaryCounts};

/// Returns the version of shelfwatch-core
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
