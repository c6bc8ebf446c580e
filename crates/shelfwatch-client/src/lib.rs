//! Shelfwatch Client - Snapshot fetching for the shelfwatch dashboard
//!
//! Issues the single `GET {base_url}/latest` request the dashboard makes per
//! session and hands back a lenient [`Snapshot`](shelfwatch_core::Snapshot).

mod error;
mod fetcher;

pub use error::FetchError;
pub use fetcher::SnapshotFetcher;
