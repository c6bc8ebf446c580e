//! Snapshot fetcher using reqwest

use reqwest::Client;
use shelfwatch_core::{DashboardConfig, DashboardEvent, Snapshot};
use tracing::{debug, info, warn};

use crate::error::FetchError;

pub struct SnapshotFetcher {
    client: Client,
    latest_url: String,
}

impl SnapshotFetcher {
    pub fn new(config: &DashboardConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.api.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            latest_url: config.latest_url(),
        })
    }

    /// The endpoint this fetcher reads from
    pub fn latest_url(&self) -> &str {
        &self.latest_url
    }

    /// Fetch the latest snapshot.
    ///
    /// Transport failures and non-success statuses are errors. A body that is
    /// not a readable snapshot is not: it yields an empty snapshot.
    pub async fn fetch_latest(&self) -> Result<Snapshot, FetchError> {
        debug!(url = %self.latest_url, "Fetching latest snapshot");

        let response = self
            .client
            .get(&self.latest_url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Body {
            message: e.to_string(),
        })?;

        let snapshot = Snapshot::from_json_str(&body);
        info!(
            url = %self.latest_url,
            records = snapshot.len(),
            skipped = snapshot.skipped,
            "Fetched snapshot"
        );
        Ok(snapshot)
    }

    /// Fetch the latest snapshot, falling back to an empty one on any failure.
    ///
    /// Failures are logged and never reach the caller.
    pub async fn load_snapshot(&self) -> Snapshot {
        match self.fetch_latest().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(url = %self.latest_url, error = %err, "Failed to fetch inventory data");
                Snapshot::empty()
            }
        }
    }

    /// Fetch and wrap the outcome as a dashboard event.
    pub async fn fetch_event(&self) -> DashboardEvent {
        match self.fetch_latest().await {
            Ok(snapshot) => DashboardEvent::FetchCompleted(snapshot),
            Err(err) => {
                warn!(url = %self.latest_url, error = %err, "Failed to fetch inventory data");
                DashboardEvent::FetchFailed(err.to_string())
            }
        }
    }
}
