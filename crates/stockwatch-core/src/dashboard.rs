//! Low-stock aggregation and the dashboard refresh loop.
//!
//! Each cycle fetches the candidate set (parts with a positive minimum
//! stock), re-filters client-side to those strictly below their
//! threshold, and replaces the report wholesale. A failed cycle replaces
//! the view with an explicit error state until the next successful one.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::api::InventoryApi;
use crate::types::{is_low_stock, LowStockEntry, Part};

/// Display cap for the dashboard list
pub const MAX_VISIBLE_ENTRIES: usize = 10;

/// Cadence of the dashboard refresh loop
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Message shown when a refresh cycle fails
pub const REFRESH_ERROR_MESSAGE: &str = "Error fetching low stock items";

/// View state of the dashboard widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    /// First cycle not finished yet
    #[default]
    Loading,
    /// Last cycle failed; shown until the next successful cycle
    Error {
        /// Operator-facing message
        message: String,
    },
    /// Last cycle succeeded
    Ready {
        /// The freshly rebuilt report
        report: LowStockReport,
    },
}

/// Bounded view of the parts currently under their threshold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LowStockReport {
    /// At most [`MAX_VISIBLE_ENTRIES`] entries, in server order
    pub visible: Vec<LowStockEntry>,
    /// Qualifying entries beyond the display cap
    pub overflow: usize,
}

impl LowStockReport {
    /// Build a report from the fetched candidate set.
    ///
    /// The server-side filter only guarantees "has a threshold"; the
    /// strict `available < minimum` comparison is re-applied here. Order
    /// is preserved as returned by the server.
    pub fn from_candidates(candidates: &[Part]) -> Self {
        let qualifying: Vec<&Part> = candidates
            .iter()
            .filter(|p| is_low_stock(p.available_stock, p.minimum_stock))
            .collect();

        let total = qualifying.len();
        let visible = qualifying
            .into_iter()
            .take(MAX_VISIBLE_ENTRIES)
            .map(LowStockEntry::from_part)
            .collect();

        Self {
            visible,
            overflow: total.saturating_sub(MAX_VISIBLE_ENTRIES),
        }
    }

    /// Total number of qualifying parts, capped and uncapped alike.
    pub fn total(&self) -> usize {
        self.visible.len() + self.overflow
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Run one refresh cycle and return the resulting view state.
pub async fn refresh_low_stock(api: &dyn InventoryApi) -> DashboardState {
    match api.list_candidates().await {
        Ok(candidates) => {
            let report = LowStockReport::from_candidates(&candidates);
            debug!(
                visible = report.visible.len(),
                overflow = report.overflow,
                "Low stock report rebuilt"
            );
            DashboardState::Ready { report }
        }
        Err(e) => {
            error!(error = %e, "Low stock refresh failed");
            DashboardState::Error {
                message: REFRESH_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

/// Recurring dashboard refresh task.
///
/// Starts with an immediate cycle, then repeats on the given interval.
/// The task is owned by the widget instance: dropping (or stopping) the
/// poller aborts it, and an in-flight cycle cancelled mid-request never
/// publishes its result.
pub struct DashboardPoller {
    handle: JoinHandle<()>,
}

impl DashboardPoller {
    /// Spawn the refresh loop, delivering each cycle's state to `on_state`.
    pub fn start<F>(api: Arc<dyn InventoryApi>, interval: Duration, mut on_state: F) -> Self
    where
        F: FnMut(DashboardState) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let state = refresh_low_stock(api.as_ref()).await;
                on_state(state);
            }
        });
        info!(interval_secs = interval.as_secs(), "Dashboard refresh task started");
        Self { handle }
    }

    /// Cancel the loop. Idempotent; also invoked on drop.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for DashboardPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
