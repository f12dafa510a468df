//! Stockwatch Core Library
//!
//! Threshold monitoring widgets for an inventory-management server.
//!
//! ## Overview
//!
//! Two widgets share one HTTP gateway: a per-part **threshold panel**
//! (fetch part + threshold, edit, save, reconcile with the server's echo)
//! and a **low-stock dashboard** (poll the candidate list on a fixed
//! cadence, filter strictly below threshold, cap the view at ten
//! entries). Stock-level computation itself is server-side; this crate
//! only consumes and displays it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use stockwatch_core::{
//!     load_panel, refresh_low_stock, Credentials, HttpGateway, PartId,
//!     RestInventoryApi, ThresholdVariant,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = HttpGateway::new("http://inventory.local/", Credentials::default())?;
//!     let api = Arc::new(RestInventoryApi::new(gateway, ThresholdVariant::Dedicated));
//!
//!     let panel = load_panel(api.as_ref(), PartId(42)).await;
//!     println!("{:?}", panel.low_stock());
//!
//!     let dashboard = refresh_low_stock(api.as_ref()).await;
//!     println!("{dashboard:?}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod panel;
pub mod types;

// Re-exports
pub use api::{InventoryApi, RestInventoryApi, ThresholdVariant};
pub use dashboard::{
    refresh_low_stock, DashboardPoller, DashboardState, LowStockReport, MAX_VISIBLE_ENTRIES,
    REFRESH_INTERVAL,
};
pub use error::{StockError, StockResult};
pub use gateway::{Credentials, HttpGateway, CSRF_HEADER};
pub use panel::{load_panel, part_id_from_path, save_threshold, PanelState, SaveOutcome};
pub use types::{
    coerce_threshold, format_threshold, is_low_stock, LowStockEntry, Part, PartId, ThresholdRecord,
};
