//! Threshold panel lifecycle.
//!
//! UI-independent state machine for the per-part threshold widget:
//! `Uninitialized → Loading → Ready | Error`, plus the save sub-flow.
//! A save never moves the panel out of `Ready`; it either updates the
//! threshold in place with the server's echoed value or leaves the
//! displayed state untouched and surfaces a transient notice.

use tracing::{debug, error};

use crate::api::InventoryApi;
use crate::types::{coerce_threshold, is_low_stock, Part, PartId, ThresholdRecord};

/// Message shown when the initial fetch sequence fails
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load part data";
/// Success notice after a persisted save
pub const SAVE_OK_MESSAGE: &str = "Stock threshold updated successfully";
/// Error notice after a failed save
pub const SAVE_ERROR_MESSAGE: &str = "Failed to update stock threshold";

/// View state of one threshold panel instance.
///
/// Exactly one variant is active at a time; transitions are driven only
/// by fetch and save outcomes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    /// Widget constructed, initial fetch not started
    #[default]
    Uninitialized,
    /// Initial fetch sequence in flight
    Loading,
    /// Part and threshold loaded; the editable steady state
    Ready {
        /// The part this panel is bound to
        part: Part,
        /// Currently persisted threshold (or the local default 0)
        threshold: f64,
    },
    /// Initial fetch failed; terminal until the widget is remounted
    Error {
        /// Operator-facing message
        message: String,
    },
}

impl PanelState {
    /// Low-stock determination for a ready panel, recomputed from the
    /// current data on every call.
    pub fn low_stock(&self) -> Option<bool> {
        match self {
            PanelState::Ready { part, threshold } => {
                Some(is_low_stock(part.available_stock, *threshold))
            }
            _ => None,
        }
    }

    /// Adopt the server's echoed threshold after a successful save.
    ///
    /// Only a `Ready` panel can accept an echo; any other state ignores it.
    pub fn apply_saved(&mut self, echoed: f64) {
        if let PanelState::Ready { threshold, .. } = self {
            *threshold = echoed;
        }
    }
}

/// Outcome of a save attempt, used to drive the notice and state update.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Server persisted the value; `threshold` is its authoritative echo
    Saved {
        /// Echoed threshold, which may differ from the submitted value
        threshold: f64,
    },
    /// Save failed; displayed state must remain unchanged
    Failed {
        /// Operator-facing message
        message: String,
    },
}

/// Resolve a part id from a navigation path.
///
/// Takes the segment immediately following the literal `part`, e.g.
/// `/platform/part/42/stock` resolves to 42.
pub fn part_id_from_path(path: &str) -> Option<PartId> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment == "part" {
            return segments.next().and_then(|s| s.parse().ok());
        }
    }
    None
}

/// Run the mount-time fetch sequence and return the resulting view state.
///
/// Part fetch failure is terminal. A threshold lookup answered with a
/// non-success status means the record was never created; it defaults to
/// 0 locally without writing anything to the server. Transport or decode
/// failures during the lookup are load failures like any other.
pub async fn load_panel(api: &dyn InventoryApi, part: PartId) -> PanelState {
    let part_data = match api.fetch_part(part).await {
        Ok(p) => p,
        Err(e) => {
            error!(part = %part, error = %e, "Failed to fetch part");
            return PanelState::Error {
                message: LOAD_ERROR_MESSAGE.to_string(),
            };
        }
    };

    let threshold = match api.get_threshold(part).await {
        Ok(record) => record.stock_threshold,
        Err(e) if e.is_status() => {
            debug!(part = %part, "No threshold record, defaulting to 0");
            ThresholdRecord::default_for(part).stock_threshold
        }
        Err(e) => {
            error!(part = %part, error = %e, "Failed to fetch threshold");
            return PanelState::Error {
                message: LOAD_ERROR_MESSAGE.to_string(),
            };
        }
    };

    PanelState::Ready {
        part: part_data,
        threshold,
    }
}

/// Coerce and persist the edited value.
///
/// Invalid input coerces to 0 and still saves. On success the server's
/// echoed value is the one to display; on failure the caller keeps the
/// pre-save state as-is.
pub async fn save_threshold(api: &dyn InventoryApi, part: PartId, raw_input: &str) -> SaveOutcome {
    let value = coerce_threshold(raw_input);
    match api.set_threshold(part, value).await {
        Ok(record) => SaveOutcome::Saved {
            threshold: record.stock_threshold,
        },
        Err(e) => {
            error!(part = %part, error = %e, "Failed to update stock threshold");
            SaveOutcome::Failed {
                message: SAVE_ERROR_MESSAGE.to_string(),
            }
        }
    }
}
