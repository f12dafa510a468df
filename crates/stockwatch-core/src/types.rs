//! Data model for parts, thresholds, and the low-stock projection.
//!
//! Field names follow the inventory server's wire format
//! (`available_stock`, `minimum_stock`, `IPN`). Stock quantities and
//! thresholds are same-unit numeric values; a threshold that was never
//! configured reads as 0.

use serde::{Deserialize, Serialize};

/// Identifier of a part on the inventory server.
///
/// Opaque to this crate beyond equality and formatting; it only ever
/// appears in URL paths and JSON bodies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PartId(pub i64);

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PartId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(PartId)
    }
}

/// A part record as returned by `GET /api/part/{id}/`.
///
/// Only the fields this crate consumes are modeled; unknown fields in the
/// response are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Server identifier (some deployments serialize it as `pk`)
    #[serde(alias = "pk")]
    pub id: PartId,
    /// Human-readable part name
    #[serde(default)]
    pub name: String,
    /// Internal part number, if assigned
    #[serde(rename = "IPN", default)]
    pub ipn: Option<String>,
    /// Current on-hand quantity
    #[serde(default)]
    pub available_stock: f64,
    /// Configured minimum stock level (0 when never set)
    #[serde(default)]
    pub minimum_stock: f64,
}

/// Per-part threshold record from the dedicated threshold resource.
///
/// Created lazily on first read with a default of 0; mutated only via an
/// explicit save and never deleted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRecord {
    /// The part this threshold belongs to
    pub part: PartId,
    /// Minimum stock level before the part counts as low
    #[serde(default)]
    pub stock_threshold: f64,
}

impl ThresholdRecord {
    /// Local default for a part whose threshold was never configured.
    ///
    /// Not written to the server; persistence only happens on an explicit
    /// save.
    pub fn default_for(part: PartId) -> Self {
        Self {
            part,
            stock_threshold: 0.0,
        }
    }
}

/// Read-only dashboard projection of one qualifying part.
///
/// Recomputed from scratch on every refresh cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockEntry {
    /// Server identifier of the part
    pub id: PartId,
    /// Human-readable part name
    pub name: String,
    /// Internal part number, if assigned
    pub ipn: Option<String>,
    /// Current on-hand quantity
    pub available_stock: f64,
    /// Configured minimum stock level
    pub minimum_stock: f64,
}

impl LowStockEntry {
    /// Project a part into a dashboard entry.
    pub fn from_part(part: &Part) -> Self {
        Self {
            id: part.id,
            name: part.name.clone(),
            ipn: part.ipn.clone(),
            available_stock: part.available_stock,
            minimum_stock: part.minimum_stock,
        }
    }

    /// Stock as a percentage of the threshold, clamped to [0, 100] so
    /// progress-style rendering never overflows even for pathological data
    /// (threshold lowered after stock already fell far below the old one).
    pub fn stock_percent(&self) -> f64 {
        if self.minimum_stock <= 0.0 {
            return 0.0;
        }
        (self.available_stock / self.minimum_stock * 100.0).clamp(0.0, 100.0)
    }
}

/// Low-stock determination: strictly below the threshold.
///
/// Equal values are never low. Recomputed from its inputs at every use,
/// never cached.
pub fn is_low_stock(available_stock: f64, threshold: f64) -> bool {
    available_stock < threshold
}

/// Coerce raw operator input into a threshold value.
///
/// Empty, unparsable, negative, and non-finite inputs all coerce to 0.
/// Invalid input never rejects or blocks a save.
pub fn coerce_threshold(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
        .unwrap_or(0.0)
}

/// Format a threshold for the numeric input control.
///
/// Whole values print without a fractional part (the input uses step 1).
pub fn format_threshold(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
