//! Typed inventory operations over the HTTP gateway.
//!
//! Two deployment variants exist for where a part's threshold lives:
//! a dedicated per-part resource under the plugin API, or the part
//! record's own `minimum_stock` field. The variant is a configuration
//! choice; everything above [`InventoryApi`] is variant-agnostic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StockResult;
use crate::gateway::HttpGateway;
use crate::types::{Part, PartId, ThresholdRecord};

/// Where a part's threshold is stored on the server.
///
/// Never inferred from data; deployments pick one and configure it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdVariant {
    /// Dedicated per-part threshold resource under the plugin API
    #[default]
    Dedicated,
    /// Threshold reuses the part record's own `minimum_stock` field
    PartField,
}

impl std::fmt::Display for ThresholdVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dedicated => write!(f, "dedicated"),
            Self::PartField => write!(f, "part-field"),
        }
    }
}

impl std::str::FromStr for ThresholdVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dedicated" => Ok(Self::Dedicated),
            "part-field" => Ok(Self::PartField),
            other => Err(format!(
                "Invalid variant '{other}'. Must be one of: dedicated, part-field"
            )),
        }
    }
}

/// Operations the widgets need from the inventory server.
///
/// The REST implementation is [`RestInventoryApi`]; tests substitute
/// in-memory stubs.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Fetch one part record.
    async fn fetch_part(&self, part: PartId) -> StockResult<Part>;

    /// Fetch the configured threshold for a part.
    ///
    /// A missing record surfaces as [`crate::StockError::NotFound`];
    /// callers decide whether that defaults or fails.
    async fn get_threshold(&self, part: PartId) -> StockResult<ThresholdRecord>;

    /// Persist a new threshold and return the server's authoritative echo.
    async fn set_threshold(&self, part: PartId, value: f64) -> StockResult<ThresholdRecord>;

    /// List parts with a positive minimum stock (server-side prefilter).
    async fn list_candidates(&self) -> StockResult<Vec<Part>>;
}

#[derive(Serialize)]
struct ThresholdBody {
    stock_threshold: f64,
}

#[derive(Serialize)]
struct MinimumStockBody {
    minimum_stock: f64,
}

#[derive(Deserialize)]
struct PartListPage {
    #[serde(default)]
    results: Vec<Part>,
}

/// REST client speaking the documented inventory HTTP contract.
pub struct RestInventoryApi {
    gateway: HttpGateway,
    variant: ThresholdVariant,
}

impl RestInventoryApi {
    pub fn new(gateway: HttpGateway, variant: ThresholdVariant) -> Self {
        Self { gateway, variant }
    }

    fn part_path(part: PartId) -> String {
        format!("api/part/{part}/")
    }

    fn threshold_path(part: PartId) -> String {
        format!("api/plugin/stockthreshold/parts/{part}/")
    }
}

#[async_trait]
impl InventoryApi for RestInventoryApi {
    async fn fetch_part(&self, part: PartId) -> StockResult<Part> {
        self.gateway.get_json(&Self::part_path(part)).await
    }

    async fn get_threshold(&self, part: PartId) -> StockResult<ThresholdRecord> {
        match self.variant {
            ThresholdVariant::Dedicated => {
                self.gateway.get_json(&Self::threshold_path(part)).await
            }
            ThresholdVariant::PartField => {
                let record: Part = self.gateway.get_json(&Self::part_path(part)).await?;
                Ok(ThresholdRecord {
                    part: record.id,
                    stock_threshold: record.minimum_stock,
                })
            }
        }
    }

    async fn set_threshold(&self, part: PartId, value: f64) -> StockResult<ThresholdRecord> {
        match self.variant {
            ThresholdVariant::Dedicated => {
                let body = ThresholdBody {
                    stock_threshold: value,
                };
                self.gateway.put_json(&Self::threshold_path(part), &body).await
            }
            ThresholdVariant::PartField => {
                let body = MinimumStockBody {
                    minimum_stock: value,
                };
                let record: Part = self.gateway.put_json(&Self::part_path(part), &body).await?;
                Ok(ThresholdRecord {
                    part: record.id,
                    stock_threshold: record.minimum_stock,
                })
            }
        }
    }

    async fn list_candidates(&self) -> StockResult<Vec<Part>> {
        let page: PartListPage = self
            .gateway
            .get_json("api/part/?minimum_stock__gt=0")
            .await?;
        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;
    use crate::gateway::Credentials;

    fn rest_api(server: &MockServer, variant: ThresholdVariant) -> RestInventoryApi {
        let gateway = HttpGateway::new(&server.base_url(), Credentials::default()).unwrap();
        RestInventoryApi::new(gateway, variant)
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!(
            "dedicated".parse::<ThresholdVariant>().unwrap(),
            ThresholdVariant::Dedicated
        );
        assert_eq!(
            "part-field".parse::<ThresholdVariant>().unwrap(),
            ThresholdVariant::PartField
        );
        assert!("partfield".parse::<ThresholdVariant>().is_err());
        assert_eq!(ThresholdVariant::Dedicated.to_string(), "dedicated");
    }

    #[tokio::test]
    async fn test_fetch_part() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/part/42/");
                then.status(200).json_body(serde_json::json!({
                    "pk": 42,
                    "name": "M3 Screw",
                    "available_stock": 5,
                    "minimum_stock": 10
                }));
            })
            .await;

        let api = rest_api(&server, ThresholdVariant::Dedicated);
        let part = api.fetch_part(PartId(42)).await.unwrap();
        assert_eq!(part.id, PartId(42));
        assert_eq!(part.available_stock, 5.0);
    }

    #[tokio::test]
    async fn test_dedicated_threshold_roundtrip() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/plugin/stockthreshold/parts/42/");
                then.status(200)
                    .json_body(serde_json::json!({"part": 42, "stock_threshold": 7}));
            })
            .await;
        let put = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/plugin/stockthreshold/parts/42/")
                    .json_body(serde_json::json!({"stock_threshold": 12.0}));
                then.status(200)
                    .json_body(serde_json::json!({"part": 42, "stock_threshold": 12}));
            })
            .await;

        let api = rest_api(&server, ThresholdVariant::Dedicated);
        let record = api.get_threshold(PartId(42)).await.unwrap();
        assert_eq!(record.stock_threshold, 7.0);

        let echoed = api.set_threshold(PartId(42), 12.0).await.unwrap();
        put.assert_async().await;
        assert_eq!(echoed.stock_threshold, 12.0);
    }

    #[tokio::test]
    async fn test_part_field_variant_reads_minimum_stock() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/part/9/");
                then.status(200).json_body(serde_json::json!({
                    "pk": 9,
                    "name": "Bolt",
                    "available_stock": 4,
                    "minimum_stock": 6
                }));
            })
            .await;

        let api = rest_api(&server, ThresholdVariant::PartField);
        let record = api.get_threshold(PartId(9)).await.unwrap();
        assert_eq!(record.part, PartId(9));
        assert_eq!(record.stock_threshold, 6.0);
    }

    #[tokio::test]
    async fn test_part_field_variant_saves_via_part_resource() {
        let server = MockServer::start_async().await;
        let put = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/part/9/")
                    .json_body(serde_json::json!({"minimum_stock": 3.0}));
                then.status(200).json_body(serde_json::json!({
                    "pk": 9,
                    "name": "Bolt",
                    "available_stock": 4,
                    "minimum_stock": 3
                }));
            })
            .await;

        let api = rest_api(&server, ThresholdVariant::PartField);
        let echoed = api.set_threshold(PartId(9), 3.0).await.unwrap();
        put.assert_async().await;
        assert_eq!(echoed.stock_threshold, 3.0);
    }

    #[tokio::test]
    async fn test_list_candidates_unwraps_results_page() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/part/")
                    .query_param("minimum_stock__gt", "0");
                then.status(200).json_body(serde_json::json!({
                    "results": [
                        {"pk": 1, "name": "A", "available_stock": 1, "minimum_stock": 5},
                        {"pk": 2, "name": "B", "available_stock": 9, "minimum_stock": 5}
                    ]
                }));
            })
            .await;

        let api = rest_api(&server, ThresholdVariant::Dedicated);
        let parts = api.list_candidates().await.unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "A");
    }
}
