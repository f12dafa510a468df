//! Shared HTTP gateway used by both widgets.
//!
//! Wraps a [`reqwest::Client`] with base-URL joining, JSON
//! (de)serialization, and the host-supplied credential headers. The
//! credentials are opaque to this crate; they are attached verbatim.
//!
//! Any non-2xx status is reported as a failure. 404 is distinguished only
//! so the threshold lookup can treat a missing record as "not yet set".

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StockError, StockResult};

/// Header carrying the anti-forgery token on mutating requests
pub const CSRF_HEADER: &str = "X-CSRFToken";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Opaque credentials supplied by the host environment.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Anti-forgery token for mutating requests
    pub csrf_token: Option<String>,
    /// API token sent as `Authorization: Token <...>`
    pub auth_token: Option<String>,
}

/// JSON-over-HTTP transport shared by the panel and the dashboard.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpGateway {
    /// Build a gateway for the given server.
    ///
    /// The base URL is normalized to end with a slash so request paths
    /// always join below it.
    pub fn new(base_url: &str, credentials: Credentials) -> StockResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("stockwatch")
            .build()
            .map_err(|e| StockError::Network(e.to_string()))?;

        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|e| StockError::Url(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// The server this gateway talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> StockResult<T> {
        let request = self.client.get(self.url(path)?);
        self.send(self.with_auth(request)).await
    }

    /// PUT a JSON body and decode the echoed resource.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> StockResult<T> {
        let request = self.client.put(self.url(path)?).json(body);
        self.send(self.with_write_credentials(request)).await
    }

    fn url(&self, path: &str) -> StockResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| StockError::Url(e.to_string()))
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials.auth_token {
            Some(token) => request.header(AUTHORIZATION, format!("Token {token}")),
            None => request,
        }
    }

    /// Mutating requests carry the anti-forgery token in addition to auth.
    fn with_write_credentials(&self, request: RequestBuilder) -> RequestBuilder {
        let request = self.with_auth(request);
        match &self.credentials.csrf_token {
            Some(csrf) => request.header(CSRF_HEADER, csrf),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> StockResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| StockError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StockError::NotFound);
        }
        if !status.is_success() {
            return Err(StockError::Rejected {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StockError::Network(e.to_string()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, Debug)]
    struct Payload {
        value: i64,
    }

    fn credentials() -> Credentials {
        Credentials {
            csrf_token: Some("csrf-abc".into()),
            auth_token: Some("token-xyz".into()),
        }
    }

    #[tokio::test]
    async fn test_get_attaches_auth_header() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/thing/")
                    .header("authorization", "Token token-xyz");
                then.status(200).json_body(serde_json::json!({"value": 3}));
            })
            .await;

        let gateway = HttpGateway::new(&server.base_url(), credentials()).unwrap();
        let payload: Payload = gateway.get_json("api/thing/").await.unwrap();

        mock.assert_async().await;
        assert_eq!(payload.value, 3);
    }

    #[tokio::test]
    async fn test_put_attaches_csrf_and_auth() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/thing/")
                    .header("authorization", "Token token-xyz")
                    .header(CSRF_HEADER, "csrf-abc")
                    .json_body(serde_json::json!({"value": 9}));
                then.status(200).json_body(serde_json::json!({"value": 9}));
            })
            .await;

        let gateway = HttpGateway::new(&server.base_url(), credentials()).unwrap();
        let body = serde_json::json!({"value": 9});
        let payload: Payload = gateway.put_json("api/thing/", &body).await.unwrap();

        mock.assert_async().await;
        assert_eq!(payload.value, 9);
    }

    #[tokio::test]
    async fn test_not_found_is_distinguished() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/missing/");
                then.status(404);
            })
            .await;

        let gateway = HttpGateway::new(&server.base_url(), Credentials::default()).unwrap();
        let err = gateway.get_json::<Payload>("api/missing/").await.unwrap_err();
        assert!(matches!(err, StockError::NotFound));
    }

    #[tokio::test]
    async fn test_non_success_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/thing/");
                then.status(500);
            })
            .await;

        let gateway = HttpGateway::new(&server.base_url(), Credentials::default()).unwrap();
        let err = gateway.get_json::<Payload>("api/thing/").await.unwrap_err();
        assert!(matches!(err, StockError::Rejected { status: 500 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/thing/");
                then.status(200).body("not json");
            })
            .await;

        let gateway = HttpGateway::new(&server.base_url(), Credentials::default()).unwrap();
        let err = gateway.get_json::<Payload>("api/thing/").await.unwrap_err();
        assert!(matches!(err, StockError::Decode(_)));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let gateway = HttpGateway::new("http://inventory.local", Credentials::default()).unwrap();
        assert_eq!(gateway.base_url().as_str(), "http://inventory.local/");

        let invalid = HttpGateway::new("not a url", Credentials::default());
        assert!(matches!(invalid, Err(StockError::Url(_))));
    }
}
