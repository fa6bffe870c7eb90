//! Analysis backend client
//!
//! [`CheckService`] is the seam between the engine and the network: the
//! engine only ever calls `check`, so tests can swap in a fake backend.

use std::time::Duration;

use sitecheck_core::prelude::*;
use sitecheck_core::{AnalysisResult, CheckRequest};
use url::Url;

use crate::config::BackendSettings;

/// Submits a URL for analysis
#[trait_variant::make(CheckService: Send)]
pub trait LocalCheckService {
    /// POST the URL to the backend and decode its verdict.
    ///
    /// Network failures, non-2xx responses, and undecodable bodies are all
    /// errors for which [`Error::is_transport`] is true.
    async fn check(&self, url: &str) -> Result<AnalysisResult>;
}

/// reqwest-backed client for `POST /check`
#[derive(Debug, Clone)]
pub struct HttpCheckClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpCheckClient {
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let endpoint = settings.endpoint()?;

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "sitecheck/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::backend(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CheckService for HttpCheckClient {
    async fn check(&self, url: &str) -> Result<AnalysisResult> {
        debug!("POST {} url={}", self.endpoint, url);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&CheckRequest::new(url))
            .send()
            .await
            .map_err(|e| Error::backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BackendStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::backend(e.to_string()))?;

        AnalysisResult::from_json(&body).map_err(|e| {
            trace!("Undecodable body: {}", body);
            match e {
                Error::Decode { .. } => e,
                other => Error::decode(other.to_string()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{BackendSettings, CheckService, Error, HttpCheckClient};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral port and return its base URL
    async fn spawn_backend(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> HttpCheckClient {
        HttpCheckClient::new(&BackendSettings {
            base_url,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_check_path() {
        let client = client_for("http://localhost:5000".into());
        assert_eq!(client.endpoint().as_str(), "http://localhost:5000/check");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = HttpCheckClient::new(&BackendSettings {
            base_url: "not a url".into(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint { .. }));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_posts_json_body_and_decodes_verdict() {
        // Json extractor rejects anything not sent as application/json
        let router = Router::new().route(
            "/check",
            post(|Json(body): Json<Value>| async move {
                let url = body["url"].as_str().unwrap_or_default().to_string();
                Json(json!({
                    "url": url,
                    "domain_name": "example.com",
                    "ip": "93.184.216.34",
                    "trust_score": 85,
                    "status": "Genuine",
                    "reason": "Website reachable (HEAD, 200)",
                }))
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let result = client.check("https://example.com").await.unwrap();

        assert_eq!(result.url.as_deref(), Some("https://example.com"));
        assert_eq!(result.trust_score, Some(85.0));
        assert!(result.is_genuine());
        assert_eq!(result.purpose, None);
    }

    #[tokio::test]
    async fn test_server_error_is_transport_failure() {
        let router = Router::new().route(
            "/check",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"status": "Genuine"})),
                )
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let err = client.check("example.com").await.unwrap_err();

        assert!(matches!(err, Error::BackendStatus { status: 500 }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_failure() {
        let router = Router::new().route(
            "/check",
            post(|| async { "<html>Internal Server Error</html>" }),
        );
        let client = client_for(spawn_backend(router).await);

        let err = client.check("example.com").await.unwrap_err();

        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}"));
        let err = client.check("example.com").await.unwrap_err();

        assert!(matches!(err, Error::Backend { .. }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_timeout_is_transport_failure() {
        let router = Router::new().route(
            "/check",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let base_url = spawn_backend(router).await;
        let client = HttpCheckClient::new(&BackendSettings {
            base_url,
            timeout_secs: Some(1),
            ..Default::default()
        })
        .unwrap();

        let err = client.check("example.com").await.unwrap_err();
        assert!(err.is_transport());
    }
}
