use crate::core::{ConfigProvider, DeployRequest, DeployResponse, DeployTransport};
use crate::utils::error::{DeployError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEPLOY_ENDPOINT: &str = "/api/deploy";

/// Reported when the deployer answers with an error status and no body.
pub const EMPTY_ERROR_BODY: &str = "Deployment failed.";

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(server_url: &str) -> Self {
        Self::with_endpoint_path(server_url, DEPLOY_ENDPOINT)
    }

    pub fn with_endpoint_path(server_url: &str, endpoint_path: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), endpoint_path),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::with_endpoint_path(config.server_url(), config.endpoint_path())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DeployTransport for HttpTransport {
    async fn deploy(&self, request: &DeployRequest) -> Result<DeployResponse> {
        tracing::debug!("POST {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("Deployer response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(DeployError::Server {
                status: status.as_u16(),
                body: if body.is_empty() {
                    EMPTY_ERROR_BODY.to_string()
                } else {
                    body
                },
            });
        }

        let deployed: DeployResponse = serde_json::from_str(&body)?;
        Ok(deployed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let transport = HttpTransport::new("http://localhost:8000/");
        assert_eq!(transport.endpoint(), "http://localhost:8000/api/deploy");

        let transport = HttpTransport::with_endpoint_path("http://deployer.com", "/v2/deploy");
        assert_eq!(transport.endpoint(), "http://deployer.com/v2/deploy");
    }

    #[tokio::test]
    async fn test_posts_json_and_parses_success() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/deploy")
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "url": "https://example.com/repo.git",
                        "base_path": "/"
                    }));
                then.status(200).json_body(serde_json::json!({
                    "slug": "abc123",
                    "url": "https://abc123.example.com"
                }));
            })
            .await;

        let transport = HttpTransport::new(&server.base_url());
        let request = DeployRequest::from_inputs("https://example.com/repo.git", "");
        let response = transport.deploy(&request).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(response.slug, "abc123");
        assert_eq!(response.url, "https://abc123.example.com");
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/deploy");
                then.status(500).body("internal failure");
            })
            .await;

        let transport = HttpTransport::new(&server.base_url());
        let err = transport
            .deploy(&DeployRequest::from_inputs("u", "dist"))
            .await
            .unwrap_err();

        assert!(matches!(err, DeployError::Server { status: 500, .. }));
        assert_eq!(err.to_string(), "Server error: 500 internal failure");
    }

    #[tokio::test]
    async fn test_empty_error_body_falls_back() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/deploy");
                then.status(500);
            })
            .await;

        let transport = HttpTransport::new(&server.base_url());
        let err = transport
            .deploy(&DeployRequest::from_inputs("u", ""))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Server error: 500 Deployment failed.");
    }

    #[tokio::test]
    async fn test_unparseable_success_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/deploy");
                then.status(200).body("<html>ok</html>");
            })
            .await;

        let transport = HttpTransport::new(&server.base_url());
        let err = transport
            .deploy(&DeployRequest::from_inputs("u", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, DeployError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let transport = HttpTransport::new("http://127.0.0.1:1");
        let err = transport
            .deploy(&DeployRequest::from_inputs("u", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, DeployError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
