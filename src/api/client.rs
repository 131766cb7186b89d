use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::storage::config::ApiConfig;
use crate::studio::{Client, ClientPortal, NewClient, Shoot};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudioApi: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<Client>, ApiError>;

    /// Returns the created record when the server echoes one back.
    async fn create_client(&self, client: &NewClient) -> Result<Option<Client>, ApiError>;

    async fn list_shoots(&self) -> Result<Vec<Shoot>, ApiError>;

    async fn fetch_portal(&self, token: &str) -> Result<ClientPortal, ApiError>;
}

pub struct HttpStudioClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStudioClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::info!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::info!("GET {} response status: {}", path, status);

        if status == 404 {
            tracing::warn!("Resource not found: {}", path);
            return Err(ApiError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Request to {} failed. Status: {}, Body: {}", path, status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to decode response from {}: {}", path, e);
            ApiError::ParseError(e.to_string())
        })
    }
}

impl Default for HttpStudioClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudioApi for HttpStudioClient {
    async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        let clients: Vec<Client> = self.fetch_json("/clients").await?;
        tracing::info!("Fetched {} clients", clients.len());
        Ok(clients)
    }

    async fn create_client(&self, client: &NewClient) -> Result<Option<Client>, ApiError> {
        let url = self.url("/clients");

        tracing::info!("Creating client: {}", client.name);
        tracing::debug!("POST {} with payload: {:?}", url, client);

        let response = self.client
            .post(&url)
            .json(client)
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Create client response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Failed to create client. Status: {}, Body: {}", status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        let body = response.text().await?;
        let created = serde_json::from_str::<Client>(&body).ok();
        if created.is_none() {
            tracing::debug!("Create client response carried no client record");
        }

        Ok(created)
    }

    async fn list_shoots(&self) -> Result<Vec<Shoot>, ApiError> {
        let shoots: Vec<Shoot> = self.fetch_json("/shoots").await?;
        tracing::info!("Fetched {} shoots", shoots.len());
        Ok(shoots)
    }

    async fn fetch_portal(&self, token: &str) -> Result<ClientPortal, ApiError> {
        let path = format!("/portal/{}", urlencoding::encode(token));
        self.fetch_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::ProtectionLevel;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpStudioClient {
        HttpStudioClient::new().with_base_url(server.uri())
    }

    #[test]
    fn studio_client_has_default_base_url() {
        let client = HttpStudioClient::new();

        assert_eq!(client.base_url(), "http://localhost:3001");
    }

    #[test]
    fn studio_client_strips_trailing_slash() {
        let client = HttpStudioClient::new().with_base_url("http://api.local/".to_string());

        assert_eq!(client.base_url(), "http://api.local");
    }

    #[test]
    fn studio_client_builds_from_config() {
        let config = ApiConfig {
            base_url: "https://studio.example.com/api/".to_string(),
            timeout_seconds: 5,
        };

        let client = HttpStudioClient::from_config(&config).unwrap();

        assert_eq!(client.base_url(), "https://studio.example.com/api");
    }

    #[tokio::test]
    async fn lists_clients() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/clients"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Salvation York", "email": null, "portalToken": "sal"},
                {"id": 2, "name": "Flares York", "email": "hi@flares.test", "portalToken": "fla"}
            ])))
            .mount(&server)
            .await;

        let clients = client_for(&server).list_clients().await.unwrap();

        assert_eq!(clients.len(), 2);
        assert_eq!(clients[1].email.as_deref(), Some("hi@flares.test"));
    }

    #[tokio::test]
    async fn server_error_is_reported_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shoots"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_shoots().await.unwrap_err();

        match err {
            ApiError::RequestError(message) => assert!(message.contains("500") && message.contains("boom")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/clients"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_clients().await.unwrap_err();

        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn posts_new_client_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/clients"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"name": "Harper family"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!(
                {"id": 9, "name": "Harper family", "email": null, "portalToken": "harper"}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let new_client = NewClient::from_input("Harper family", None).unwrap();
        let created = client_for(&server).create_client(&new_client).await.unwrap();

        assert_eq!(created.map(|c| c.portal_token), Some("harper".to_string()));
    }

    #[tokio::test]
    async fn create_client_tolerates_empty_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/clients"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let new_client = NewClient::from_input("Urban Fitness", Some("uf@example.com")).unwrap();
        let created = client_for(&server).create_client(&new_client).await.unwrap();

        assert!(created.is_none());
    }

    #[tokio::test]
    async fn fetches_portal_by_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/portal/tok-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 42,
                "name": "Greenleaf Naturals",
                "protectionLevel": "FULL",
                "shoots": [],
                "galleries": []
            })))
            .mount(&server)
            .await;

        let portal = client_for(&server).fetch_portal("tok-42").await.unwrap();

        assert_eq!(portal.name, "Greenleaf Naturals");
        assert_eq!(portal.protection_level, ProtectionLevel::Full);
    }

    #[tokio::test]
    async fn unknown_portal_token_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/portal/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_portal("missing").await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn portal_token_is_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/portal/a%2Fb"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_portal("a/b").await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
