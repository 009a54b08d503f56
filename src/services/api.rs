use crate::config::Config;
use crate::models::{commission::CommissionReport, error::AppError, shop::ShopId};
use reqwest::Url;
use std::ops::Deref;
use std::rc::Rc;

const COMMISSIONS_PATH: &str = "shop_commission";

// API CONFIGURATION
/// Configuration for the commissions API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `{base_url}/shop_commission/{shop_id}` with the id encoded as one path segment.
    pub fn commissions_url(&self, shop_id: &ShopId) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            AppError::ConfigError(format!("Invalid base URL {}: {e}", self.base_url))
        })?;

        url.path_segments_mut()
            .map_err(|()| {
                AppError::ConfigError(format!("Base URL cannot hold a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(COMMISSIONS_PATH)
            .push(shop_id.as_str());

        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
        }
    }
}

// COMMISSIONS CLIENT
/// HTTP client for the shop commissions backend.
#[derive(Debug)]
pub struct CommissionsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CommissionsClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches daily and weekly commission summaries for one shop.
    pub async fn fetch_commissions(&self, shop_id: &ShopId) -> Result<CommissionReport, AppError> {
        let url = self.config.commissions_url(shop_id)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::NetworkError(format!("Request timeout: {error}"))
        } else if error.is_builder() {
            AppError::ConfigError(format!("Invalid request: {error}"))
        } else {
            AppError::NetworkError(format!("Request failed: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ServerError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

/// Shared client handed to views through a Yew context.
#[derive(Debug, Clone)]
pub struct ApiHandle(Rc<CommissionsClient>);

impl ApiHandle {
    pub fn new(client: CommissionsClient) -> Self {
        Self(Rc::new(client))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiHandle {
    type Target = CommissionsClient;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop(id: &str) -> ShopId {
        ShopId::parse(id).unwrap()
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::API_BASE_URL);
    }

    #[test]
    fn test_commissions_url_construction() {
        let config = ApiConfig::builder()
            .base_url("https://api.example.com")
            .build();

        let url = config.commissions_url(&shop("S1")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/shop_commission/S1");
    }

    #[test]
    fn test_commissions_url_keeps_base_path() {
        let config = ApiConfig::builder()
            .base_url("https://api.example.com/v2/")
            .build();

        let url = config.commissions_url(&shop("S1")).unwrap();
        assert_eq!(url.path(), "/v2/shop_commission/S1");
    }

    #[test]
    fn test_commissions_url_encodes_shop_id() {
        let config = ApiConfig::builder()
            .base_url("https://api.example.com")
            .build();

        let url = config.commissions_url(&shop("shop 1/a")).unwrap();
        assert_eq!(url.path(), "/shop_commission/shop%201%2Fa");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = ApiConfig::builder().base_url("not a url").build();
        assert!(matches!(
            config.commissions_url(&shop("S1")),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_status_classification() {
        let client = CommissionsClient::new().unwrap();

        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::NOT_FOUND, ""),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            AppError::ServerError(_)
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::BAD_REQUEST, ""),
            AppError::ApiError(_)
        ));
    }

    #[test]
    fn test_api_handle_equality_is_identity() {
        let a = ApiHandle::new(CommissionsClient::new().unwrap());
        let b = a.clone();
        let c = ApiHandle::new(CommissionsClient::new().unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
