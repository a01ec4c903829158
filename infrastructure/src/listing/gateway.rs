//! HTTP implementation of the listing gateway.

use super::wire::parse_listing;
use crate::config::FileListingConfig;
use crate::error::InfraError;
use crate::http::{build_client, status_error, transport_error};
use assistant_application::{GatewayError, ListingGateway, Service};
use async_trait::async_trait;
use tracing::{debug, warn};

const HOST_HEADER: &str = "X-RapidAPI-Host";
const KEY_HEADER: &str = "X-RapidAPI-Key";

/// Fetches the catalog from a RapidAPI-style endpoint.
pub struct RapidApiListingGateway {
    http: reqwest::Client,
    endpoint: String,
    host: String,
    api_key: Option<String>,
}

impl RapidApiListingGateway {
    pub fn new(config: &FileListingConfig, api_key: Option<String>) -> Result<Self, InfraError> {
        Ok(Self {
            http: build_client()?,
            endpoint: config.endpoint.clone(),
            host: config.host.clone(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Build from config, resolving the key from the config or environment.
    pub fn from_config(config: &FileListingConfig) -> Result<Self, InfraError> {
        Self::new(config, config.resolve_api_key())
    }
}

#[async_trait]
impl ListingGateway for RapidApiListingGateway {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn list_items(&self) -> Result<Vec<String>, GatewayError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GatewayError::NotConfigured(Service::Listing));
        };

        debug!("GET {}", self.endpoint);
        let response = self
            .http
            .get(&self.endpoint)
            .header(HOST_HEADER, &self.host)
            .header(KEY_HEADER, api_key)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        if !(200..300).contains(&status) {
            warn!("Listing request failed with status {}", status);
            let fallback = format!("Failed to fetch inventory (Status: {status})");
            return Err(status_error(Service::Listing, status, &body, &fallback));
        }

        let items = parse_listing(&body)?;
        debug!("Listing returned {} items", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{closed_url, serve_once};

    fn config(endpoint: &str) -> FileListingConfig {
        FileListingConfig {
            endpoint: endpoint.to_string(),
            ..FileListingConfig::default()
        }
    }

    #[tokio::test]
    async fn test_unconfigured_sends_nothing() {
        let gateway = RapidApiListingGateway::new(&config("http://127.0.0.1:9/"), None).unwrap();
        assert!(!gateway.is_configured());
        assert_eq!(
            gateway.list_items().await,
            Err(GatewayError::NotConfigured(Service::Listing))
        );
    }

    #[tokio::test]
    async fn test_list_items_sends_rapidapi_headers() {
        let (url, request) = serve_once(200, r#"["Apple","Samsung",7]"#).await;
        let gateway = RapidApiListingGateway::new(&config(&url), Some("rapid-key".into())).unwrap();

        let items = gateway.list_items().await.unwrap();
        assert_eq!(items, vec!["Apple", "Samsung", "7"]);

        let raw = request.await.unwrap().to_lowercase();
        assert!(raw.starts_with("get / "));
        assert!(raw.contains("x-rapidapi-host: mobile-phones2.p.rapidapi.com"));
        assert!(raw.contains("x-rapidapi-key: rapid-key"));
    }

    #[tokio::test]
    async fn test_object_response_is_empty_list() {
        let (url, _request) = serve_once(200, r#"{"status":"ok"}"#).await;
        let gateway = RapidApiListingGateway::new(&config(&url), Some("k".into())).unwrap();
        assert!(gateway.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_forbidden_is_unauthorized() {
        let (url, _request) = serve_once(403, r#"{"message":"You are not subscribed to this API."}"#).await;
        let gateway = RapidApiListingGateway::new(&config(&url), Some("k".into())).unwrap();
        assert_eq!(
            gateway.list_items().await,
            Err(GatewayError::Unauthorized {
                service: Service::Listing,
                status: 403
            })
        );
    }

    #[tokio::test]
    async fn test_status_error_carries_service_message() {
        let (url, _request) = serve_once(429, r#"{"message":"Too many requests"}"#).await;
        let gateway = RapidApiListingGateway::new(&config(&url), Some("k".into())).unwrap();
        assert_eq!(
            gateway.list_items().await,
            Err(GatewayError::Status {
                status: 429,
                message: "Too many requests".into()
            })
        );
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let gateway = RapidApiListingGateway::new(&config(&closed_url().await), Some("k".into())).unwrap();
        assert!(matches!(
            gateway.list_items().await,
            Err(GatewayError::Connection(_))
        ));
    }
}
