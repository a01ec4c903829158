//! Listing Gateway port
//!
//! Defines the interface for looking up the product catalog.

use super::completion_gateway::GatewayError;
use async_trait::async_trait;

/// Gateway to a product listing endpoint
#[async_trait]
pub trait ListingGateway: Send + Sync {
    /// Whether a credential is available. When false, [`list_items`] fails
    /// with [`GatewayError::NotConfigured`] without sending anything.
    ///
    /// [`list_items`]: ListingGateway::list_items
    fn is_configured(&self) -> bool;

    /// Fetch the names of the available items. A response that is not a
    /// sequence yields an empty list.
    async fn list_items(&self) -> Result<Vec<String>, GatewayError>;
}
