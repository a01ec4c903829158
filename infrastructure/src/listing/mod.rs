//! Product catalog adapter for the [`ListingGateway`] port.
//!
//! [`ListingGateway`]: assistant_application::ListingGateway

mod gateway;
mod wire;

pub use gateway::RapidApiListingGateway;
