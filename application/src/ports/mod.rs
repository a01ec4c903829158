//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod completion_gateway;
pub mod conversation_logger;
pub mod conversation_notifier;
pub mod listing_gateway;
