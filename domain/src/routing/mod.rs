//! Message routing.
//!
//! - [`intent::Intent`] — which external service answers a user message

pub mod intent;
