//! Shared HTTP plumbing for the outbound gateways.
//!
//! Both adapters send a single request and map the outcome into
//! [`GatewayError`]; the mapping lives here so they agree on it.

use assistant_application::{GatewayError, Service};
use serde_json::Value;

/// Requests wait for the service however long it takes.
pub(crate) fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().build()
}

/// The request never produced a response (DNS, refused, reset, body read).
pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Connection(err.to_string())
}

/// Map a non-2xx response.
///
/// 401 and 403 are credential problems. Anything else becomes
/// [`GatewayError::Status`] carrying the service's own message when the body
/// has one (`message` or `error.message`), otherwise `fallback`.
pub(crate) fn status_error(service: Service, status: u16, body: &str, fallback: &str) -> GatewayError {
    if status == 401 || status == 403 {
        return GatewayError::Unauthorized { service, status };
    }
    let message = body_message(body).unwrap_or_else(|| fallback.to_string());
    GatewayError::Status { status, message }
}

fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.pointer("/error/message").and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
