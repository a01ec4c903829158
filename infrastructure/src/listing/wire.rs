use assistant_application::GatewayError;
use serde_json::Value;

/// Turn a catalog response body into display names.
///
/// Strings are kept verbatim and numbers are rendered as text; other element
/// kinds are skipped. A body that is valid JSON but not an array has no
/// items.
pub(super) fn parse_listing(body: &str) -> Result<Vec<String>, GatewayError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("listing response: {e}")))?;

    let Value::Array(elements) = value else {
        return Ok(Vec::new());
    };

    Ok(elements
        .into_iter()
        .filter_map(|element| match element {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}
