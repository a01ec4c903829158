//! Fixed assistant replies.
//!
//! Every assistant message that is not model output comes from here, so the
//! wording users see on fallbacks and failures lives in one place.

/// Seeded first message of every conversation.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Listing call succeeded but returned nothing.
pub const NO_PRODUCTS: &str = "No products available at the moment.";

/// Listing call failed for any reason.
pub const LISTING_UNAVAILABLE: &str = "I apologize, but I cannot access the inventory information at the moment. Please try again later.";

/// Completion call succeeded without usable text.
pub const COMPLETION_FALLBACK: &str = "I couldn’t process your request. Please try again.";

/// A credential is missing or was rejected.
pub const NOT_CONFIGURED: &str =
    "The chat service is not properly configured. Please check the API keys configuration.";

/// Any other failure.
pub const GENERIC_FAILURE: &str =
    "I apologize, but I encountered an error processing your request. Please try again later.";

/// Sentence announcing the listed items, or [`NO_PRODUCTS`] for an empty list.
pub fn listing_sentence<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return NO_PRODUCTS.to_string();
    }
    let joined = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Here are the available products: {}", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_sentence_joins_items() {
        assert_eq!(
            listing_sentence(&["Phone A", "Phone B"]),
            "Here are the available products: Phone A, Phone B"
        );
    }

    #[test]
    fn test_listing_sentence_single_item() {
        assert_eq!(
            listing_sentence(&[String::from("Nokia")]),
            "Here are the available products: Nokia"
        );
    }

    #[test]
    fn test_listing_sentence_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(listing_sentence(&empty), "No products available at the moment.");
    }
}
