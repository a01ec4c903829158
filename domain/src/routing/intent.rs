//! Intent classification

use serde::{Deserialize, Serialize};

/// Words that send a message to the product listing service.
pub const LISTING_KEYWORDS: [&str; 2] = ["inventory", "products"];

/// Which external service answers a user message (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Catalog lookup on the listing endpoint
    Listing,
    /// Free-form answer from the completion endpoint
    Completion,
}

impl Intent {
    /// Classify by case-insensitive substring match against
    /// [`LISTING_KEYWORDS`]. Anything else goes to the completion service.
    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if LISTING_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            Intent::Listing
        } else {
            Intent::Completion
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Listing => "listing",
            Intent::Completion => "completion",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_route_to_listing() {
        assert_eq!(Intent::classify("What's in your inventory?"), Intent::Listing);
        assert_eq!(Intent::classify("show me products"), Intent::Listing);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(Intent::classify("INVENTORY please"), Intent::Listing);
        assert_eq!(Intent::classify("Any Products today"), Intent::Listing);
    }

    #[test]
    fn test_substring_match() {
        // "byproducts" contains "products"
        assert_eq!(Intent::classify("chemical byproducts"), Intent::Listing);
    }

    #[test]
    fn test_other_text_routes_to_completion() {
        assert_eq!(Intent::classify("What are your hours?"), Intent::Completion);
        assert_eq!(Intent::classify("product"), Intent::Completion);
    }
}
