// src/rules.rs
//! Fixed indicator rules for the heuristic scorer.
//!
//! Every constant here is part of the scoring contract. Changing a keyword,
//! weight or threshold changes the verdict for existing inputs.

// --- Keyword rule ---
pub const KEYWORDS: &[&str] = &[
    "urgent",
    "verify",
    "suspend",
    "click here",
    "account",
    "password",
    "confirm",
    "security alert",
    "unusual activity",
    "limited time",
];
pub const KEYWORD_WEIGHT: u32 = 10;

// --- Link rule ---
pub const INSECURE_URL_PREFIX: &str = "http://";
pub const DOMAIN_PATTERN: &str = r"[a-z0-9-]+\.[a-z]{2,}";
pub const LINK_WEIGHT: u32 = 15;
pub const LINK_INDICATOR: &str = "Contains suspicious links";

// --- Money rule ---
// ASCII digits only.
pub const MONEY_PATTERN: &str = r"\$[0-9]+";
pub const MONEY_WEIGHT: u32 = 10;
pub const MONEY_INDICATOR: &str = "Mentions monetary amounts";

// --- Verdict ---
/// Scores strictly above this value are classified as phishing.
pub const PHISHING_THRESHOLD: u32 = 25;
pub const BASE_CONFIDENCE: u32 = 50;
pub const MAX_CONFIDENCE: u32 = 95;

pub const NO_INDICATORS: &str = "No major red flags detected";

pub const PHISHING_RECOMMENDATION: &str = "This email shows multiple phishing indicators. Do not click any links or provide information. Delete this email and report it to your IT security team.";
pub const SAFE_RECOMMENDATION: &str = "This email appears legitimate, but always verify sender information and be cautious with links and attachments.";

/// Formats the indicator line for a matched keyword.
#[must_use]
pub fn keyword_indicator(keyword: &str) -> String {
    format!("Contains urgency keyword: \"{keyword}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_list_is_fixed() {
        assert_eq!(KEYWORDS.len(), 10);
        assert_eq!(KEYWORDS.first(), Some(&"urgent"));
        assert_eq!(KEYWORDS.last(), Some(&"limited time"));
    }

    #[test]
    fn keywords_are_lowercase() {
        for k in KEYWORDS {
            assert_eq!(*k, k.to_lowercase());
        }
    }

    #[test]
    fn keyword_indicator_quotes_keyword() {
        assert_eq!(
            keyword_indicator("verify"),
            "Contains urgency keyword: \"verify\""
        );
    }
}
