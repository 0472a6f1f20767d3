// src/scorer.rs
//! Keyword heuristic that scores email text for phishing indicators.

use crate::rules::{
    keyword_indicator, BASE_CONFIDENCE, DOMAIN_PATTERN, INSECURE_URL_PREFIX, KEYWORDS,
    KEYWORD_WEIGHT, LINK_INDICATOR, LINK_WEIGHT, MAX_CONFIDENCE, MONEY_INDICATOR, MONEY_PATTERN,
    MONEY_WEIGHT, NO_INDICATORS, PHISHING_RECOMMENDATION, PHISHING_THRESHOLD,
    SAFE_RECOMMENDATION,
};
use crate::types::AnalysisResult;
use regex::Regex;
use std::sync::LazyLock;

static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOMAIN_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static MONEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MONEY_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Matched rules and the points they contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub score: u32,
    pub indicators: Vec<String>,
}

pub struct HeuristicScorer;

impl HeuristicScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Runs every rule against the lower-cased text.
    /// Indicators are ordered: keywords (list order), link, money.
    #[must_use]
    pub fn inspect(&self, text: &str) -> Findings {
        let text = text.to_lowercase();
        let mut findings = Findings::default();

        for keyword in KEYWORDS {
            if text.contains(keyword) {
                findings.score += KEYWORD_WEIGHT;
                findings.indicators.push(keyword_indicator(keyword));
            }
        }

        if text.contains(INSECURE_URL_PREFIX) || DOMAIN_RE.is_match(&text) {
            findings.score += LINK_WEIGHT;
            findings.indicators.push(LINK_INDICATOR.to_string());
        }

        if MONEY_RE.is_match(&text) {
            findings.score += MONEY_WEIGHT;
            findings.indicators.push(MONEY_INDICATOR.to_string());
        }

        findings
    }

    /// Raw suspicion score before it is mapped to a verdict.
    #[must_use]
    pub fn score(&self, text: &str) -> u32 {
        self.inspect(text).score
    }

    #[must_use]
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let Findings { score, indicators } = self.inspect(text);
        let is_phishing = score > PHISHING_THRESHOLD;

        let indicators = if indicators.is_empty() {
            vec![NO_INDICATORS.to_string()]
        } else {
            indicators
        };

        let recommendation = if is_phishing {
            PHISHING_RECOMMENDATION
        } else {
            SAFE_RECOMMENDATION
        };

        AnalysisResult {
            is_phishing,
            confidence: confidence_for(score),
            indicators,
            recommendation: recommendation.to_string(),
        }
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a score onto the `50..=95` confidence band.
#[must_use]
pub fn confidence_for(score: u32) -> u8 {
    let capped = BASE_CONFIDENCE.saturating_add(score).min(MAX_CONFIDENCE);
    u8::try_from(capped).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_capped() {
        assert_eq!(confidence_for(0), 50);
        assert_eq!(confidence_for(25), 75);
        assert_eq!(confidence_for(45), 95);
        assert_eq!(confidence_for(145), 95);
        assert_eq!(confidence_for(u32::MAX), 95);
    }

    #[test]
    fn keywords_match_case_insensitively() {
        let f = HeuristicScorer::new().inspect("URGENT: Verify now");
        assert_eq!(f.score, 20);
        assert_eq!(
            f.indicators,
            vec![
                "Contains urgency keyword: \"urgent\"".to_string(),
                "Contains urgency keyword: \"verify\"".to_string(),
            ]
        );
    }

    #[test]
    fn repeated_keyword_counts_once() {
        assert_eq!(HeuristicScorer::new().score("urgent urgent urgent"), 10);
    }

    #[test]
    fn insecure_prefix_alone_fires_link_rule() {
        let f = HeuristicScorer::new().inspect("go to http://");
        assert_eq!(f.score, 15);
        assert_eq!(f.indicators, vec![LINK_INDICATOR.to_string()]);
    }

    #[test]
    fn domain_pattern_fires_link_rule() {
        assert_eq!(HeuristicScorer::new().score("see example.com"), 15);
    }

    #[test]
    fn single_letter_tld_is_not_a_domain() {
        assert_eq!(HeuristicScorer::new().score("version 2.x is out"), 0);
    }

    #[test]
    fn dollar_amount_fires_money_rule() {
        let f = HeuristicScorer::new().inspect("you won $500");
        assert_eq!(f.score, 10);
        assert_eq!(f.indicators, vec![MONEY_INDICATOR.to_string()]);
    }

    #[test]
    fn bare_dollar_sign_is_not_money() {
        assert_eq!(HeuristicScorer::new().score("costs $ a lot"), 0);
    }
}
