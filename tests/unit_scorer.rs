// tests/unit_scorer.rs
//! Behavioral tests for the heuristic scorer.
//!
//! VERIFICATION STRATEGY:
//! 1. Baseline: clean text yields the placeholder at confidence 50.
//! 2. Monotonicity: every keyword adds exactly 10 until the 95 cap.
//! 3. Threshold: score 25 is safe, 26+ is phishing.
//! 4. Determinism: repeated calls agree.

use phishguard_core::rules::{KEYWORDS, NO_INDICATORS, PHISHING_RECOMMENDATION, SAFE_RECOMMENDATION};
use phishguard_core::scorer::HeuristicScorer;

fn scorer() -> HeuristicScorer {
    HeuristicScorer::new()
}

#[test]
fn test_clean_text_is_safe_baseline() {
    let r = scorer().analyze("Hi team, lunch is at noon tomorrow. See you there");
    assert!(!r.is_phishing);
    assert_eq!(r.confidence, 50);
    assert_eq!(r.indicators, vec![NO_INDICATORS.to_string()]);
    assert_eq!(r.recommendation, SAFE_RECOMMENDATION);
}

#[test]
fn test_each_keyword_adds_ten() {
    let s = scorer();
    let mut text = String::new();
    for (i, keyword) in KEYWORDS.iter().enumerate() {
        text.push_str(keyword);
        text.push_str(" ; ");
        let expected = (50 + 10 * (i + 1)).min(95);
        assert_eq!(usize::from(s.analyze(&text).confidence), expected, "after {keyword}");
    }
}

#[test]
fn test_all_keywords_listed_in_order() {
    let text = KEYWORDS.join(" | ");
    let r = scorer().analyze(&text);
    let expected: Vec<String> = KEYWORDS
        .iter()
        .map(|k| format!("Contains urgency keyword: \"{k}\""))
        .collect();
    assert_eq!(r.indicators, expected);
    assert_eq!(r.confidence, 95);
    assert!(r.is_phishing);
}

#[test]
fn test_threshold_boundary() {
    // link (15) + one keyword (10) = 25: not phishing
    let r = scorer().analyze("please verify at http://");
    assert!(!r.is_phishing);
    assert_eq!(r.confidence, 75);

    // link (15) + money (10) + keyword (10) = 35: phishing
    let r = scorer().analyze("please verify at http:// to claim $100");
    assert!(r.is_phishing);
    assert_eq!(r.confidence, 85);
    assert_eq!(r.recommendation, PHISHING_RECOMMENDATION);
}

#[test]
fn test_indicator_order_keywords_link_money() {
    let r = scorer().analyze("Send $50 to secure-bank.com, it is urgent");
    assert_eq!(
        r.indicators,
        vec![
            "Contains urgency keyword: \"urgent\"".to_string(),
            "Contains suspicious links".to_string(),
            "Mentions monetary amounts".to_string(),
        ]
    );
    assert!(r.is_phishing);
    assert_eq!(r.confidence, 85);
}

#[test]
fn test_classic_phishing_sample() {
    let email = "From: suspicious@email.com\nSubject: Urgent Account Verification\n\n\
                 Dear user,\nYour account has been compromised. Click here to verify your password.";
    let r = scorer().analyze(email);
    assert!(r.is_phishing);
    assert_eq!(r.confidence, 95);
    assert!(r.indicators.iter().any(|i| i.contains("\"click here\"")));
    assert!(r.indicators.iter().any(|i| i == "Contains suspicious links"));
}

#[test]
fn test_deterministic() {
    let s = scorer();
    let text = "Security alert: unusual activity on your account";
    assert_eq!(s.analyze(text), s.analyze(text));
    assert_eq!(s.score(text), 30);
}

#[test]
fn test_money_rule_needs_ascii_digits() {
    let s = scorer();
    assert_eq!(s.score("pay $\u{0663}\u{0660}\u{0660} now"), 0);
    assert_eq!(s.score("pay $\u{FF15}\u{FF10} now"), 0);
    assert_eq!(s.score("pay $300 now"), 10);
}
