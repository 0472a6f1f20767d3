// src/content.rs
//! Static educational content shown alongside the detector.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PreventionTip {
    pub title: &'static str,
    pub description: &'static str,
    pub actions: [&'static str; 4],
}

pub const PREVENTION_TIPS: &[PreventionTip] = &[
    PreventionTip {
        title: "Verify the Sender",
        description: "Always check the sender's email address carefully",
        actions: [
            "Look for slight misspellings in the domain",
            "Hover over links to see the actual URL",
            "Check if the domain matches the official website",
            "Be suspicious of generic greetings",
        ],
    },
    PreventionTip {
        title: "Use Strong Authentication",
        description: "Enable multi-factor authentication (MFA) on all accounts",
        actions: [
            "Use authenticator apps instead of SMS",
            "Enable biometric authentication when available",
            "Use unique passwords for each account",
            "Consider using a password manager",
        ],
    },
    PreventionTip {
        title: "Think Before You Click",
        description: "Never click suspicious links or download unknown attachments",
        actions: [
            "Manually type URLs instead of clicking links",
            "Scan attachments with antivirus software",
            "Verify requests through official channels",
            "Don't trust urgent or threatening messages",
        ],
    },
    PreventionTip {
        title: "Keep Software Updated",
        description: "Regular updates patch security vulnerabilities",
        actions: [
            "Enable automatic updates for OS and browsers",
            "Update security software regularly",
            "Keep all applications up to date",
            "Use supported software versions only",
        ],
    },
    PreventionTip {
        title: "Recognize Red Flags",
        description: "Be aware of common phishing indicators",
        actions: [
            "Urgency and pressure tactics",
            "Too good to be true offers",
            "Requests for sensitive information",
            "Poor grammar and spelling errors",
        ],
    },
    PreventionTip {
        title: "Verify Before Acting",
        description: "Confirm through official channels before responding",
        actions: [
            "Call the company directly using official numbers",
            "Log in through official websites, not email links",
            "Verify with IT department for work emails",
            "Report suspicious emails to security team",
        ],
    },
];

pub const DETECTOR_TITLE: &str = "Phishing Email Detector";
pub const DETECTOR_TAGLINE: &str =
    "Paste suspicious email content below and let our AI analyze it for phishing indicators";

pub const HOW_IT_WORKS: &str = "Our AI detector analyzes email content using machine learning algorithms trained on millions of phishing examples. It examines sender information, URL patterns, linguistic cues, urgency tactics, and other indicators to provide accurate threat assessment. While highly accurate, always use your judgment and verify suspicious emails through official channels.";

pub const FOOTER: &str =
    "© 2025 Phishing Defense Platform. Educational purposes only. Stay vigilant, stay safe.";
