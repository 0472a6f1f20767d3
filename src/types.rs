// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of scoring one piece of email text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_phishing: bool,
    /// Derived percentage in `50..=95`, not a probability.
    pub confidence: u8,
    pub indicators: Vec<String>,
    pub recommendation: String,
}

impl AnalysisResult {
    /// Short label for the verdict card.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.is_phishing {
            "Phishing Detected"
        } else {
            "Appears Safe"
        }
    }

    #[must_use]
    pub fn badge(&self) -> &'static str {
        if self.is_phishing {
            "DANGER"
        } else {
            "SAFE"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A short titled message emitted after a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    /// Notice shown when the submitted text is blank.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::destructive(
            "Please enter email content",
            "Paste the suspicious email text to analyze",
        )
    }

    #[must_use]
    pub fn analysis_failed() -> Self {
        Self::destructive(
            "Analysis Failed",
            "Unable to analyze email. Please try again.",
        )
    }

    #[must_use]
    pub fn analysis_complete(confidence: u8) -> Self {
        Self::info(
            "Analysis Complete",
            format!("Email analyzed with {confidence}% confidence"),
        )
    }
}

/// Result for a single file in a batch scan.
#[derive(Debug, Clone, Serialize)]
pub struct EmailReport {
    pub path: PathBuf,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl EmailReport {
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.result.as_ref().is_some_and(|r| r.is_phishing)
    }

    /// True when the file was read but held no text to analyze.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.result.is_none() && self.error.is_none()
    }
}

/// Aggregated results from scanning a directory of emails.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub emails: Vec<EmailReport>,
    pub flagged: usize,
    pub skipped: usize,
    pub failed: usize,
    pub duration_ms: u128,
}

impl BatchReport {
    #[must_use]
    pub fn has_phishing(&self) -> bool {
        self.flagged > 0
    }

    #[must_use]
    pub fn analyzed_count(&self) -> usize {
        self.emails.iter().filter(|e| e.result.is_some()).count()
    }
}
