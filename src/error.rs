// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhishguardError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("No email content to analyze")]
    EmptyInput,

    #[error("An analysis is already running")]
    Busy,

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

pub type Result<T> = std::result::Result<T, PhishguardError>;
