pub mod batch;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod detector;
pub mod error;
pub mod exit;
pub mod input;
pub mod reporting;
pub mod rules;
pub mod scorer;
pub mod spinner;
pub mod types;
