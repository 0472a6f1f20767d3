// src/config/io.rs
use super::types::{Config, PhishguardToml};
use super::CONFIG_FILE;
use crate::error::{PhishguardError, Result};
use std::fs;
use std::path::Path;

/// Reads `phishguard.toml` from `dir` if present.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(config: &mut Config, dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        log::debug!("no {CONFIG_FILE} in {}, using defaults", dir.display());
        return Ok(());
    }

    let content = fs::read_to_string(&path).map_err(|source| PhishguardError::Io {
        source,
        path: path.clone(),
    })?;
    parse_toml(config, &content).map_err(|source| PhishguardError::Config { source, path })
}

/// Applies the sections of a TOML document onto `config`.
///
/// # Errors
/// Returns the TOML error when the document is malformed.
pub fn parse_toml(config: &mut Config, content: &str) -> std::result::Result<(), toml::de::Error> {
    let parsed: PhishguardToml = toml::from_str(content)?;
    config.detector = parsed.detector;
    config.scan = parsed.scan;
    config.output = parsed.output;
    normalize_extensions(config);
    Ok(())
}

fn normalize_extensions(config: &mut Config) {
    for ext in &mut config.scan.extensions {
        *ext = ext.trim_start_matches('.').to_lowercase();
    }
    config.scan.extensions.retain(|e| !e.is_empty());
}

/// Serializes `config` back to TOML.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_toml_string(config: &Config) -> std::result::Result<String, toml::ser::Error> {
    let doc = PhishguardToml {
        detector: config.detector.clone(),
        scan: config.scan.clone(),
        output: config.output.clone(),
    };
    toml::to_string_pretty(&doc)
}
