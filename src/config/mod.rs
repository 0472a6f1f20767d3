// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, DetectorConfig, OutputConfig, PhishguardToml, ScanConfig};
use crate::error::Result;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "phishguard.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and applies `phishguard.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the config file exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Like [`Config::load`], reading the file from `dir`.
    ///
    /// # Errors
    /// Returns error if the config file exists but is unreadable or malformed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_config(&mut config, dir)?;
        Ok(config)
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.detector.delay_ms)
    }

    /// Returns true if `ext` is one of the configured scan extensions.
    #[must_use]
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.scan
            .extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behavior() {
        let c = Config::new();
        assert_eq!(c.detector.delay_ms, 2000);
        assert!(c.detector.spinner);
        assert!(!c.output.json);
        assert!(c.accepts_extension("EML"));
        assert!(!c.accepts_extension("exe"));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let mut c = Config::new();
        io::parse_toml(&mut c, "[detector]\ndelay_ms = 0").unwrap();
        assert_eq!(c.delay(), Duration::ZERO);
        assert!(c.detector.spinner);
        assert_eq!(c.scan.extensions.len(), 4);
    }

    #[test]
    fn extensions_are_normalized() {
        let mut c = Config::new();
        io::parse_toml(&mut c, "[scan]\nextensions = [\".EML\", \"\", \"Txt\"]").unwrap();
        assert_eq!(c.scan.extensions, vec!["eml".to_string(), "txt".to_string()]);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut c = Config::new();
        c.detector.delay_ms = 150;
        let text = io::to_toml_string(&c).unwrap();
        let mut back = Config::new();
        io::parse_toml(&mut back, &text).unwrap();
        assert_eq!(back.detector.delay_ms, 150);
    }
}
