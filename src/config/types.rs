use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Artificial pause before scoring, in milliseconds. Zero disables it.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_true")]
    pub spinner: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            spinner: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_true")]
    pub skip_hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            skip_hidden: default_true(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,
}

const fn default_true() -> bool { true }
const fn default_delay_ms() -> u64 { 2000 }

fn default_extensions() -> Vec<String> {
    vec!["txt".into(), "eml".into(), "msg".into(), "md".into()]
}

/// On-disk shape of `phishguard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PhishguardToml {
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub detector: DetectorConfig,
    pub scan: ScanConfig,
    pub output: OutputConfig,
}
