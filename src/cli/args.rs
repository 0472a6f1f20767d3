use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phishguard", version, about = "Phishing awareness toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one email for phishing indicators
    Analyze {
        /// Email text; reads the clipboard when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,
        /// Read the email from stdin
        #[arg(long)]
        stdin: bool,
        /// Read the email from a file
        #[arg(long, short, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Skip the analysis delay
        #[arg(long)]
        no_delay: bool,
    },
    /// Analyze every saved email under a directory
    Scan {
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Show phishing prevention best practices
    Tips {
        #[arg(long)]
        json: bool,
    },
    /// List the indicator rules and their weights
    Keywords,
}

/// Arguments for the analyze command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    pub text: Option<String>,
    pub stdin: bool,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub no_delay: bool,
}
