//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{AnalyzeArgs, Commands},
    handlers::{handle_analyze, handle_keywords, handle_scan, handle_tips},
};
use crate::exit::PhishguardExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<PhishguardExit> {
    match command {
        Commands::Analyze {
            text,
            stdin,
            file,
            json,
            no_delay,
        } => handle_analyze(AnalyzeArgs {
            text,
            stdin,
            file,
            json,
            no_delay,
        }),
        Commands::Scan { dir, json } => handle_scan(&dir, json),
        Commands::Tips { json } => handle_tips(json),
        Commands::Keywords => Ok(handle_keywords()),
    }
}
