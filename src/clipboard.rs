// src/clipboard.rs
//! Reads pasted text from the system clipboard via platform commands.

use crate::error::{PhishguardError, Result};
use std::process::Command;

/// Reads text from the system clipboard.
///
/// # Errors
/// Returns error if no clipboard command is available or it fails.
pub fn read_clipboard() -> Result<String> {
    perform_read()
}

fn run(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| PhishguardError::Clipboard(format!("{program}: {e}")))?;

    if !output.status.success() {
        return Err(PhishguardError::Clipboard(format!(
            "{program} exited with {}",
            output.status
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(target_os = "macos")]
fn perform_read() -> Result<String> {
    run("pbpaste", &[])
}

#[cfg(target_os = "linux")]
fn perform_read() -> Result<String> {
    match run("xclip", &["-selection", "clipboard", "-out"]) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::debug!("xclip failed ({e}), trying wl-paste");
            run("wl-paste", &["--no-newline"])
        }
    }
}

#[cfg(target_os = "windows")]
fn perform_read() -> Result<String> {
    // Powershell is slow but reliable without external deps
    run("powershell", &["-NoProfile", "-Command", "Get-Clipboard"])
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn perform_read() -> Result<String> {
    Err(PhishguardError::Clipboard(
        "unsupported platform".to_string(),
    ))
}
