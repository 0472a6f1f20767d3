// src/batch.rs
//! Scores a directory of saved emails in parallel.
//!
//! Batch mode skips the artificial delay; it exists for the interactive
//! widget only.

use crate::config::Config;
use crate::error::PhishguardError;
use crate::input::read_lossy;
use crate::scorer::HeuristicScorer;
use crate::types::{BatchReport, EmailReport};
use anyhow::Result;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

/// Walks `root` and returns every file with a configured email extension,
/// sorted by path.
///
/// # Errors
/// Returns error if `root` itself cannot be read.
pub fn discover(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    // Surface a missing or unreadable root instead of returning nothing.
    std::fs::read_dir(root).map_err(|source| PhishguardError::Io {
        source,
        path: root.to_path_buf(),
    })?;

    let skip_hidden = config.scan.skip_hidden;
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(skip_hidden && is_hidden(e)));

    let (mut paths, error_count) = accumulate_walker(walker, config);
    if error_count > 0 {
        log::warn!("encountered {error_count} errors while walking {}", root.display());
    }
    paths.sort();
    Ok(paths)
}

fn accumulate_walker<I>(walker: I, config: &Config) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && has_email_extension(entry.path(), config) {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                log::debug!("walk error: {e}");
                errors += 1;
            }
        }
    }
    (paths, errors)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_email_extension(path: &Path, config: &Config) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| config.accepts_extension(e))
}

/// Scores every file. Read failures are recorded per file.
#[must_use]
pub fn scan(files: &[PathBuf]) -> BatchReport {
    let start = Instant::now();
    let scorer = HeuristicScorer::new();

    let emails: Vec<EmailReport> = files
        .par_iter()
        .map(|path| scan_file(path, &scorer))
        .collect();

    BatchReport {
        flagged: emails.iter().filter(|e| e.is_flagged()).count(),
        skipped: emails.iter().filter(|e| e.is_skipped()).count(),
        failed: emails.iter().filter(|e| e.error.is_some()).count(),
        emails,
        duration_ms: start.elapsed().as_millis(),
    }
}

fn scan_file(path: &Path, scorer: &HeuristicScorer) -> EmailReport {
    let (result, error) = match read_lossy(path) {
        Ok(text) if text.trim().is_empty() => (None, None),
        Ok(text) => (Some(scorer.analyze(&text)), None),
        Err(e) => (None, Some(e.to_string())),
    };
    EmailReport {
        path: path.to_path_buf(),
        result,
        error,
    }
}
