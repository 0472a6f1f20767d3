// src/cli/handlers.rs
use crate::batch;
use crate::cli::args::AnalyzeArgs;
use crate::config::Config;
use crate::content::PREVENTION_TIPS;
use crate::detector::{Detector, SleepWaiter, Waiter};
use crate::error::{PhishguardError, Result as CoreResult};
use crate::exit::PhishguardExit;
use crate::input::EmailSource;
use crate::reporting;
use crate::spinner::Spinner;
use crate::types::{AnalysisResult, Notice};
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

/// Shows a spinner for the length of the analysis delay.
struct SpinnerWaiter;

impl Waiter for SpinnerWaiter {
    fn wait(&mut self, delay: Duration) -> CoreResult<()> {
        let spinner = Spinner::start("Analyzing...");
        let res = SleepWaiter.wait(delay);
        spinner.stop(res.is_ok());
        res
    }
}

/// Handles the analyze command.
///
/// # Errors
/// Returns error if config loading or reading the input source fails.
pub fn handle_analyze(args: AnalyzeArgs) -> Result<PhishguardExit> {
    let config = Config::load()?;
    let json = args.json || config.output.json;
    let source = EmailSource::select(args.stdin, args.file, args.text);
    log::debug!("reading email from {}", source.describe());
    let text = source.read()?;

    let delay = if args.no_delay { Duration::ZERO } else { config.delay() };
    let mut detector = Detector::new(delay);

    if !json {
        reporting::print_banner();
    }

    let show_spinner = !json && config.detector.spinner && !delay.is_zero();
    let outcome = if show_spinner {
        detector.analyze_with(&text, &mut SpinnerWaiter)
    } else {
        detector.analyze_with(&text, &mut SleepWaiter)
    };

    report_outcome(outcome, json)
}

/// Prints the outcome of one analysis and maps it to an exit code.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn report_outcome(outcome: CoreResult<AnalysisResult>, json: bool) -> Result<PhishguardExit> {
    match outcome {
        Ok(result) => {
            if json {
                reporting::print_json(&result)?;
            } else {
                reporting::print_result(&result);
                println!();
                reporting::print_notice(&Notice::analysis_complete(result.confidence));
            }
            Ok(exit_for(&result))
        }
        Err(PhishguardError::EmptyInput) => {
            reporting::print_notice(&Notice::empty_input());
            Ok(PhishguardExit::InvalidInput)
        }
        Err(e) => {
            log::debug!("{e}");
            reporting::print_notice(&Notice::analysis_failed());
            Ok(PhishguardExit::Error)
        }
    }
}

#[must_use]
pub fn exit_for(result: &AnalysisResult) -> PhishguardExit {
    if result.is_phishing {
        PhishguardExit::PhishingDetected
    } else {
        PhishguardExit::Success
    }
}

/// Handles the scan command.
///
/// # Errors
/// Returns error if config loading or directory discovery fails.
pub fn handle_scan(dir: &Path, json: bool) -> Result<PhishguardExit> {
    let config = Config::load()?;
    let json = json || config.output.json;

    let files = batch::discover(dir, &config)?;
    log::info!("scanning {} files under {}", files.len(), dir.display());
    let report = batch::scan(&files);

    if json {
        reporting::print_json(&report)?;
    } else if report.emails.is_empty() {
        println!("No emails found under {}", dir.display());
    } else {
        reporting::print_batch(&report);
    }

    if report.has_phishing() {
        Ok(PhishguardExit::PhishingDetected)
    } else {
        Ok(PhishguardExit::Success)
    }
}

/// Handles the tips command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_tips(json: bool) -> Result<PhishguardExit> {
    if json {
        reporting::print_json(PREVENTION_TIPS)?;
    } else {
        reporting::print_tips(PREVENTION_TIPS);
    }
    Ok(PhishguardExit::Success)
}

#[must_use]
pub fn handle_keywords() -> PhishguardExit {
    reporting::print_rules();
    PhishguardExit::Success
}
