// src/detector.rs
//! Interactive analysis session.
//!
//! Holds the transient state of one detector widget: the busy flag, the
//! artificial delay that precedes scoring, and the most recent result. The
//! result is dropped as soon as a new analysis starts.

use crate::error::{PhishguardError, Result};
use crate::scorer::HeuristicScorer;
use crate::types::AnalysisResult;
use std::thread;
use std::time::Duration;

/// Performs the pause that precedes scoring.
pub trait Waiter {
    /// # Errors
    /// Returns error if the wait is interrupted.
    fn wait(&mut self, delay: Duration) -> Result<()>;
}

/// Blocks the current thread for the full delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepWaiter;

impl Waiter for SleepWaiter {
    fn wait(&mut self, delay: Duration) -> Result<()> {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }
}

pub struct Detector {
    scorer: HeuristicScorer,
    delay: Duration,
    busy: bool,
    last: Option<AnalysisResult>,
}

impl Detector {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            scorer: HeuristicScorer::new(),
            delay,
            busy: false,
            last: None,
        }
    }

    /// A detector that scores immediately.
    #[must_use]
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last.as_ref()
    }

    /// Whether a submission would be accepted right now.
    #[must_use]
    pub fn can_submit(&self, text: &str) -> bool {
        !self.busy && !text.trim().is_empty()
    }

    /// Analyzes `text` after sleeping for the configured delay.
    ///
    /// # Errors
    /// See [`Detector::analyze_with`].
    pub fn analyze(&mut self, text: &str) -> Result<AnalysisResult> {
        self.analyze_with(text, &mut SleepWaiter)
    }

    /// Validates, waits, scores and stores the result.
    ///
    /// # Errors
    /// - `EmptyInput` if `text` is blank; nothing else happens.
    /// - `Busy` if an analysis is already in flight.
    /// - `AnalysisFailed` if the wait or scoring step fails. The busy flag is
    ///   cleared and no result is stored.
    pub fn analyze_with<W: Waiter>(&mut self, text: &str, waiter: &mut W) -> Result<AnalysisResult> {
        if text.trim().is_empty() {
            return Err(PhishguardError::EmptyInput);
        }
        if self.busy {
            return Err(PhishguardError::Busy);
        }

        self.busy = true;
        self.last = None;
        log::debug!("analyzing {} bytes after {:?}", text.len(), self.delay);

        let outcome = self.run(text, waiter);
        self.busy = false;

        match outcome {
            Ok(result) => {
                log::info!(
                    "verdict phishing={} confidence={}",
                    result.is_phishing,
                    result.confidence
                );
                self.last = Some(result.clone());
                Ok(result)
            }
            Err(e) => {
                log::warn!("analysis failed: {e}");
                Err(PhishguardError::AnalysisFailed(e.to_string()))
            }
        }
    }

    fn run<W: Waiter>(&self, text: &str, waiter: &mut W) -> Result<AnalysisResult> {
        waiter.wait(self.delay)?;
        Ok(self.scorer.analyze(text))
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingWaiter(Vec<Duration>);

    impl Waiter for RecordingWaiter {
        fn wait(&mut self, delay: Duration) -> Result<()> {
            self.0.push(delay);
            Ok(())
        }
    }

    #[test]
    fn waits_for_configured_delay() {
        let mut d = Detector::new(Duration::from_millis(2000));
        let mut w = RecordingWaiter(Vec::new());
        d.analyze_with("hello", &mut w).unwrap();
        assert_eq!(w.0, vec![Duration::from_millis(2000)]);
    }

    #[test]
    fn blank_input_never_waits() {
        let mut d = Detector::default();
        let mut w = RecordingWaiter(Vec::new());
        assert!(matches!(
            d.analyze_with(" \n\t", &mut w),
            Err(PhishguardError::EmptyInput)
        ));
        assert!(w.0.is_empty());
        assert!(!d.is_busy());
    }

    #[test]
    fn can_submit_mirrors_validation() {
        let d = Detector::immediate();
        assert!(!d.can_submit(""));
        assert!(!d.can_submit("   "));
        assert!(d.can_submit("Dear user"));
    }
}
