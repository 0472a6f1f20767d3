// src/exit.rs
//! Standardized process exit codes for `phishguard`.
//!
//! Provides a stable contract for scripts and mail filters.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PhishguardExit {
    /// Operation completed and nothing was flagged.
    Success = 0,
    /// Generic error (e.g. IO, clipboard, config).
    Error = 1,
    /// Input validation failed (empty or whitespace-only email text).
    InvalidInput = 2,
    /// At least one analyzed email was classified as phishing.
    PhishingDetected = 3,
}

impl PhishguardExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for PhishguardExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes = [
            PhishguardExit::Success.code(),
            PhishguardExit::Error.code(),
            PhishguardExit::InvalidInput.code(),
            PhishguardExit::PhishingDetected.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
