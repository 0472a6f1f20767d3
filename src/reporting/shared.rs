use crate::types::BatchReport;
use std::time::Duration;

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn duration(report: &BatchReport) -> Duration {
    let ms = u64::try_from(report.duration_ms).unwrap_or(u64::MAX);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize("email", 1), "email");
        assert_eq!(pluralize("email", 0), "emails");
        assert_eq!(pluralize("email", 3), "emails");
    }
}
