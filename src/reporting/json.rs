//! Machine-readable output for `--json`.

use anyhow::Result;
use serde::Serialize;

/// Serializes `value` as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Prints `value` as pretty JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::HeuristicScorer;

    #[test]
    fn result_uses_camel_case_fields() {
        let result = HeuristicScorer::new().analyze("hello");
        let v: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(v["isPhishing"], false);
        assert_eq!(v["confidence"], 50);
        assert_eq!(v["indicators"][0], "No major red flags detected");
        assert!(v["recommendation"].is_string());
    }
}
