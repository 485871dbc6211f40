//! JSON serialization for stability reports.

use crate::result::StabilityReport;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `StabilityReport`).
pub fn to_json(report: &StabilityReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `StabilityReport`).
pub fn to_json_pretty(report: &StabilityReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
