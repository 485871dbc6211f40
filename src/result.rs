//! Stability report types.

use serde::{Deserialize, Serialize};

use crate::types::Axis;

/// Severity band for a variable's drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// No meaningful shift detected.
    None,
    /// Raw PSI reached the warning threshold; worth watching.
    Warning,
    /// Raw PSI reached the critical threshold; the population has moved.
    Critical,
}

/// Stability assessment for a single variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableStability {
    /// Positional index of the variable along the configured axis.
    pub variable: usize,

    /// Raw accumulated PSI on the conventional scale, where 0.1 and 0.25
    /// are the customary warning/critical bands.
    pub psi: f64,

    /// Raw PSI scaled by 1/100 - the entry emitted in the output vector.
    pub value: f64,

    /// Band assigned from the raw PSI and the configured thresholds.
    pub severity: Severity,
}

/// Complete result of one stability comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Number of quantile buckets used per variable.
    pub buckets: usize,

    /// Axis along which variables were read.
    pub axis: Axis,

    /// Per-variable assessments, ordered by variable index.
    pub variables: Vec<VariableStability>,
}

impl StabilityReport {
    /// The output vector: one scaled PSI value per variable, in axis order.
    pub fn values(&self) -> Vec<f64> {
        self.variables.iter().map(|v| v.value).collect()
    }

    /// Whether any variable reached at least the warning band.
    pub fn has_drift(&self) -> bool {
        self.variables.iter().any(|v| v.severity != Severity::None)
    }

    /// Whether any variable reached the critical band.
    pub fn has_critical(&self) -> bool {
        self.variables
            .iter()
            .any(|v| v.severity == Severity::Critical)
    }

    /// Number of variables at warning level or above.
    pub fn drifted_count(&self) -> usize {
        self.variables
            .iter()
            .filter(|v| v.severity != Severity::None)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(variable: usize, psi: f64, severity: Severity) -> VariableStability {
        VariableStability {
            variable,
            psi,
            value: psi / 100.0,
            severity,
        }
    }

    #[test]
    fn report_helpers() {
        let report = StabilityReport {
            buckets: 10,
            axis: Axis::Columns,
            variables: vec![
                entry(0, 0.02, Severity::None),
                entry(1, 0.15, Severity::Warning),
                entry(2, 0.4, Severity::Critical),
            ],
        };

        assert!(report.has_drift());
        assert!(report.has_critical());
        assert_eq!(report.drifted_count(), 2);
        let values = report.values();
        assert_eq!(values.len(), 3);
        assert!((values[2] - 0.004).abs() < 1e-12);
    }

    #[test]
    fn quiet_report() {
        let report = StabilityReport {
            buckets: 10,
            axis: Axis::Rows,
            variables: vec![entry(0, 0.01, Severity::None)],
        };
        assert!(!report.has_drift());
        assert!(!report.has_critical());
        assert_eq!(report.drifted_count(), 0);
    }
}
