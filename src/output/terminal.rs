//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{Severity, StabilityReport};

/// Format a stability report for human-readable terminal output.
pub fn format_report(report: &StabilityReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("population-stability\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!(
        "  Variables: {} ({} quantile buckets each)\n\n",
        report.variables.len(),
        report.buckets
    ));

    for var in &report.variables {
        let marker = match var.severity {
            Severity::None => "stable".green(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Critical => "CRITICAL".red().bold(),
        };
        output.push_str(&format!(
            "  variable {:>4}  psi {:>9.5}  {}\n",
            var.variable, var.psi, marker
        ));
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');

    if report.has_critical() {
        output.push_str(&format!(
            "{}\n",
            format!(
                "Population shift detected in {} of {} variables.",
                report.drifted_count(),
                report.variables.len()
            )
            .red()
        ));
    } else if report.has_drift() {
        output.push_str(&format!(
            "{}\n",
            format!(
                "Possible drift in {} of {} variables.",
                report.drifted_count(),
                report.variables.len()
            )
            .yellow()
        ));
    } else {
        output.push_str("No drift detected.\n");
    }

    output
}
