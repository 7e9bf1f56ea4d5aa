//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ## Check
//!
//! ```text
//! Months
//! 001 2025年03月 (2 entries)
//!     Source: 202503/
//!     001 2025-03-02
//!         Source: 20250302.txt
//! 002 2025年02月 (no entries)
//!     Source: 202502/
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 2025年03月 → 202503/index.html
//! 002 2025年02月 → 202502/index.html
//! Assets → assets/style.css, assets/app.js, assets/favicon.svg
//!
//! Generated 2 month pages, 2 entries
//! ```

use crate::site::BuildReport;
use crate::types::Month;

fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn count_detail(n: usize) -> String {
    match n {
        0 => "no entries".to_string(),
        n => count(n, "entry", "entries"),
    }
}

/// Content inventory: every month with its entries and source files.
pub fn format_scan_output(months: &[Month]) -> Vec<String> {
    let mut lines = vec!["Months".to_string()];

    if months.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
        return lines;
    }

    for (i, month) in months.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            month.label(),
            count_detail(month.entries.len())
        ));
        lines.push(format!("{}Source: {}/", indent(1), month.token()));
        for (j, entry) in month.entries.iter().enumerate() {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(j + 1),
                entry.date.format("%Y-%m-%d")
            ));
            lines.push(format!("{}Source: {}", indent(2), entry.filename));
        }
    }
    lines
}

pub fn print_scan_output(months: &[Month]) {
    for line in format_scan_output(months) {
        println!("{}", line);
    }
}

/// Pages written by a build, followed by a totals line.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Home → index.html".to_string()];

    for (i, month) in report.months.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}/index.html",
            format_index(i + 1),
            month.label,
            month.token
        ));
    }

    if !report.assets.is_empty() {
        let assets: Vec<String> = report
            .assets
            .iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect();
        lines.push(format!("Assets → {}", assets.join(", ")));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        count(report.months.len(), "month page", "month pages"),
        count(report.entry_count(), "entry", "entries")
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
