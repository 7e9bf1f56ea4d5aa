//! Full site build.
//!
//! One synchronous pass, in this order:
//!
//! 1. Create the output directory and the empty `.nojekyll` marker
//! 2. Write the static assets ([`crate::assets`])
//! 3. For each month, newest first: scan its folder, render, write
//!    `{YYYYMM}/index.html`
//! 4. Write `index.html` from the collected month summaries
//!
//! Every run regenerates every file. The first error aborts the build and
//! leaves whatever was already written in place.
//!
//! ## Output Structure
//!
//! ```text
//! out/
//! ├── .nojekyll
//! ├── index.html
//! ├── assets/
//! │   ├── style.css
//! │   ├── app.js
//! │   └── favicon.svg
//! ├── 202503/
//! │   └── index.html
//! └── 202502/
//!     └── index.html
//! ```

use crate::assets;
use crate::config::SiteConfig;
use crate::generate;
use crate::scan::{self, ScanError};
use crate::types::MonthSummary;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker that stops GitHub Pages from running the output through Jekyll.
pub const MARKER_FILE: &str = ".nojekyll";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// What a build wrote, for console output.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Month summaries, newest first.
    pub months: Vec<MonthSummary>,
    /// Asset files, relative to the output directory.
    pub assets: Vec<PathBuf>,
}

impl BuildReport {
    pub fn entry_count(&self) -> usize {
        self.months.iter().map(|m| m.entry_count).sum()
    }
}

/// Build the whole site from `source` into `output`.
///
/// `built_at` is the timestamp printed in every page footer. Two builds of
/// the same content with the same timestamp produce identical files.
pub fn build(
    source: &Path,
    output: &Path,
    config: &SiteConfig,
    built_at: NaiveDateTime,
) -> Result<BuildReport, BuildError> {
    fs::create_dir_all(output)?;
    fs::write(output.join(MARKER_FILE), "")?;

    let mut report = BuildReport {
        assets: assets::write_assets(output)?,
        ..BuildReport::default()
    };

    for key in scan::scan_month_dirs(source)? {
        let month = scan::scan_month(source, key)?;

        let month_dir = output.join(month.token());
        fs::create_dir_all(&month_dir)?;
        let page = generate::render_month_page(config, &month, built_at);
        fs::write(month_dir.join("index.html"), page.into_string())?;

        report.months.push(month.summary());
    }

    let index = generate::render_index_page(config, &report.months, built_at);
    fs::write(output.join("index.html"), index.into_string())?;

    Ok(report)
}
