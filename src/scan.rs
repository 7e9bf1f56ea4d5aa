//! Content directory scanning.
//!
//! Walks the content root for month folders and, inside each, for day files.
//! Anything that does not match the naming convention (see [`crate::naming`])
//! is ignored, so the content root can also hold a README, the tool's own
//! sources, or an `out/` directory.
//!
//! ```text
//! content/
//! ├── config.toml        # optional, see crate::config
//! ├── 202503/
//! │   ├── 20250302.txt
//! │   └── 20250301.txt
//! ├── 202502/            # empty month, still gets a page
//! ├── 202501/
//! │   ├── 20250105.txt
//! │   ├── 20250103.txt
//! │   └── 20241231.txt   # prefix differs from folder: skipped
//! └── notes/             # not a month: ignored
//! ```
//!
//! ## Failure Policy
//!
//! Symlinked month folders and day files are followed. A dangling link is
//! skipped like any other non-matching entry.
//!
//! Name mismatches are silent skips. A file that has the right shape but an
//! impossible date (`20250230.txt`) or cannot be read as UTF-8 aborts the scan.

use crate::naming::{self, MonthKey};
use crate::render;
use crate::types::{Entry, Month};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid date in file name: {0}")]
    InvalidDate(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Scan every month under `root`, most recent month first.
pub fn scan(root: &Path) -> Result<Vec<Month>, ScanError> {
    scan_month_dirs(root)?
        .into_iter()
        .map(|key| scan_month(root, key))
        .collect()
}

/// Find the month folders directly under `root`, sorted descending.
pub fn scan_month_dirs(root: &Path) -> Result<Vec<MonthKey>, ScanError> {
    let mut keys = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry?;
        // Follows symlinks; a dangling link is neither
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(key) = entry.file_name().to_str().and_then(naming::parse_month_dir) {
            keys.push(key);
        }
    }
    keys.sort_by(|a, b| b.cmp(a));
    Ok(keys)
}

/// Read and render every day file in one month folder.
pub fn scan_month(root: &Path, key: MonthKey) -> Result<Month, ScanError> {
    let dir = root.join(key.token());
    let mut entries = Vec::new();

    for dir_entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let dir_entry = dir_entry?;
        if !dir_entry.path().is_file() {
            continue;
        }
        let Some(filename) = dir_entry.file_name().to_str() else {
            continue;
        };
        let Some(day) = naming::parse_day_file(filename) else {
            continue;
        };
        if day.month_key() != key {
            continue;
        }

        let path = dir_entry.path();
        let date = day
            .to_date()
            .ok_or_else(|| ScanError::InvalidDate(path.to_path_buf()))?;
        let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        entries.push(Entry {
            date,
            id: day.token(),
            content_html: render::text_to_html(&text),
            filename: filename.to_string(),
        });
    }

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(Month { key, entries })
}
