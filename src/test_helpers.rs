//! Shared test utilities for the monthlog test suite.
//!
//! Fixture setup plus lookup helpers over scan results. Lookups panic with the
//! available keys on a miss so a failing test says what it did find.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{Entry, Month};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `<root>/<YYYYMM>/<token>.txt`, creating the month folder from the
/// token's first six digits.
pub fn write_entry(root: &Path, token: &str, text: &str) {
    let month_dir = root.join(&token[..6]);
    fs::create_dir_all(&month_dir).unwrap();
    fs::write(month_dir.join(format!("{token}.txt")), text).unwrap();
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a month by its six-digit token. Panics if not found.
pub fn find_month<'a>(months: &'a [Month], token: &str) -> &'a Month {
    months.iter().find(|m| m.token() == token).unwrap_or_else(|| {
        let tokens = month_tokens(months);
        panic!("month '{token}' not found. Available: {tokens:?}")
    })
}

/// Find an entry by its eight-digit id. Panics if not found.
pub fn find_entry<'a>(month: &'a Month, id: &str) -> &'a Entry {
    month.entries.iter().find(|e| e.id == id).unwrap_or_else(|| {
        let ids = entry_ids(month);
        panic!("entry '{id}' not found in {}. Available: {ids:?}", month.token())
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Month tokens in scan order.
pub fn month_tokens(months: &[Month]) -> Vec<String> {
    months.iter().map(|m| m.token()).collect()
}

/// Entry ids in month order.
pub fn entry_ids(month: &Month) -> Vec<&str> {
    month.entries.iter().map(|e| e.id.as_str()).collect()
}
