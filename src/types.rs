//! The in-memory data model shared by the scanner, page assembler and output.
//!
//! Nothing here is persisted. A [`Month`] lives only until its page is written;
//! the index page is built from the [`MonthSummary`] values collected along the way.

use crate::naming::MonthKey;
use chrono::NaiveDate;

/// One diary entry, read from a single `YYYYMMDD.txt` file.
#[derive(Debug, Clone)]
pub struct Entry {
    pub date: NaiveDate,
    /// Eight-digit date token. Used as the anchor id on the month page.
    pub id: String,
    /// Rendered, escaped HTML paragraphs.
    pub content_html: String,
    /// Source file name within the month folder.
    pub filename: String,
}

/// A month bucket with its entries, most recent first.
#[derive(Debug, Clone)]
pub struct Month {
    pub key: MonthKey,
    pub entries: Vec<Entry>,
}

impl Month {
    pub fn token(&self) -> String {
        self.key.token()
    }

    pub fn label(&self) -> String {
        self.key.label()
    }

    pub fn summary(&self) -> MonthSummary {
        MonthSummary {
            token: self.token(),
            label: self.label(),
            entry_count: self.entries.len(),
            newest: self.entries.first().map(|e| e.date),
        }
    }
}

/// What the index page needs to know about a month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub token: String,
    pub label: String,
    pub entry_count: usize,
    pub newest: Option<NaiveDate>,
}
