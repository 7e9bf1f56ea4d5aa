//! # monthlog
//!
//! A minimal static site generator for plain-text diaries. Month folders
//! become pages, day files become entries, and the filesystem is the only
//! data source.
//!
//! ```text
//! content/                       out/
//! ├── 202501/                    ├── index.html        (month cards)
//! │   ├── 20250103.txt     →     ├── 202501/index.html (entries, newest first)
//! │   └── 20250105.txt           ├── assets/           (css, js, icon)
//! └── config.toml (optional)     └── .nojekyll
//! ```
//!
//! # Pipeline
//!
//! A build is one synchronous pass with no intermediate files:
//!
//! ```text
//! scan month dirs → for each month: scan day files → render text → write page
//!                 → write index
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `YYYYMM` / `YYYYMMDD.txt` name parsers |
//! | [`scan`] | Finds months and reads their entries |
//! | [`render`] | Plain text → escaped, auto-linked `<p>` blocks |
//! | [`generate`] | Page shell, month pages and the index page (maud) |
//! | [`assets`] | Embedded stylesheet, script and icon |
//! | [`theme`] | Theme preference cycle shared with the client script |
//! | [`site`] | Orchestrates a full build |
//! | [`config`] | Optional `config.toml` in the content root |
//! | [`types`] | `Entry`, `Month`, `MonthSummary` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Lexical Names, Late Dates
//!
//! Folder and file names are matched on shape alone. `20250230.txt` is a
//! valid day-file name; it only fails when converted to a calendar date, and
//! that failure aborts the build. Names that do not fit the shape are ignored
//! without comment, so the content root can hold anything else.
//!
//! ## Deterministic Output
//!
//! The build timestamp is the only value that changes between runs, and it
//! is passed in rather than read inside the renderer. Same content plus same
//! timestamp gives byte-identical output.

pub mod assets;
pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod site;
pub mod theme;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
