//! Static assets shared by every page.
//!
//! Three files under `assets/`, embedded at compile time and identical on
//! every build:
//!
//! - `style.css`: layout plus light/dark custom properties
//! - `app.js`: theme toggle, back-to-top, copy-link, month filter
//! - `favicon.svg`
//!
//! `app.js` carries a `/*THEME_TABLE*/null` placeholder that is replaced with
//! the JSON from [`ThemeTable`], so the client cycles themes in the same order
//! as [`crate::theme::ThemePreference::next`].

use crate::theme::ThemeTable;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory (relative to the output root) the assets are written to.
pub const ASSETS_DIR: &str = "assets";

pub const STYLE_CSS: &str = include_str!("../static/style.css");
pub const FAVICON_SVG: &str = include_str!("../static/favicon.svg");
const APP_JS_TEMPLATE: &str = include_str!("../static/app.js");
const THEME_TABLE_PLACEHOLDER: &str = "/*THEME_TABLE*/null";

/// The client script with the theme table filled in.
pub fn app_js() -> String {
    APP_JS_TEMPLATE.replace(THEME_TABLE_PLACEHOLDER, &ThemeTable::new().to_json())
}

/// Write all assets under `<output_dir>/assets/`.
///
/// Returns the written paths relative to `output_dir`, in write order.
pub fn write_assets(output_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let dir = output_dir.join(ASSETS_DIR);
    fs::create_dir_all(&dir)?;

    let files = [
        ("style.css", STYLE_CSS.to_string()),
        ("app.js", app_js()),
        ("favicon.svg", FAVICON_SVG.to_string()),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        fs::write(dir.join(name), content)?;
        written.push(Path::new(ASSETS_DIR).join(name));
    }
    Ok(written)
}
