//! Theme preference and its three-way cycle.
//!
//! The generated pages carry a toggle button that cycles the colour scheme
//! `system → dark → light → system` and remembers the choice in the
//! browser's `localStorage`. The cycle is defined here once, as a Rust enum,
//! and shipped to the client as a JSON [`ThemeTable`] spliced into `app.js`
//! (see [`crate::assets`]). The client script only looks things up in that
//! table.
//!
//! [`PreferenceStore`] models the key-value persistence the client uses, so
//! the load/advance logic is testable without a browser.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ThemePreference {
    /// Follow `prefers-color-scheme`.
    #[default]
    System,
    Dark,
    Light,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::System, Self::Dark, Self::Light];

    /// The preference the toggle button moves to.
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::System,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Icon shown next to the label on the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Self::System => "🖥️",
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme preference: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

// =============================================================================
// Persistence
// =============================================================================

/// String key-value storage, shaped like the browser's `localStorage`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

/// Read the stored preference. Missing or unrecognised values mean `System`.
pub fn load(store: &impl PreferenceStore) -> ThemePreference {
    store
        .get(STORAGE_KEY)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

/// Move the stored preference one step along the cycle and return it.
pub fn advance(store: &mut impl PreferenceStore) -> ThemePreference {
    let next = load(store).next();
    store.set(STORAGE_KEY, next.as_str());
    next
}

// =============================================================================
// Client table
// =============================================================================

/// Everything the client script needs to run the toggle.
#[derive(Debug, Serialize)]
pub struct ThemeTable {
    pub storage_key: &'static str,
    pub default: &'static str,
    pub next: BTreeMap<&'static str, &'static str>,
    pub icons: BTreeMap<&'static str, &'static str>,
}

impl ThemeTable {
    pub fn new() -> Self {
        Self {
            storage_key: STORAGE_KEY,
            default: ThemePreference::default().as_str(),
            next: ThemePreference::ALL
                .into_iter()
                .map(|p| (p.as_str(), p.next().as_str()))
                .collect(),
            icons: ThemePreference::ALL
                .into_iter()
                .map(|p| (p.as_str(), p.icon()))
                .collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("theme table must serialize")
    }
}

impl Default for ThemeTable {
    fn default() -> Self {
        Self::new()
    }
}
