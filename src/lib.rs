//! Launchpad: a Zellij plugin that lists local web applications and opens
//! them in the browser.
//!
//! The plugin fetches an application catalog over HTTP, lets the user narrow
//! it with a debounced fuzzy search, and opens the selected entry with the
//! configured opener command. The dark/light theme choice is persisted by a
//! background worker.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and action dispatching            │
//! │  - Fetch orchestration (load ids, fallback, status) │
//! │  - Selection cursor and view model computation      │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search Layer  │   │ Worker Layer  │
//! │ (ui/)         │   │ (search/)     │   │ (worker/)     │
//! │ - Rendering   │   │ - Matcher     │   │ - Preferences │
//! │ - Theming     │   │ - Filter      │   │ - IPC bridge  │
//! │ - Components  │   │ - Debounce    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                  │
//!                                         ┌───────────────┐
//!                                         │ Storage Layer │
//!                                         │ (storage/)    │
//!                                         └───────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/launchpad.wasm" {
//!         port "8080"
//!         debounce_ms "120"
//!         open_command "xdg-open"
//!         fallback_file "~/.config/launchpad/fallback.toml"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Startup
//!
//! 1. `main.rs` parses [`Config`], initializes tracing, and requests permissions.
//! 2. Once permissions are granted it asks the worker for the saved theme and
//!    issues the first catalog request.
//! 3. Responses arrive as Zellij events and are fed through [`handle_event`];
//!    the returned [`Action`]s are executed by the shim.
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: any ANSI-capable terminal with 24-bit color

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FallbackCatalog, SelectionCursor};
pub use domain::{Application, Catalog, LauncherError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

const DEFAULT_PORT: &str = "80";
const DEFAULT_DEBOUNCE_MS: u64 = 120;
const DEFAULT_OPEN_COMMAND: &str = "xdg-open";
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/launchpad.wasm" {
///     catalog_url "http://localhost:8080/static/application.json"
///     port "8080"
///     debounce_ms "200"
///     open_command "open"
///     fallback_file "/path/to/fallback.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit catalog endpoint. When unset it is derived from `port`.
    pub catalog_url: Option<String>,

    /// Port appended to every catalog host. Default: `"80"`
    pub port: String,

    /// Quiet period before a typed query is applied. Default: 120 ms
    pub debounce: Duration,

    /// Command used to open a URL. Default: `xdg-open`
    pub open_command: String,

    /// Entries shown when the first load fails.
    pub fallback: FallbackCatalog,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: None,
            port: DEFAULT_PORT.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            fallback: FallbackCatalog::default(),
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_url`, `port`, `open_command`, `trace_level`: used as given when non-blank
    /// - `debounce_ms`: String → `u64` (falls back to 120 on parse error)
    /// - `fallback_file`: `~`-expanded TOML path; on failure the built-in set is kept
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let debounce = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(defaults.debounce, Duration::from_millis);

        let fallback = text("fallback_file").map_or(defaults.fallback, |file| {
            let path = infrastructure::expand_tilde(&file);
            FallbackCatalog::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(fallback_file = %path, error = %e, "failed to load fallback file, using built-in entries");
                FallbackCatalog::default()
            })
        });

        Self {
            catalog_url: text("catalog_url"),
            port: text("port").unwrap_or(defaults.port),
            debounce,
            open_command: text("open_command").unwrap_or(defaults.open_command),
            fallback,
            trace_level: text("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// The `":{port}"` suffix appended to catalog hosts.
    #[must_use]
    pub fn port_suffix(&self) -> String {
        format!(":{}", self.port)
    }

    /// Catalog endpoint, defaulting to `http://localhost{port_suffix}/static/application.json`.
    #[must_use]
    pub fn catalog_url(&self) -> String {
        self.catalog_url.clone().unwrap_or_else(|| {
            format!("http://localhost{}/static/application.json", self.port_suffix())
        })
    }
}

/// Initializes the plugin state from configuration.
///
/// The catalog starts empty; the shim issues the first load once network
/// permission is granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        catalog_url = %config.catalog_url(),
        debounce_ms = config.debounce.as_millis() as u64,
        "initializing launchpad plugin"
    );

    AppState::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.port, "80");
        assert_eq!(config.debounce, Duration::from_millis(120));
        assert_eq!(config.open_command, "xdg-open");
        assert_eq!(config.trace_level, "info");
        assert_eq!(config.fallback, FallbackCatalog::default());
        assert_eq!(config.catalog_url(), "http://localhost:80/static/application.json");
    }

    #[test]
    fn port_feeds_suffix_and_default_url() {
        let config = Config::from_zellij(&map(&[("port", "8080")]));
        assert_eq!(config.port_suffix(), ":8080");
        assert_eq!(config.catalog_url(), "http://localhost:8080/static/application.json");
    }

    #[test]
    fn explicit_catalog_url_wins() {
        let config = Config::from_zellij(&map(&[
            ("port", "8080"),
            ("catalog_url", "http://apps.internal/catalog.json"),
        ]));
        assert_eq!(config.catalog_url(), "http://apps.internal/catalog.json");
    }

    #[test]
    fn bad_debounce_falls_back() {
        let config = Config::from_zellij(&map(&[("debounce_ms", "soon")]));
        assert_eq!(config.debounce, Duration::from_millis(120));

        let config = Config::from_zellij(&map(&[("debounce_ms", "250")]));
        assert_eq!(config.debounce, Duration::from_millis(250));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_zellij(&map(&[("open_command", "  "), ("port", "")]));
        assert_eq!(config.open_command, "xdg-open");
        assert_eq!(config.port, "80");
    }

    #[test]
    fn fallback_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[apps]]\nname = \"Wiki\"\nhost = \"wiki.localhost\"").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = Config::from_zellij(&map(&[("fallback_file", path.as_str())]));
        assert_eq!(config.fallback.apps.len(), 1);
        assert_eq!(config.fallback.apps[0].name, "Wiki");
    }

    #[test]
    fn missing_fallback_file_keeps_builtin() {
        let config = Config::from_zellij(&map(&[("fallback_file", "/nonexistent/launchpad.toml")]));
        assert_eq!(config.fallback, FallbackCatalog::default());
    }

    #[test]
    fn initialize_uses_config() {
        let state = initialize(&Config::from_zellij(&map(&[("port", "3000")])));
        assert_eq!(state.port_suffix, ":3000");
        assert!(state.catalog().is_empty());
    }
}
