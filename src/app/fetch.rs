//! Fetch orchestration: wire parsing, load tracking, fallback data, status text.
//!
//! A load cycle starts with [`LoadTracker::begin`], which hands out a request id
//! that travels with the web request. The response comes back as a later event
//! and [`interpret_response`] turns it into a [`LoadResult`]. Applying that
//! result to the catalog/view/cursor triple is done by
//! [`AppState::apply_load_result`](crate::app::AppState::apply_load_result).
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "excalidraw.localhost": {
//!     "ContainerURL": "http://rocket-excalidraw-latest:80",
//!     "AppName": "Excalidraw",
//!     "Description": ""
//!   }
//! }
//! ```
//!
//! Each key becomes `http://<key><port_suffix>`. Unknown fields are ignored.

use crate::domain::{Application, Catalog, LauncherError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of one load cycle.
#[derive(Debug)]
pub enum LoadResult {
    /// The response parsed; carries the deduplicated catalog.
    Success(Catalog),
    /// The request or the body was unusable.
    Failure(LauncherError),
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Status line text reported by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    #[must_use]
    pub fn loading() -> Self {
        Self::info("Loading apps…")
    }

    /// "Loaded 1 app." / "Loaded 3 apps." / "Loaded 0 apps."
    #[must_use]
    pub fn loaded(count: usize) -> Self {
        let plural = if count == 1 { "" } else { "s" };
        Self::info(format!("Loaded {count} app{plural}."))
    }

    #[must_use]
    pub fn failed() -> Self {
        Self::error("Failed to load apps. Showing any cached/default entries.")
    }
}

/// Tracks the outstanding catalog request.
///
/// Only the most recently started request may complete a load; responses to
/// older requests are reported as stale and dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    next_id: u64,
    in_flight: Option<u64>,
}

impl LoadTracker {
    /// Starts a new load, superseding any outstanding one.
    pub fn begin(&mut self) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        if let Some(previous) = self.in_flight.replace(self.next_id) {
            tracing::debug!(superseded = previous, request_id = self.next_id, "load superseded");
        }
        self.next_id
    }

    /// Marks `request_id` as completed. Returns `false` if it is stale.
    pub fn finish(&mut self, request_id: u64) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }
}

/// One value of the wire object.
#[derive(Debug, Deserialize)]
struct WireEntry {
    #[serde(rename = "AppName")]
    app_name: Option<String>,
    #[serde(rename = "Description", default)]
    description: Option<String>,
}

/// Parses a catalog response body into applications.
///
/// Malformed entries are logged and skipped; only a body that is not a JSON
/// object fails the whole parse.
///
/// # Errors
///
/// Returns [`LauncherError::MalformedResponse`] if the body is not a JSON object.
pub fn parse_catalog(body: &[u8], port_suffix: &str) -> Result<Vec<Application>> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| LauncherError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let serde_json::Value::Object(map) = value else {
        return Err(LauncherError::MalformedResponse(
            "expected a JSON object keyed by host".to_string(),
        ));
    };

    let mut apps = Vec::with_capacity(map.len());
    for (key, raw) in map {
        match entry_to_application(&key, raw, port_suffix) {
            Ok(app) => apps.push(app),
            Err(e) => tracing::warn!(error = %e, "skipping catalog entry"),
        }
    }

    tracing::debug!(parsed = apps.len(), "catalog body parsed");
    Ok(apps)
}

fn entry_to_application(key: &str, raw: serde_json::Value, port_suffix: &str) -> Result<Application> {
    let malformed = |reason: String| LauncherError::MalformedEntry {
        key: key.to_string(),
        reason,
    };

    if key.trim().is_empty() {
        return Err(malformed("empty host key".to_string()));
    }

    let entry: WireEntry =
        serde_json::from_value(raw).map_err(|e| malformed(format!("unexpected shape: {e}")))?;

    let name = entry
        .app_name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| malformed("missing AppName".to_string()))?;

    Ok(Application {
        name,
        url: format!("http://{key}{port_suffix}"),
        description: entry.description,
    })
}

/// Turns a completed web request into a [`LoadResult`].
#[must_use]
pub fn interpret_response(status: u16, body: &[u8], port_suffix: &str) -> LoadResult {
    if !(200..300).contains(&status) {
        let detail = String::from_utf8_lossy(body);
        let detail = detail.trim();
        let reason = if detail.is_empty() {
            format!("HTTP {status}")
        } else {
            format!("HTTP {status}: {detail}")
        };
        return LoadResult::Failure(LauncherError::NetworkFailure(reason));
    }

    match parse_catalog(body, port_suffix) {
        Ok(apps) => LoadResult::Success(Catalog::replace(apps)),
        Err(e) => LoadResult::Failure(e),
    }
}

/// One built-in entry, addressed by host so the port can be injected later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackEntry {
    pub name: String,
    pub host: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Entries shown when the very first load fails.
///
/// Overridable through the `fallback_file` option:
///
/// ```toml
/// [[apps]]
/// name = "Excalidraw"
/// host = "draw.localhost"
/// description = "Whiteboard"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackCatalog {
    #[serde(default)]
    pub apps: Vec<FallbackEntry>,
}

impl FallbackCatalog {
    /// Loads a fallback catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LauncherError::Config(format!("failed to read fallback file {}: {e}", path.display()))
        })?;
        toml::from_str(&contents)
            .map_err(|e| LauncherError::Config(format!("failed to parse fallback TOML: {e}")))
    }

    /// Builds the catalog for this fallback set with the given port suffix.
    #[must_use]
    pub fn to_catalog(&self, port_suffix: &str) -> Catalog {
        Catalog::replace(self.apps.iter().map(|entry| {
            let app = Application::new(&entry.name, format!("http://{}{port_suffix}", entry.host));
            match &entry.description {
                Some(description) => app.with_description(description),
                None => app,
            }
        }))
    }
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        let entry = |name: &str, host: &str| FallbackEntry {
            name: name.to_string(),
            host: host.to_string(),
            description: None,
        };
        Self {
            apps: vec![
                entry("Excalidraw", "draw.localhost"),
                entry("Swagger Editor (Next Gen)", "swagger.localhost"),
                entry("Swagger Editor (Legacy)", "legacy.swagger.localhost"),
                entry("DrawSQL", "sqldraw.localhost"),
            ],
        }
    }
}
