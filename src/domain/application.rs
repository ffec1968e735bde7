//! Application domain model.
//!
//! An [`Application`] is one launchable entry: a display name, the URL the
//! launcher navigates to, and an optional description shown next to it.

use serde::{Deserialize, Serialize};

/// A named, URL-addressable application.
///
/// `name` is the identity key of the catalog; two applications whose names
/// differ only in case are considered the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Application {
    /// Creates an application without a description.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the case-folded name used for deduplication.
    #[must_use]
    pub fn identity_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns a reason if this entry lacks a required field.
    ///
    /// A name or URL consisting only of whitespace counts as missing.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("missing name")
        } else if self.url.trim().is_empty() {
            Some("missing url")
        } else {
            None
        }
    }
}
