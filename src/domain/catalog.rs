//! Catalog store: the authoritative, deduplicated application list.
//!
//! A [`Catalog`] is never edited in place. Each load cycle builds a fresh one
//! through [`Catalog::replace`], which drops malformed entries and later
//! duplicates (compared case-insensitively by name) while keeping source order.

use super::application::Application;
use super::error::LauncherError;
use std::collections::HashSet;

/// Ordered list of applications with unique, case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Application>,
}

impl Catalog {
    /// Returns an empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a catalog from `entries`, replacing any prior content.
    ///
    /// - First occurrence of a name wins; later case-insensitive duplicates are dropped.
    /// - Entries with a blank name or URL are skipped and logged.
    /// - Survivors keep their relative input order.
    pub fn replace<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Application>,
    {
        let _span = tracing::debug_span!("catalog_replace").entered();

        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut duplicates = 0_usize;
        let mut malformed = 0_usize;

        for app in entries {
            if let Some(reason) = app.missing_field() {
                let err = LauncherError::MalformedEntry {
                    key: app.name.clone(),
                    reason: reason.to_string(),
                };
                tracing::warn!(error = %err, url = %app.url, "skipping malformed catalog entry");
                malformed += 1;
                continue;
            }

            if seen.insert(app.identity_key()) {
                kept.push(app);
            } else {
                tracing::debug!(name = %app.name, "dropping duplicate catalog entry");
                duplicates += 1;
            }
        }

        tracing::debug!(
            kept = kept.len(),
            duplicates = duplicates,
            malformed = malformed,
            "catalog replaced"
        );

        Self { entries: kept }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[Application] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Application> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Application;
    type IntoIter = std::slice::Iter<'a, Application>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn app(name: &str) -> Application {
        Application::new(name, format!("http://{}.localhost:80", name.to_lowercase()))
    }

    #[test]
    fn first_occurrence_wins_case_insensitively() {
        let catalog = Catalog::replace(vec![
            app("Excalidraw"),
            Application::new("EXCALIDRAW", "http://other.localhost:80"),
            app("DrawSQL"),
        ]);

        let names: Vec<&str> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Excalidraw", "DrawSQL"]);
        assert_eq!(catalog.entries()[0].url, "http://excalidraw.localhost:80");
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let catalog = Catalog::replace(vec![
            Application::new("", "http://blank.localhost"),
            app("Swagger"),
            Application::new("NoUrl", " "),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].name, "Swagger");
    }

    #[test]
    fn exact_duplicates_are_idempotent() {
        let a = app("Excalidraw");
        assert_eq!(
            Catalog::replace(vec![a.clone(), a.clone()]),
            Catalog::replace(vec![a])
        );
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        let catalog = Catalog::replace(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::empty());
    }

    proptest! {
        #[test]
        fn replace_never_keeps_two_equal_names(names in prop::collection::vec("[a-cA-C]{1,3}", 0..20)) {
            let catalog = Catalog::replace(names.iter().map(|n| app(n)));
            let mut keys: Vec<String> = catalog.iter().map(Application::identity_key).collect();
            let before = keys.len();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(before, keys.len());
        }

        #[test]
        fn replace_preserves_source_order(names in prop::collection::vec("[a-z]{1,4}", 0..20)) {
            let catalog = Catalog::replace(names.iter().map(|n| app(n)));
            let positions: Vec<usize> = catalog
                .iter()
                .map(|a| names.iter().position(|n| n == &a.name).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
