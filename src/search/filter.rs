//! Filter engine: derives the filtered view from a catalog and a query.
//!
//! Filtering is stable. Results keep catalog order and are never re-ranked;
//! scoring only influences which characters get highlighted.

use super::matcher;
use crate::domain::{Application, Catalog};

/// Returns the entries of `catalog` whose name matches `query`, in catalog order.
///
/// An empty query is the identity filter.
#[must_use]
pub fn filter(catalog: &Catalog, query: &str) -> Vec<Application> {
    let _span = tracing::debug_span!(
        "filter_catalog",
        total = catalog.len(),
        query_len = query.chars().count()
    )
    .entered();

    if query.is_empty() {
        return catalog.entries().to_vec();
    }

    let view: Vec<Application> = catalog
        .iter()
        .filter(|app| matcher::matches(&app.name, query))
        .cloned()
        .collect();

    tracing::debug!(filtered = view.len(), "filter applied");
    view
}

/// Normalizes raw search input into the query the filter runs with.
///
/// Surrounding whitespace is ignored so that a query of only spaces means
/// "no filter".
#[must_use]
pub fn normalize_query(raw: &str) -> &str {
    raw.trim()
}
