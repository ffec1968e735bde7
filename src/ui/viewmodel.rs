//! View model types representing renderable UI state.
//!
//! Built by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready data only: truncated
//! strings, highlight ranges, and the window of rows that fits the pane.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows currently visible in the list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Shown in place of the list when the filtered view is empty.
    pub empty_state: Option<EmptyState>,

    pub search_bar: SearchBarInfo,

    /// Last message from the catalog loader.
    pub status: Option<StatusLine>,
}

/// One application row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub is_selected: bool,

    /// Character ranges of `name` matched by the query, `(start, end)` with
    /// exclusive end, in `char` indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// `"dark"` or `"light"`.
    pub theme_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Raw query as typed.
    pub query: String,
    /// True while the typed query has not been applied yet.
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}
