//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of the launcher's mutable state. The
//! catalog, the filtered view, and the selection cursor form one unit and are
//! only changed together, in that order, by [`AppState::replace_catalog`] and
//! [`AppState::apply_query`]. A renderer holding `&AppState` therefore never
//! sees a new catalog next to a view or cursor computed from the old one.
//!
//! # State Components
//!
//! - **Catalog**: deduplicated application list from the last load (or fallback)
//! - **Filtered view**: catalog entries matching the applied query
//! - **Cursor**: highlighted entry in the filtered view
//! - **Query**: raw text typed so far, plus the query the view reflects
//! - **Debouncer**: pending query waiting for the input to go quiet
//! - **Load tracker**: id of the outstanding catalog request
//! - **Status**: last message from the fetch orchestrator
//! - **Theme**: dark/light palette chosen from the persisted preference

use super::cursor::SelectionCursor;
use super::fetch::{FallbackCatalog, LoadResult, LoadTracker, StatusKind, StatusMessage};
use crate::domain::{Application, Catalog};
use crate::search::{self, Debouncer};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusLine, UIViewModel,
};
use crate::Config;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::{Duration, Instant};

/// Rows taken by everything except the application list.
///
/// Blank line, header, border, search box (3), column headers, status line,
/// border, footer.
const CHROME_ROWS: usize = 10;

/// Column reserved for application names.
const NAME_COLUMN_WIDTH: usize = 32;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,
    filtered: Vec<Application>,
    cursor: SelectionCursor,

    /// Raw search input as typed.
    query: String,

    /// Normalized query the filtered view currently reflects.
    applied_query: String,

    debouncer: Debouncer,
    loads: LoadTracker,
    status: Option<StatusMessage>,

    /// Bumped on every view recomputation.
    view_generation: u64,

    /// Current theme preference (`true` = dark).
    pub dark_mode: bool,

    /// Set once the user toggles the theme; later loaded preferences are stale.
    theme_chosen: bool,

    /// Palette derived from `dark_mode`.
    pub theme: Theme,

    /// Appended to every catalog host, e.g. `":8080"`.
    pub port_suffix: String,

    /// Catalog endpoint.
    pub catalog_url: String,

    /// Entries used when a load fails with nothing loaded yet.
    pub fallback: FallbackCatalog,
}

impl AppState {
    /// Creates an empty state from configuration.
    ///
    /// The theme starts light until the persisted preference arrives from the worker.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            catalog: Catalog::empty(),
            filtered: Vec::new(),
            cursor: SelectionCursor::Empty,
            query: String::new(),
            applied_query: String::new(),
            debouncer: Debouncer::new(config.debounce),
            loads: LoadTracker::default(),
            status: None,
            view_generation: 0,
            dark_mode: false,
            theme_chosen: false,
            theme: Theme::for_mode(false),
            port_suffix: config.port_suffix(),
            catalog_url: config.catalog_url(),
            fallback: config.fallback.clone(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The filtered view, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> &[Application] {
        &self.filtered
    }

    #[must_use]
    pub const fn cursor(&self) -> SelectionCursor {
        self.cursor
    }

    /// Raw search input.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query the filtered view was computed with.
    #[must_use]
    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Number of times the filtered view has been recomputed.
    #[must_use]
    pub const fn view_generation(&self) -> u64 {
        self.view_generation
    }

    #[must_use]
    pub const fn is_query_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    #[must_use]
    pub const fn load_in_flight(&self) -> Option<u64> {
        self.loads.in_flight()
    }

    /// Returns the highlighted application, if any.
    #[must_use]
    pub fn selected_application(&self) -> Option<&Application> {
        self.cursor.selected(&self.filtered)
    }

    pub fn move_selection_down(&mut self) {
        self.cursor = self.cursor.next(self.filtered.len());
    }

    pub fn move_selection_up(&mut self) {
        self.cursor = self.cursor.prev(self.filtered.len());
    }

    /// Replaces the catalog, then recomputes the view and resets the cursor.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.recompute_view();
    }

    /// Applies `query` immediately, bypassing the debouncer.
    pub fn apply_query(&mut self, query: &str) {
        self.applied_query = search::normalize_query(query).to_string();
        self.recompute_view();
    }

    fn recompute_view(&mut self) {
        self.filtered = search::filter(&self.catalog, &self.applied_query);
        self.cursor = SelectionCursor::reset(self.filtered.len());
        self.view_generation = self.view_generation.wrapping_add(1);

        tracing::debug!(
            catalog = self.catalog.len(),
            filtered = self.filtered.len(),
            query = %self.applied_query,
            generation = self.view_generation,
            "view recomputed"
        );
    }

    /// Appends a character to the raw query and schedules filtering.
    ///
    /// Returns the delay after which the debouncer should be polled.
    pub fn push_query_char(&mut self, c: char, now: Instant) -> Duration {
        self.query.push(c);
        self.debouncer.schedule(self.query.clone(), now)
    }

    /// Removes the last character of the raw query and schedules filtering.
    ///
    /// Returns `None` when the query was already empty.
    pub fn pop_query_char(&mut self, now: Instant) -> Option<Duration> {
        self.query.pop()?;
        Some(self.debouncer.schedule(self.query.clone(), now))
    }

    /// Clears the query and shows the whole catalog right away.
    pub fn clear_query(&mut self) {
        if let Some(dropped) = self.debouncer.cancel() {
            tracing::debug!(dropped = %dropped, "pending query cancelled by clear");
        }
        self.query.clear();
        self.apply_query("");
    }

    /// Applies the pending query if its debounce window has elapsed.
    ///
    /// Returns `true` if the view was recomputed.
    pub fn poll_debounce(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                self.apply_query(&query);
                true
            }
            None => false,
        }
    }

    /// Delay until the pending query is due, or `None` when nothing is pending.
    #[must_use]
    pub fn debounce_remaining(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Starts a catalog load and returns its request id.
    pub fn begin_load(&mut self) -> u64 {
        let request_id = self.loads.begin();
        self.status = Some(StatusMessage::loading());
        tracing::debug!(request_id = request_id, url = %self.catalog_url, "catalog load started");
        request_id
    }

    /// Marks `request_id` as finished. Returns `false` for stale responses.
    pub fn finish_load(&mut self, request_id: u64) -> bool {
        self.loads.finish(request_id)
    }

    /// Applies the outcome of a load cycle.
    ///
    /// Success replaces the catalog. Failure reports an error and fills an
    /// empty catalog with the fallback set; existing entries are kept.
    pub fn apply_load_result(&mut self, result: LoadResult) {
        match result {
            LoadResult::Success(catalog) => {
                let count = catalog.len();
                self.replace_catalog(catalog);
                self.status = Some(StatusMessage::loaded(count));
                tracing::info!(count = count, "catalog loaded");
            }
            LoadResult::Failure(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                self.status = Some(StatusMessage::failed());
                if self.catalog.is_empty() {
                    let fallback = self.fallback.to_catalog(&self.port_suffix);
                    tracing::debug!(count = fallback.len(), "applying fallback catalog");
                    self.replace_catalog(fallback);
                }
            }
        }
    }

    /// Sets the theme preference and swaps the palette.
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.theme = Theme::for_mode(dark);
    }

    /// Applies a preference read from storage.
    ///
    /// Ignored once the user has toggled the theme, since the stored value
    /// predates that choice. Returns `true` if the palette changed.
    pub fn apply_loaded_dark_mode(&mut self, dark: bool) -> bool {
        if self.theme_chosen {
            tracing::debug!(loaded = dark, current = self.dark_mode, "stale theme preference ignored");
            return false;
        }
        if dark == self.dark_mode {
            return false;
        }
        self.set_dark_mode(dark);
        true
    }

    /// Flips the theme preference and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.theme_chosen = true;
        self.set_dark_mode(!self.dark_mode);
        self.dark_mode
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract the chrome rows from the terminal height
    /// 2. Centre the window on the cursor
    /// 3. Pull the window back when it runs past the end of the view
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = Self::compute_footer();
        let search_bar = SearchBarInfo {
            query: self.query.clone(),
            pending: self.debouncer.is_pending(),
        };
        let status = self.status.as_ref().map(|s| StatusLine {
            text: s.text.clone(),
            is_error: s.kind == StatusKind::Error,
        });

        let Some(selected) = self.cursor.index().filter(|_| !self.filtered.is_empty()) else {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header,
                footer,
                empty_state: Some(self.compute_empty_state()),
                search_bar,
                status,
            };
        };

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered.len());
        if visible_end - visible_start < available_rows && self.filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = if self.applied_query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default().ignore_case())
        };

        let display_items = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, app)| {
                self.compute_display_item(app, visible_start + offset == selected, cols, matcher.as_ref())
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: selected - visible_start,
            header,
            footer,
            empty_state: None,
            search_bar,
            status,
        }
    }

    fn compute_display_item(
        &self,
        app: &Application,
        is_selected: bool,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let name = truncate_chars(&app.name, NAME_COLUMN_WIDTH - 2);
        let visible_chars = name.chars().count();

        let highlight_ranges = matcher
            .map(|m| self.compute_highlight_ranges(&app.name, m))
            .unwrap_or_default()
            .into_iter()
            .filter(|&(start, _)| start < visible_chars)
            .map(|(start, end)| (start, end.min(visible_chars)))
            .collect();

        let url_width = cols.saturating_sub(NAME_COLUMN_WIDTH + 1);
        let url = truncate_chars(&app.url, url_width);
        let description = app
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| truncate_chars(d, url_width.saturating_sub(url.chars().count() + 3)))
            .filter(|d| !d.is_empty());

        DisplayItem {
            name,
            url,
            description,
            is_selected,
            highlight_ranges,
        }
    }

    /// Character ranges of `text` matched by the applied query.
    ///
    /// Prefers the skim scorer's alignment and falls back to the leftmost
    /// subsequence when the scorer declines a name the filter accepted.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let indices = matcher
            .fuzzy_indices(text, &self.applied_query)
            .map(|(_score, indices)| indices)
            .or_else(|| search::match_positions(text, &self.applied_query))
            .unwrap_or_default();

        coalesce_ranges(&indices)
    }

    fn compute_header(&self) -> HeaderInfo {
        let mode = if self.dark_mode { "dark" } else { "light" };
        HeaderInfo {
            title: format!(" Launchpad ({}/{}) ", self.filtered.len(), self.catalog.len()),
            theme_label: mode.to_string(),
        }
    }

    fn compute_footer() -> FooterInfo {
        FooterInfo {
            keybindings: "Type to filter  ↑/↓ or Ctrl+p/n: navigate  Enter: open  Ctrl+t: theme  Ctrl+r: reload  Esc: clear/quit"
                .to_string(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.catalog.is_empty() {
            EmptyState {
                message: "No apps loaded".to_string(),
                subtitle: "Press Ctrl+r to retry".to_string(),
            }
        } else {
            EmptyState {
                message: "No apps match".to_string(),
                subtitle: format!("Nothing matches \"{}\"", self.applied_query),
            }
        }
    }
}

/// Collapses sorted indices into half-open `(start, end)` runs.
fn coalesce_ranges(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Truncates to `max` characters, marking the cut with "...".
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LauncherError;

    fn config() -> Config {
        Config {
            port: "8080".to_string(),
            ..Config::default()
        }
    }

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::replace(
            names
                .iter()
                .map(|n| Application::new(*n, format!("http://{}.localhost:8080", n.to_lowercase()))),
        )
    }

    #[test]
    fn new_state_is_empty() {
        let state = AppState::new(&config());
        assert!(state.filtered().is_empty());
        assert_eq!(state.cursor(), SelectionCursor::Empty);
        assert_eq!(state.port_suffix, ":8080");
        assert!(state.status().is_none());
    }

    #[test]
    fn replacing_catalog_resets_view_and_cursor_together() {
        let mut state = AppState::new(&config());
        state.replace_catalog(catalog(&["Excalidraw", "DrawSQL", "Swagger"]));
        state.move_selection_down();
        state.move_selection_down();
        assert_eq!(state.cursor(), SelectionCursor::Active(2));

        state.replace_catalog(catalog(&["Grafana"]));
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.cursor(), SelectionCursor::Active(0));
        assert_eq!(state.selected_application().unwrap().name, "Grafana");
    }

    #[test]
    fn catalog_reload_keeps_applied_query() {
        let mut state = AppState::new(&config());
        state.apply_query("dr");
        state.replace_catalog(catalog(&["Excalidraw", "Swagger", "DrawSQL"]));
        let names: Vec<&str> = state.filtered().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Excalidraw", "DrawSQL"]);
    }

    #[test]
    fn query_to_empty_view_empties_cursor() {
        let mut state = AppState::new(&config());
        state.replace_catalog(catalog(&["Excalidraw"]));
        state.apply_query("zzz");
        assert_eq!(state.cursor(), SelectionCursor::Empty);
        state.move_selection_down();
        assert_eq!(state.cursor(), SelectionCursor::Empty);
        assert!(state.selected_application().is_none());
    }

    #[test]
    fn debounced_burst_computes_once_with_latest_query() {
        let mut state = AppState::new(&config());
        state.replace_catalog(catalog(&["Excalidraw", "DrawSQL", "Swagger"]));
        let before = state.view_generation();

        let t0 = Instant::now();
        let window = state.push_query_char('e', t0);
        state.push_query_char('x', t0 + Duration::from_millis(25));
        state.push_query_char('c', t0 + Duration::from_millis(50));

        assert!(!state.poll_debounce(t0 + window));
        assert!(!state.poll_debounce(t0 + Duration::from_millis(25) + window));
        assert!(state.poll_debounce(t0 + Duration::from_millis(50) + window));

        assert_eq!(state.view_generation(), before + 1);
        assert_eq!(state.applied_query(), "exc");
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].name, "Excalidraw");
    }

    #[test]
    fn backspace_on_empty_query_schedules_nothing() {
        let mut state = AppState::new(&config());
        assert_eq!(state.pop_query_char(Instant::now()), None);
        assert!(!state.is_query_pending());
    }

    #[test]
    fn clear_query_cancels_pending_and_applies_immediately() {
        let mut state = AppState::new(&config());
        state.replace_catalog(catalog(&["Excalidraw", "DrawSQL"]));
        let t0 = Instant::now();
        state.push_query_char('q', t0);
        state.clear_query();
        assert!(!state.is_query_pending());
        assert_eq!(state.filtered().len(), 2);
        assert!(!state.poll_debounce(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn first_failed_load_uses_fallback() {
        let mut state = AppState::new(&config());
        let id = state.begin_load();
        assert!(state.finish_load(id));
        state.apply_load_result(LoadResult::Failure(LauncherError::NetworkFailure(
            "connection refused".to_string(),
        )));

        assert_eq!(state.catalog().len(), 4);
        assert_eq!(state.filtered().len(), 4);
        assert_eq!(state.cursor(), SelectionCursor::Active(0));
        assert_eq!(state.filtered()[0].url, "http://draw.localhost:8080");
        assert_eq!(state.status().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn failed_reload_keeps_existing_catalog() {
        let mut state = AppState::new(&config());
        state.apply_load_result(LoadResult::Success(catalog(&["Grafana"])));
        state.apply_load_result(LoadResult::Failure(LauncherError::MalformedResponse(
            "bad".to_string(),
        )));
        assert_eq!(state.catalog().len(), 1);
        assert_eq!(state.catalog().entries()[0].name, "Grafana");
        assert_eq!(state.status().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn successful_load_reports_count() {
        let mut state = AppState::new(&config());
        state.apply_load_result(LoadResult::Success(catalog(&["Grafana"])));
        assert_eq!(state.status(), Some(&StatusMessage::loaded(1)));
    }

    #[test]
    fn toggle_switches_theme() {
        let mut state = AppState::new(&config());
        assert!(!state.dark_mode);
        assert!(state.toggle_dark_mode());
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert!(!state.toggle_dark_mode());
        assert_eq!(state.theme.name, "catppuccin-latte");
    }

    #[test]
    fn viewmodel_windows_around_cursor() {
        let mut state = AppState::new(&config());
        let names: Vec<String> = (0..30).map(|i| format!("app{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        state.replace_catalog(catalog(&refs));
        for _ in 0..20 {
            state.move_selection_down();
        }

        let vm = state.compute_viewmodel(20, 100);
        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].name, "app20");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_reports_empty_states() {
        let mut state = AppState::new(&config());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No apps loaded");

        state.replace_catalog(catalog(&["Excalidraw"]));
        state.apply_query("zzz");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No apps match");
    }

    #[test]
    fn viewmodel_highlights_matched_characters() {
        let mut state = AppState::new(&config());
        state.replace_catalog(catalog(&["Excalidraw"]));
        state.apply_query("exc");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 3)]);
    }

    #[test]
    fn coalesce_groups_consecutive_indices() {
        assert_eq!(coalesce_ranges(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce_ranges(&[]).is_empty());
    }

    #[test]
    fn truncation_is_char_safe() {
        assert_eq!(truncate_chars("日本語のアプリケーション", 6), "日本語...");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
