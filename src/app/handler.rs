//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which every input
//! reaches [`AppState`]. It mutates state through `AppState` methods and
//! returns the side effects as [`Action`]s for the shim to execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Activate`
//! - **Query input**: `Char`, `Backspace`, `Escape` (debounced through `Timer`)
//! - **Catalog**: `Reload`, `CatalogResponse`
//! - **Theme**: `ToggleTheme`
//! - **Worker**: `WorkerResponse` with typed message variants

use super::fetch::{interpret_response, LoadResult};
use crate::app::{Action, AppState};
use crate::domain::error::{LauncherError, Result};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::time::Instant;

/// Events triggered by user input, host callbacks, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (wraps to top).
    KeyDown,
    /// Moves the cursor up (wraps to bottom).
    KeyUp,
    /// Opens the highlighted application.
    Activate,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Clears the query, or closes the pane if the query is already empty.
    Escape,
    /// Hides the plugin pane.
    CloseFocus,
    /// Flips the theme preference and persists it.
    ToggleTheme,
    /// Starts a new catalog load.
    Reload,
    /// A host timer fired; the debouncer may release a query.
    Timer,

    /// Completion of a catalog web request.
    CatalogResponse {
        /// Id from the request context, if it was readable.
        request_id: Option<u64>,
        status: u16,
        body: Vec<u8>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// `now` is the instant the event was received; it drives the query debouncer.
/// The boolean in the result tells the shim whether to re-render.
///
/// # Errors
///
/// Returns [`LauncherError::Worker`] when the worker reports a failure. State
/// is left consistent in that case; the caller only needs to log it.
pub fn handle_event(state: &mut AppState, event: &Event, now: Instant) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Activate => {
            let Some(app) = state.selected_application() else {
                tracing::debug!("nothing selected, activation ignored");
                return Ok((false, vec![]));
            };
            tracing::debug!(name = %app.name, url = %app.url, "application activated");
            Ok((false, vec![Action::OpenUrl { url: app.url.clone() }]))
        }
        Event::Char(c) => {
            let delay = state.push_query_char(*c, now);
            tracing::trace!(query = %state.query(), char = %c, "query updated");
            Ok((true, vec![Action::ScheduleTimer { delay }]))
        }
        Event::Backspace => match state.pop_query_char(now) {
            Some(delay) => Ok((true, vec![Action::ScheduleTimer { delay }])),
            None => Ok((false, vec![])),
        },
        Event::Escape => {
            if state.query().is_empty() && !state.is_query_pending() {
                return Ok((false, vec![Action::CloseFocus]));
            }
            state.clear_query();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleTheme => {
            let dark_mode = state.toggle_dark_mode();
            tracing::debug!(dark_mode = dark_mode, "theme toggled");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_preferences(dark_mode))],
            ))
        }
        Event::Reload => {
            let request_id = state.begin_load();
            Ok((
                true,
                vec![Action::FetchCatalog {
                    url: state.catalog_url.clone(),
                    request_id,
                }],
            ))
        }
        Event::Timer => {
            let applied = state.poll_debounce(now);
            match state.debounce_remaining(now) {
                Some(delay) => {
                    tracing::trace!(
                        query = %state.query(),
                        remaining_ms = delay.as_millis() as u64,
                        "timer fired before query was due, re-arming"
                    );
                    Ok((applied, vec![Action::ScheduleTimer { delay }]))
                }
                None => Ok((applied, vec![])),
            }
        }
        Event::CatalogResponse {
            request_id,
            status,
            body,
        } => {
            let Some(request_id) = *request_id else {
                tracing::warn!(status = status, "catalog response without request id, ignoring");
                return Ok((false, vec![]));
            };
            if !state.finish_load(request_id) {
                tracing::debug!(
                    request_id = request_id,
                    outstanding = ?state.load_in_flight(),
                    "stale catalog response discarded"
                );
                return Ok((false, vec![]));
            }

            let result = interpret_response(*status, body, &state.port_suffix);
            if let LoadResult::Success(catalog) = &result {
                tracing::debug!(request_id = request_id, entries = catalog.len(), "catalog response accepted");
            }
            state.apply_load_result(result);
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::PreferencesLoaded { dark_mode } => {
                Ok((state.apply_loaded_dark_mode(*dark_mode), vec![]))
            }
            WorkerResponse::PreferencesSaved { dark_mode } => {
                tracing::debug!(dark_mode = dark_mode, "theme preference persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                Err(LauncherError::Worker(message.clone()))
            }
        },
    }
}
