//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Launchpad library and
//! the Zellij plugin system. It translates host events into library events and
//! executes the [`Action`]s the library hands back.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, web requests
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ LaunchpadWorker  │   │  ← Theme preference storage
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, Timer, `WebRequestResult`, `CustomMessage`, ...
//! 3. **Permissions granted**: Ask the worker for the saved theme, start the first load
//! 4. **Update**: Map events, delegate to `handle_event`, run actions
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key(Down)` / `Ctrl+n` → `Event::KeyDown`
//! - `Key(Up)` / `Ctrl+p` → `Event::KeyUp`
//! - `Key(Enter)` → `Event::Activate`
//! - `Key(Esc)` → `Event::Escape`
//! - `Ctrl+t` → `Event::ToggleTheme`
//! - `Ctrl+r` → `Event::Reload`
//! - `Timer` → `Event::Timer`
//! - `WebRequestResult` → `Event::CatalogResponse`
//! - `CustomMessage` from the worker → `Event::WorkerResponse`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::Instant;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use launchpad::worker::{LaunchpadWorker, WorkerMessage, WorkerResponse};
use launchpad::{handle_event, Action, Config, Event};

register_plugin!(State);
register_worker!(LaunchpadWorker, launchpad_worker, LAUNCHPAD_WORKER);

/// Web request context key carrying the load id.
const REQUEST_ID_KEY: &str = "request_id";

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: launchpad::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Command used to open application URLs.
    open_command: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: launchpad::initialize(&default_config),
            worker_name: "launchpad".to_string(),
            open_command: default_config.open_command,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests permissions, and subscribes to events.
    ///
    /// Requests:
    /// - `WebAccess`: fetch the catalog
    /// - `RunCommands`: run the URL opener
    /// - `ChangeApplicationState`: hide the plugin pane
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        launchpad::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            catalog_url = %config.catalog_url(),
            open_command = %config.open_command,
            "parsed configuration"
        );
        self.app = launchpad::initialize(&config);
        self.open_command.clone_from(&config.open_command);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::RunCommands,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
            EventType::RunCommandResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates the Zellij event, runs it through `handle_event`, and
    /// executes the resulting actions. Returns `true` to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let _guard = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name)
            .entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::Timer,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_result_event(status, body, &context)
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    let error = String::from_utf8_lossy(&stderr);
                    tracing::warn!(exit_code = ?exit_code, error = %error, "open command failed");
                }
                return false;
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        launchpad::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one library event and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event, Instant::now()) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('t') => Some(Event::ToggleTheme),
                BareKey::Char('r') => Some(Event::Reload),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Activate,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps a finished web request to a catalog response.
    fn map_web_result_event(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Event {
        let request_id = context.get(REQUEST_ID_KEY).and_then(|id| id.parse::<u64>().ok());
        tracing::debug!(status = status, request_id = ?request_id, body_len = body.len(), "web request result");
        Event::CatalogResponse {
            request_id,
            status,
            body,
        }
    }

    /// Starts the first load and asks the worker for the saved theme.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading preferences and catalog");
                self.post_worker_message(&WorkerMessage::load_preferences());
                self.dispatch(&Event::Reload)
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - catalog cannot be fetched");
                false
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(response = ?response, "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` as JSON and posts it to the worker thread.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
            Action::FetchCatalog { ref url, request_id } => {
                tracing::debug!(url = %url, request_id = request_id, "fetching catalog");
                let mut context = BTreeMap::new();
                context.insert(REQUEST_ID_KEY.to_string(), request_id.to_string());
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::ScheduleTimer { delay } => {
                set_timeout(delay.as_secs_f64());
            }
            Action::OpenUrl { ref url } => {
                tracing::debug!(url = %url, opener = %self.open_command, "opening application");
                run_command(&[self.open_command.as_str(), url.as_str()], BTreeMap::new());
                hide_self();
            }
        }
    }
}
