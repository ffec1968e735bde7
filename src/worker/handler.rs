//! Worker thread implementation for preference storage.
//!
//! Storage I/O runs on a Zellij worker so the plugin thread never blocks on the
//! filesystem. Messages carry a [`TraceContext`](super::TraceContext) so worker
//! spans join the trace that sent them.

use crate::domain::error::{LauncherError, Result};
use crate::infrastructure::paths;
use crate::storage::{JsonStorage, PreferenceStore};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state. Storage is opened lazily on the first message.
#[derive(Serialize, Deserialize, Default)]
pub struct LaunchpadWorker {
    #[serde(skip)]
    storage: Option<Box<dyn PreferenceStore>>,
}

impl LaunchpadWorker {
    /// Opens the JSON preference file in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let storage: Box<dyn PreferenceStore> = Box::new(JsonStorage::new(paths::preferences_file())?);
        Ok(Self::with_storage(storage))
    }

    /// Creates a worker over an already opened store.
    #[must_use]
    pub fn with_storage(storage: Box<dyn PreferenceStore>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    fn get_storage(&mut self) -> Result<&mut Box<dyn PreferenceStore>> {
        self.storage
            .as_mut()
            .ok_or_else(|| LauncherError::Worker("Storage not initialized".to_string()))
    }

    /// Maps a storage result to a response, logging either way.
    fn handle_db_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "storage operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load_preferences(&mut self) -> WorkerResponse {
        Self::handle_db_result(
            "load preferences",
            self.get_storage().and_then(|storage| storage.load_dark_mode()),
            |stored| {
                tracing::debug!(stored = ?stored, "theme preference read");
                WorkerResponse::PreferencesLoaded {
                    dark_mode: stored.unwrap_or(false),
                }
            },
        )
    }

    fn handle_save_preferences(&mut self, dark_mode: bool) -> WorkerResponse {
        Self::handle_db_result(
            "save preferences",
            self.get_storage().and_then(|storage| storage.save_dark_mode(dark_mode)),
            |()| WorkerResponse::PreferencesSaved { dark_mode },
        )
    }

    /// Re-enters the sender's trace so worker spans are parented correctly.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes one worker message and returns the response to send back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _guard = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadPreferences { .. } => self.handle_load_preferences(),
            WorkerMessage::SavePreferences { dark_mode, .. } => self.handle_save_preferences(dark_mode),
        }
    }

    fn respond(name: String, response: &WorkerResponse) {
        match serde_json::to_string(response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for LaunchpadWorker {
    /// Entry point for messages posted by the plugin thread.
    ///
    /// `message` is echoed back as the response name so the plugin can route it.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        if self.storage.is_none() {
            match Self::new() {
                Ok(worker) => self.storage = worker.storage,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to initialize storage");
                    let response = WorkerResponse::Error {
                        message: format!("Failed to initialize storage: {e}"),
                    };
                    Self::respond(message, &response);
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);
        Self::respond(message, &response);
    }
}
