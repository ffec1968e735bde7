//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The plugin runtime executes
//! these actions in sequence and owns every call into the Zellij host.

use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Issues an HTTP GET for the catalog.
    ///
    /// The request id travels in the web request context so the response can
    /// be matched against the outstanding load.
    FetchCatalog {
        url: String,
        request_id: u64,
    },

    /// Arms a one-shot host timer. The debouncer is polled when it fires.
    ScheduleTimer {
        delay: Duration,
    },

    /// Opens an application URL with the configured opener, then hides the pane.
    OpenUrl {
        url: String,
    },
}
