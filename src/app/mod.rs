//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/search/worker
//! layers.
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └── Web/Timer/Worker Responses ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`cursor`]: Wrapping selection cursor over the filtered view
//! - [`fetch`]: Catalog wire parsing, load tracking, fallback entries, status text
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod cursor;
pub mod fetch;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use cursor::SelectionCursor;
pub use fetch::{FallbackCatalog, LoadResult, StatusKind, StatusMessage};
pub use handler::{handle_event, Event};
pub use state::AppState;
