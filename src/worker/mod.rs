//! Background worker thread for preference storage.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::LaunchpadWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
