//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → launchpad-otlp.json
//! ```
//!
//! The file lives in the plugin data directory and rotates at 10 MB, keeping
//! three numbered backups. The level comes from the `trace_level` option.
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: span exporter and provider construction
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: rotating line writer

mod exporter;
mod file_writer;
mod init;
mod span_formatter;

pub use init::init_tracing;
