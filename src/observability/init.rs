//! Subscriber setup: `EnvFilter` plus an OpenTelemetry layer writing to file.

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Launchpad";
const TRACE_FILE: &str = "launchpad-otlp.json";

/// Installs the global subscriber.
///
/// Spans go to `<data_dir>/launchpad-otlp.json`, filtered by
/// `config.trace_level`. Only the first call per thread group takes effect;
/// if the data directory cannot be created, tracing stays disabled.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE), resource, "launchpad");
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(&config.trace_level))
        .with(otel_layer)
        .try_init();
}
