//! Subscriber setup.

use super::exporter::JsonLinesExporter;
use super::rotation::RotatingWriter;
use crate::infrastructure::{get_data_dir, SPAN_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "cardsearch";
const MAX_TRACE_FILE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_TRACE_BACKUPS: usize = 2;

/// Installs the global subscriber exporting spans to the plugin data directory.
///
/// Best effort: if the directory cannot be created the plugin runs without
/// tracing. Calling it again after a subscriber is installed has no effect.
/// An unparsable `trace_level` falls back to `info`.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let writer = RotatingWriter::new(data_dir.join(SPAN_FILE_NAME), MAX_TRACE_FILE_BYTES, MAX_TRACE_BACKUPS);
    let provider = TracerProvider::builder()
        .with_config(
            opentelemetry_sdk::trace::Config::default()
                .with_resource(Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)])),
        )
        .with_simple_exporter(JsonLinesExporter::new(writer, SERVICE_NAME))
        .build();

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
