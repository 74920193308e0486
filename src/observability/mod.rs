//! OpenTelemetry-based tracing with file export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → RotatingWriter
//! ```
//!
//! Every finished span becomes one JSON object on its own line in
//! `~/.local/share/zellij/cardsearch/cardsearch-spans.jsonl`. The file is
//! rotated once it passes 5 MB and two backups are kept.
//!
//! The filter comes from the `trace_level` plugin option, default `info`.
//! Request issue and resolution are recorded at `debug`, so
//! `trace_level "debug"` shows every query and why a response was dropped.
//!
//! ```no_run
//! use cardsearch::observability::init_tracing;
//! use cardsearch::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("ready");
//! ```

mod exporter;
mod init;
mod rotation;

pub use exporter::JsonLinesExporter;
pub use init::init_tracing;
pub use rotation::RotatingWriter;
