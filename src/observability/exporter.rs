//! Span exporter writing one JSON object per finished span.

use super::rotation::RotatingWriter;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct SpanRecord<'a> {
    start: String,
    service: &'a str,
    name: &'a str,
    trace_id: String,
    span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_span_id: Option<String>,
    duration_us: u128,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_message: Option<String>,
    attributes: BTreeMap<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<EventRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    at: String,
    name: &'a str,
    attributes: BTreeMap<String, JsonValue>,
}

/// Writes spans as JSON lines through a [`RotatingWriter`].
#[derive(Debug)]
pub struct JsonLinesExporter {
    writer: RotatingWriter,
    service: String,
    is_shutdown: bool,
}

impl JsonLinesExporter {
    #[must_use]
    pub fn new(writer: RotatingWriter, service: impl Into<String>) -> Self {
        Self {
            writer,
            service: service.into(),
            is_shutdown: false,
        }
    }

    fn record<'a>(&'a self, span: &'a SpanData) -> SpanRecord<'a> {
        let (status, status_message) = match &span.status {
            Status::Unset => ("unset", None),
            Status::Ok => ("ok", None),
            Status::Error { description } => ("error", Some(description.to_string())),
        };

        SpanRecord {
            start: timestamp(span.start_time),
            service: &self.service,
            name: &span.name,
            trace_id: span.span_context.trace_id().to_string(),
            span_id: span.span_context.span_id().to_string(),
            parent_span_id: (span.parent_span_id != SpanId::INVALID).then(|| span.parent_span_id.to_string()),
            duration_us: span
                .end_time
                .duration_since(span.start_time)
                .unwrap_or_default()
                .as_micros(),
            status,
            status_message,
            attributes: attributes(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    at: timestamp(event.timestamp),
                    name: &event.name,
                    attributes: attributes(&event.attributes),
                })
                .collect(),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> std::result::Result<(), TraceError> {
        for span in batch {
            let line = serde_json::to_string(&self.record(span)).map_err(|e| TraceError::from(e.to_string()))?;
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        if let Some(name) = resource.get(opentelemetry::Key::from_static_str("service.name")) {
            self.service = name.to_string();
        }
    }
}

fn timestamp(time: std::time::SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn attributes(pairs: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    pairs
        .iter()
        .map(|kv| (kv.key.to_string(), json_value(&kv.value)))
        .collect()
}

fn json_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::from(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::from(s.as_str()),
        Value::Array(_) => JsonValue::from(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Span, Tracer, TracerProvider as _};
    use opentelemetry_sdk::trace::TracerProvider;

    #[test]
    fn finished_spans_become_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let exporter = JsonLinesExporter::new(RotatingWriter::new(path.clone(), 1 << 20, 1), "cardsearch-test");
        let provider = TracerProvider::builder().with_simple_exporter(exporter).build();

        let tracer = provider.tracer("test");
        let mut span = tracer.start("fetch_issued");
        span.set_attribute(KeyValue::new("kind", "cards"));
        span.set_attribute(KeyValue::new("seq", 3_i64));
        span.end();

        let contents = std::fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let json: JsonValue = serde_json::from_str(line).unwrap();
        assert_eq!(json["name"], "fetch_issued");
        assert_eq!(json["attributes"]["kind"], "cards");
        assert_eq!(json["attributes"]["seq"], 3);
        assert_eq!(json["trace_id"].as_str().unwrap().len(), 32);
        assert!(json.get("parent_span_id").is_none());
    }

    #[test]
    fn attribute_values_keep_their_json_type() {
        assert_eq!(json_value(&Value::Bool(true)), JsonValue::Bool(true));
        assert_eq!(json_value(&Value::F64(0.5)), serde_json::json!(0.5));
        assert_eq!(json_value(&Value::from("x")), serde_json::json!("x"));
    }
}
