use super::*;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        let out = self.0.lock().expect("log buffer");
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut out) = self.0.lock() {
            out.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_with(config: &TracingConfig, emit: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = config.subscriber(move || writer.clone());
    tracing::subscriber::with_default(subscriber, emit);
    capture.contents()
}

#[test]
fn test_log_format_parse_known_names() {
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("json"), LogFormat::Json);
}

#[test]
fn test_log_format_parse_is_case_insensitive() {
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" Tree "), LogFormat::Tree);
}

#[test]
fn test_log_format_unknown_falls_back_to_text() {
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    assert_eq!(LogFormat::default(), LogFormat::Text);
}

#[test]
fn test_config_builder() {
    let config = TracingConfig::new("debug").with_format(LogFormat::Json);
    assert_eq!(config.filter, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(TracingConfig::new("info").format, LogFormat::Text);
}

#[test]
fn test_text_subscriber_writes_plain_fields() {
    let config = TracingConfig::new("trace");
    let logs = capture_with(&config, || {
        tracing::trace!(kind = "object", "widened");
    });
    assert!(logs.contains("widened"), "{logs}");
    assert!(logs.contains("kind=\"object\""), "{logs}");
    assert!(!logs.contains('\u{1b}'), "{logs}");
}

#[test]
fn test_json_subscriber_writes_objects() {
    let config = TracingConfig::new("debug").with_format(LogFormat::Json);
    let logs = capture_with(&config, || {
        tracing::debug!(depth = 3, "limit reached");
    });
    let line = logs.lines().next().expect("one event");
    assert!(line.starts_with('{'), "{line}");
    assert!(line.contains("\"limit reached\""), "{line}");
    assert!(line.contains("\"depth\":3"), "{line}");
}

#[test]
fn test_tree_subscriber_writes_events() {
    let config = TracingConfig::new("info").with_format(LogFormat::Tree);
    let logs = capture_with(&config, || {
        tracing::info!("checking workflow");
    });
    assert!(logs.contains("checking workflow"), "{logs}");
}

#[test]
fn test_filter_drops_lower_levels() {
    let config = TracingConfig::new("warn");
    let logs = capture_with(&config, || {
        tracing::debug!("hidden");
        tracing::warn!("shown");
    });
    assert!(!logs.contains("hidden"), "{logs}");
    assert!(logs.contains("shown"), "{logs}");
}
