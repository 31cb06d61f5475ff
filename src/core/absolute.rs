use std::sync::Arc;

use crate::core::{RenderSink, Timestamp};
use crate::utils::config::ConsoleConfig;
use crate::utils::constants::PLACEHOLDER;
use crate::utils::format::format_absolute;

/// Absolute date display. Renders the offset-corrected timestamp through
/// the configured strftime pattern; the host calls `set_time`/`set_raw`
/// again whenever the bound input changes.
pub struct ToDateDisplay {
    time_offset_ms: i64,
    date_format: String,
    sink: Arc<dyn RenderSink>,
}

impl ToDateDisplay {
    pub fn new(config: &ConsoleConfig, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            time_offset_ms: config.time_offset_ms,
            date_format: config.date_format().to_string(),
            sink,
        }
    }

    pub fn set_time(&self, time: Timestamp) {
        match format_absolute(time.millis(), self.time_offset_ms, &self.date_format) {
            Ok(text) => self.sink.render(&text),
            Err(e) => {
                tracing::warn!("Rendering placeholder: {}", e);
                self.sink.render(PLACEHOLDER);
            }
        }
    }

    /// Unparseable input renders the placeholder instead of failing.
    pub fn set_raw(&self, raw: &str) {
        match raw.parse::<Timestamp>() {
            Ok(time) => self.set_time(time),
            Err(e) => {
                tracing::warn!("Rendering placeholder: {}", e);
                self.sink.render(PLACEHOLDER);
            }
        }
    }
}
