//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | acquisition loop running");
            }
            AppEvent::ClimatePublished(r) => {
                info!(
                    "CLIMATE | T={:.2}\u{00b0}C | RH={:.2}%",
                    r.temperature_c, r.humidity_pct
                );
            }
            AppEvent::MotionPublished(state) => {
                info!("MOTION | {}", state.as_str());
            }
            AppEvent::LightPublished(report) => {
                info!(
                    "LIGHT | {:.1}% | {}",
                    report.percent,
                    report.state.as_str()
                );
            }
            AppEvent::SensorFailed(e) => {
                warn!("SENSOR | read failed: {e}");
            }
            AppEvent::PublishFailed { what, error } => {
                warn!("PUBLISH | {what} failed: {error}");
            }
            AppEvent::RestartRequested { consecutive_errors } => {
                warn!("RESTART | {consecutive_errors} consecutive errors, restarting");
            }
        }
    }
}
