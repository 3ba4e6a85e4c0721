//! Outbound application events.
//!
//! The [`AcquisitionService`](super::service::AcquisitionService) emits
//! these through the [`EventSink`](super::ports::EventSink) port. Adapters
//! on the other side decide what to do with them — log to serial, record in
//! a test, etc. Events are observability only; the broker-facing data path
//! goes through [`PublishPort`](super::ports::PublishPort).

use crate::error::{Error, PublishError};
use crate::sensors::light::LightReport;
use crate::sensors::motion::MotionState;
use crate::sensors::sht30::Reading;

/// Structured events emitted by the acquisition core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The service has started.
    Started,

    /// Motion presence changed and the new state was published.
    MotionPublished(MotionState),

    /// A climate reading was published.
    ClimatePublished(Reading),

    /// A light report was published (change or heartbeat).
    LightPublished(LightReport),

    /// A sensor read or measurement failed; no data this cycle.
    SensorFailed(Error),

    /// A single publish attempt failed and was not retried.
    PublishFailed {
        what: &'static str,
        error: PublishError,
    },

    /// The consecutive-error ceiling was reached; the host must restart.
    RestartRequested { consecutive_errors: u32 },
}
