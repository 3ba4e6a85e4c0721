//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AcquisitionService (domain)
//! ```
//!
//! Driven adapters (the I²C bus, the GPIO/ADC sampler, the MQTT client, the
//! event sink, the restart hook) implement these traits. The service
//! consumes them via generics, so the domain core never touches hardware or
//! the network directly.

use crate::error::{BusError, Error, PublishError};
use crate::sensors::light::LightReport;
use crate::sensors::motion::MotionState;
use crate::sensors::sht30::Reading;

// ───────────────────────────────────────────────────────────────
// Bus port (driven adapter: I²C transport → sensor driver)
// ───────────────────────────────────────────────────────────────

/// Write-then-read two-wire transport consumed by the SHT30 driver.
///
/// Implementations own the physical bus handle; the single-threaded loop
/// makes mutual exclusion structural, so no locking is required.
pub trait BusPort {
    /// Write `bytes` to the device at `addr`.
    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), BusError>;

    /// Read exactly `buf.len()` bytes from the device at `addr`.
    fn read(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), BusError>;

    /// Enumerate responding device addresses.
    fn scan(&mut self) -> heapless::Vec<u8, 16>;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the acquisition loop calls this for raw samples and
/// validated climate readings.
pub trait SensorPort {
    /// One full SHT30 measurement (command, settle, read, CRC, convert).
    fn measure_climate(&mut self) -> Result<Reading, Error>;

    /// Sample the PIR presence line. Cheap; called every loop iteration.
    fn sample_motion(&mut self) -> bool;

    /// Raw 16-bit LDR count.
    fn read_light_raw(&mut self) -> Result<u16, Error>;
}

// ───────────────────────────────────────────────────────────────
// Publish port (driven adapter: domain → broker)
// ───────────────────────────────────────────────────────────────

/// Message-broker boundary. Implementations own topic formation and payload
/// encoding; the core hands over typed data and makes exactly one attempt
/// per call — queuing and retry live on the other side of this trait, if
/// anywhere.
pub trait PublishPort {
    fn publish_climate(&mut self, reading: &Reading) -> Result<(), PublishError>;

    fn publish_motion(&mut self, state: MotionState) -> Result<(), PublishError>;

    fn publish_light(&mut self, report: &LightReport) -> Result<(), PublishError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log, test
/// recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Restart port (driven adapter: domain → supervisor)
// ───────────────────────────────────────────────────────────────

/// Full-device restart hook. The core only ever *signals* that the error
/// ceiling was reached; the embedding application decides how a restart is
/// actually performed.
pub trait RestartPort {
    /// Discard all process state and reinitialise from boot. Never returns.
    fn restart(&mut self) -> !;
}
