//! Mock hardware and publisher for integration tests.
//!
//! Records every publish call so tests can assert on the full message
//! history without a broker or real GPIO/I2C registers.

use roomsense::app::events::AppEvent;
use roomsense::app::ports::{EventSink, PublishPort, SensorPort};
use roomsense::error::{BusError, ChecksumError, Error, PublishError};
use roomsense::sensors::light::LightReport;
use roomsense::sensors::motion::MotionState;
use roomsense::sensors::sht30::Reading;

// ── Publish call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PublishCall {
    Climate { temperature_c: f32, humidity_pct: f32 },
    Motion(MotionState),
    Light { percent: f32 },
}

// ── MockSensors ──────────────────────────────────────────────

/// Scriptable sensor back-end: each field is the value the next call
/// returns, so tests steer the scenario between ticks.
pub struct MockSensors {
    pub motion_level: bool,
    pub climate: Result<Reading, Error>,
    pub light_raw: Result<u16, Error>,
    pub climate_reads: u32,
}

#[allow(dead_code)]
impl MockSensors {
    pub fn new() -> Self {
        Self {
            motion_level: false,
            climate: Ok(Reading {
                temperature_c: 22.0,
                humidity_pct: 50.0,
            }),
            light_raw: Ok(0x8000), // mid-scale, classifies as normal
            climate_reads: 0,
        }
    }

    pub fn fail_climate_bus(&mut self) {
        self.climate = Err(Error::Bus(BusError::ReadFailed));
    }

    pub fn fail_climate_checksum(&mut self) {
        self.climate = Err(Error::Checksum(ChecksumError::Temperature));
    }

    pub fn restore_climate(&mut self) {
        self.climate = Ok(Reading {
            temperature_c: 22.0,
            humidity_pct: 50.0,
        });
    }

    /// Raw count corresponding (approximately) to the given percentage.
    pub fn set_light_percent(&mut self, pct: f32) {
        self.light_raw = Ok((pct / 100.0 * 65535.0) as u16);
    }
}

impl Default for MockSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockSensors {
    fn measure_climate(&mut self) -> Result<Reading, Error> {
        self.climate_reads += 1;
        self.climate
    }

    fn sample_motion(&mut self) -> bool {
        self.motion_level
    }

    fn read_light_raw(&mut self) -> Result<u16, Error> {
        self.light_raw
    }
}

// ── MockPublisher ────────────────────────────────────────────

#[derive(Default)]
pub struct MockPublisher {
    pub calls: Vec<PublishCall>,
    pub fail_climate: bool,
    pub fail_motion: bool,
    pub fail_light: bool,
}

#[allow(dead_code)]
impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_everything(&mut self) {
        self.fail_climate = true;
        self.fail_motion = true;
        self.fail_light = true;
    }

    pub fn restore(&mut self) {
        self.fail_climate = false;
        self.fail_motion = false;
        self.fail_light = false;
    }

    pub fn motion_history(&self) -> Vec<MotionState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PublishCall::Motion(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn climate_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PublishCall::Climate { .. }))
            .count()
    }

    pub fn light_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PublishCall::Light { .. }))
            .count()
    }
}

impl PublishPort for MockPublisher {
    fn publish_climate(&mut self, reading: &Reading) -> Result<(), PublishError> {
        if self.fail_climate {
            return Err(PublishError::TransmitFailed);
        }
        self.calls.push(PublishCall::Climate {
            temperature_c: reading.temperature_c,
            humidity_pct: reading.humidity_pct,
        });
        Ok(())
    }

    fn publish_motion(&mut self, state: MotionState) -> Result<(), PublishError> {
        if self.fail_motion {
            return Err(PublishError::TransmitFailed);
        }
        self.calls.push(PublishCall::Motion(state));
        Ok(())
    }

    fn publish_light(&mut self, report: &LightReport) -> Result<(), PublishError> {
        if self.fail_light {
            return Err(PublishError::TransmitFailed);
        }
        self.calls.push(PublishCall::Light {
            percent: report.percent,
        });
        Ok(())
    }
}

// ── RecordingSink ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart_requests(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::RestartRequested { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
