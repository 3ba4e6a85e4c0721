//! SHT30 temperature/humidity driver.
//!
//! Command/response protocol over I²C: write a 2-byte measurement command,
//! block for the repeatability-dependent settling delay, then read a 6-byte
//! frame (`temp_msb temp_lsb temp_crc hum_msb hum_lsb hum_crc`). Both CRC
//! bytes must match or the whole frame is rejected.
//!
//! The driver is generic over [`BusPort`] and [`DelayNs`], so unit tests run
//! against a scripted mock bus on the host.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::app::ports::BusPort;
use crate::error::{ChecksumError, Error, Result};
use crate::sensors::crc::crc8;

/// Fixed I²C address of the SHT30 (ADDR pin low).
pub const SHT30_ADDR: u8 = 0x44;

const CMD_MEASURE_HIGH: [u8; 2] = [0x24, 0x00];
const CMD_MEASURE_MED: [u8; 2] = [0x24, 0x0B];
const CMD_MEASURE_LOW: [u8; 2] = [0x24, 0x16];
const CMD_SOFT_RESET: [u8; 2] = [0x30, 0xA2];
const CMD_READ_STATUS: [u8; 2] = [0xF3, 0x2D];

/// Reset settle time. The sensor accepts no traffic while restarting.
const SOFT_RESET_DELAY_US: u32 = 100_000;
const STATUS_DELAY_US: u32 = 10_000;

/// Measurement precision / settling-time tradeoff.
///
/// The delays are protocol-mandated minimums from the datasheet, not tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeatability {
    High,
    Medium,
    Low,
}

impl Repeatability {
    /// The 2-byte measurement command for this repeatability.
    pub const fn command(self) -> [u8; 2] {
        match self {
            Self::High => CMD_MEASURE_HIGH,
            Self::Medium => CMD_MEASURE_MED,
            Self::Low => CMD_MEASURE_LOW,
        }
    }

    /// Mandatory wait between command and readout.
    pub const fn settling_delay_us(self) -> u32 {
        match self {
            Self::High => 15_000,
            Self::Medium => 6_000,
            Self::Low => 4_000,
        }
    }
}

/// One validated climate measurement. Created fresh per cycle, never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Degrees Celsius. Unclamped; derived from the raw count by a fixed
    /// affine transform.
    pub temperature_c: f32,
    /// Relative humidity, clamped to 0–100 %.
    pub humidity_pct: f32,
}

/// SHT30 driver over an abstract two-wire bus.
pub struct Sht30<B, D> {
    bus: B,
    delay: D,
    addr: u8,
}

impl<B: BusPort, D: DelayNs> Sht30<B, D> {
    /// Construct the driver, verifying the sensor answers on the bus.
    ///
    /// Fails with [`Error::DeviceNotFound`] if `addr` is absent from the bus
    /// scan — startup must not proceed with a phantom sensor.
    pub fn new(mut bus: B, delay: D, addr: u8) -> Result<Self> {
        let devices = bus.scan();
        if !devices.contains(&addr) {
            return Err(Error::DeviceNotFound { addr });
        }
        info!("SHT30: found at 0x{addr:02X}");
        Ok(Self { bus, delay, addr })
    }

    /// Perform one measurement at the given repeatability.
    ///
    /// Bus failures propagate as [`Error::Bus`]; CRC mismatches as
    /// [`Error::Checksum`]. No partial data is ever returned.
    pub fn measure(&mut self, repeatability: Repeatability) -> Result<Reading> {
        self.bus.write(self.addr, &repeatability.command())?;
        self.delay.delay_us(repeatability.settling_delay_us());

        let mut frame = [0u8; 6];
        self.bus.read(self.addr, &mut frame)?;
        let reading = decode_frame(&frame)?;
        debug!(
            "SHT30: T={:.2}C RH={:.2}%",
            reading.temperature_c, reading.humidity_pct
        );
        Ok(reading)
    }

    /// Soft-reset the sensor. No response is expected; the mandatory 100 ms
    /// settle is blocked out here.
    pub fn soft_reset(&mut self) -> Result<()> {
        self.bus.write(self.addr, &CMD_SOFT_RESET)?;
        self.delay.delay_us(SOFT_RESET_DELAY_US);
        Ok(())
    }

    /// Read the 16-bit status register (post-reset health probe).
    pub fn read_status(&mut self) -> Result<u16> {
        self.bus.write(self.addr, &CMD_READ_STATUS)?;
        self.delay.delay_us(STATUS_DELAY_US);

        let mut frame = [0u8; 3];
        self.bus.read(self.addr, &mut frame)?;
        if crc8(&frame[0..2]) != frame[2] {
            return Err(Error::Checksum(ChecksumError::Status));
        }
        Ok(u16::from_be_bytes([frame[0], frame[1]]))
    }
}

/// Validate and decode a raw 6-byte measurement frame.
///
/// Rejects the frame in its entirety if either embedded CRC fails.
pub fn decode_frame(frame: &[u8; 6]) -> Result<Reading> {
    if crc8(&frame[0..2]) != frame[2] {
        return Err(Error::Checksum(ChecksumError::Temperature));
    }
    if crc8(&frame[3..5]) != frame[5] {
        return Err(Error::Checksum(ChecksumError::Humidity));
    }

    let temp_raw = u16::from_be_bytes([frame[0], frame[1]]);
    let hum_raw = u16::from_be_bytes([frame[3], frame[4]]);
    Ok(Reading {
        temperature_c: convert_temperature(temp_raw),
        humidity_pct: convert_humidity(hum_raw),
    })
}

/// `-45 + 175 * raw / 65535`, per the datasheet.
pub fn convert_temperature(raw: u16) -> f32 {
    -45.0 + 175.0 * f32::from(raw) / 65535.0
}

/// `100 * raw / 65535`, clamped to the physical 0–100 % range.
pub fn convert_humidity(raw: u16) -> f32 {
    (100.0 * f32::from(raw) / 65535.0).clamp(0.0, 100.0)
}
