//! Unified error types for the RoomSense firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! acquisition loop's failure accounting uniform. All variants are `Copy`
//! so they can be passed through the error supervisor without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Transport-level I²C failure.
    Bus(BusError),
    /// A sensor frame failed CRC validation.
    Checksum(ChecksumError),
    /// The sensor did not answer on the bus at construction time.
    /// Fatal to startup — the surrounding system must restart the process.
    DeviceNotFound { addr: u8 },
    /// The messaging layer rejected a publish attempt.
    Publish(PublishError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus: {e}"),
            Self::Checksum(e) => write!(f, "checksum: {e}"),
            Self::DeviceNotFound { addr } => {
                write!(f, "no sensor at address 0x{addr:02X}")
            }
            Self::Publish(e) => write!(f, "publish: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Bus errors
// ---------------------------------------------------------------------------

/// I²C transport failures. Never silently swallowed by the driver — the
/// acquisition loop decides whether the failure counts toward a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// A command write was not acknowledged or timed out.
    WriteFailed,
    /// A data read was not acknowledged or returned short.
    ReadFailed,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed => write!(f, "write failed"),
            Self::ReadFailed => write!(f, "read failed"),
        }
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Self::Bus(e)
    }
}

// ---------------------------------------------------------------------------
// Checksum errors
// ---------------------------------------------------------------------------

/// Which protected quantity inside a sensor frame failed its CRC.
/// The whole frame is rejected either way — no partial acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumError {
    Temperature,
    Humidity,
    Status,
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature word"),
            Self::Humidity => write!(f, "humidity word"),
            Self::Status => write!(f, "status register"),
        }
    }
}

impl From<ChecksumError> for Error {
    fn from(e: ChecksumError) -> Self {
        Self::Checksum(e)
    }
}

// ---------------------------------------------------------------------------
// Publish errors
// ---------------------------------------------------------------------------

/// Messaging layer failures. Always soft: one attempt, then the error
/// supervisor takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishError {
    /// No live broker session.
    NotConnected,
    /// The client accepted the message but transmission failed.
    TransmitFailed,
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "not connected"),
            Self::TransmitFailed => write!(f, "transmit failed"),
        }
    }
}

impl From<PublishError> for Error {
    fn from(e: PublishError) -> Self {
        Self::Publish(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
