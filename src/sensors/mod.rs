//! Sensor subsystem — the SHT30 climate driver and the two derived-state
//! machines (motion presence, light classification).
//!
//! Everything here is hardware-agnostic: the SHT30 driver talks through the
//! [`BusPort`](crate::app::ports::BusPort) trait, and the motion/light state
//! machines consume raw samples handed in by the acquisition loop.

pub mod crc;
pub mod light;
pub mod motion;
pub mod sht30;
