//! Adapters — the outer ring.
//!
//! Each adapter implements one port trait against a concrete backend:
//! ESP-IDF peripherals and the MQTT client on device builds, simulation
//! hooks on the host. This is the only layer that touches hardware or the
//! network.

pub mod hardware;
pub mod log_sink;
pub mod restart;
pub mod time;

#[cfg(feature = "espidf")]
pub mod i2c_bus;
#[cfg(feature = "espidf")]
pub mod mqtt;
