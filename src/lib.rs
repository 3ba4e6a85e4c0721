//! Room telemetry node library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by the `espidf`
//! feature within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod sensors;
pub mod supervisor;

pub mod error;
pub mod pins;

// The adapters compile on both targets; the hardware-backed paths inside
// are guarded by the `espidf` feature.
pub mod adapters;
