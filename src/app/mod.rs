//! Application core — pure domain logic, zero I/O.
//!
//! This module holds the acquisition loop business rules: motion edge
//! handling, the fixed-cadence sensor cycle, publish accounting, and the
//! consecutive-error restart decision. All interaction with hardware and
//! the broker happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
