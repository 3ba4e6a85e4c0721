//! Node configuration parameters.
//!
//! All tunable parameters for a RoomSense node. Values are compiled-in
//! defaults; loading from persistent storage is a host/provisioning concern
//! outside this firmware.

use serde::{Deserialize, Serialize};

/// Core node configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    // --- Identity ---
    /// Room identifier, used by the publish adapter to form topics.
    pub room: heapless::String<16>,
    /// Unique device identifier carried in payloads.
    pub device_name: heapless::String<32>,
    /// MQTT broker URL.
    pub broker_url: heapless::String<64>,

    // --- Timing ---
    /// Seconds between full sensor cycles (climate + light).
    pub reading_interval_secs: u32,
    /// Inter-iteration sleep (milliseconds). Bounds CPU usage without
    /// starving motion responsiveness.
    pub loop_sleep_ms: u32,

    // --- Motion ---
    /// Quiet time (seconds) before presence clears back to idle.
    pub motion_timeout_secs: u32,
    /// PIR hardware debounce window (milliseconds). Informational: the PIR
    /// module filters the raw line itself and re-detection after clearing
    /// is immediate.
    pub motion_debounce_ms: u32,

    // --- Light ---
    /// Below this percentage the room classifies as dark.
    pub light_dark_threshold_pct: f32,
    /// Above this percentage the room classifies as bright.
    pub light_bright_threshold_pct: f32,
    /// Maximum seconds between light publishes when the state is unchanged.
    pub light_heartbeat_secs: u32,

    // --- Fault tolerance ---
    /// Consecutive failed operations before a full restart is requested.
    pub max_consecutive_errors: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            // Identity
            room: heapless::String::try_from("1").unwrap(),
            device_name: heapless::String::try_from("roomsense-room1").unwrap(),
            broker_url: heapless::String::try_from("mqtt://192.168.1.100:1883").unwrap(),

            // Timing
            reading_interval_secs: 5,
            loop_sleep_ms: 100,

            // Motion
            motion_timeout_secs: 30,
            motion_debounce_ms: 200,

            // Light
            light_dark_threshold_pct: 10.0,
            light_bright_threshold_pct: 80.0,
            light_heartbeat_secs: 300,

            // Fault tolerance
            max_consecutive_errors: 5,
        }
    }
}

impl NodeConfig {
    /// Reading interval in milliseconds.
    pub fn reading_interval_ms(&self) -> u64 {
        u64::from(self.reading_interval_secs) * 1000
    }

    /// Motion timeout in milliseconds.
    pub fn motion_timeout_ms(&self) -> u64 {
        u64::from(self.motion_timeout_secs) * 1000
    }

    /// Light heartbeat in milliseconds.
    pub fn light_heartbeat_ms(&self) -> u64 {
        u64::from(self.light_heartbeat_secs) * 1000
    }
}
