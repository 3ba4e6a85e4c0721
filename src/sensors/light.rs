//! Ambient light classification with hysteresis.
//!
//! The raw 16-bit LDR count converts linearly to a percentage, which a pair
//! of thresholds bands into Dark / Normal / Bright. The gap between the low
//! and high thresholds is the hysteresis band that keeps the classification
//! from flapping near either boundary.
//!
//! [`LightTracker`] implements the loop-level emission policy: publish when
//! the classification changes, or when the heartbeat interval has elapsed
//! since the last publish — whichever comes first. The heartbeat bounds
//! staleness on the broker even when nothing changes.

/// Banded light state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Dark,
    Normal,
    Bright,
}

impl LightState {
    /// Wire-friendly lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Normal => "normal",
            Self::Bright => "bright",
        }
    }
}

/// One classified light sample, as handed to the publish port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightReport {
    pub percent: f32,
    pub state: LightState,
}

/// Classify a percentage against the two thresholds.
///
/// The thresholds themselves classify as Normal. Values outside 0–100 are
/// accepted as-is; clamping, if any, belongs to the raw conversion.
pub fn classify(percent: f32, low_threshold: f32, high_threshold: f32) -> LightState {
    debug_assert!(low_threshold < high_threshold);
    if percent < low_threshold {
        LightState::Dark
    } else if percent > high_threshold {
        LightState::Bright
    } else {
        LightState::Normal
    }
}

/// Linear conversion from a raw 16-bit ADC count to a percentage.
pub fn percent_from_raw(raw: u16) -> f32 {
    f32::from(raw) / 65535.0 * 100.0
}

/// Tracks the last published classification and publish time for the
/// change-or-heartbeat emission policy.
pub struct LightTracker {
    published: Option<LightState>,
    last_publish_ms: u64,
    heartbeat_ms: u64,
}

impl LightTracker {
    pub fn new(heartbeat_ms: u64) -> Self {
        Self {
            published: None,
            last_publish_ms: 0,
            heartbeat_ms,
        }
    }

    /// Whether `state` should go out now.
    pub fn should_publish(&self, now_ms: u64, state: LightState) -> bool {
        match self.published {
            None => true,
            Some(prev) => {
                prev != state
                    || now_ms.saturating_sub(self.last_publish_ms) >= self.heartbeat_ms
            }
        }
    }

    /// Record a successful publish. A failed attempt is not recorded, so the
    /// next cycle retries.
    pub fn mark_published(&mut self, now_ms: u64, state: LightState) {
        self.published = Some(state);
        self.last_publish_ms = now_ms;
    }
}
