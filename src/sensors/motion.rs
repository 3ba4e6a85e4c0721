//! Motion presence state machine over a PIR line.
//!
//! The PIR module debounces the raw line in hardware, so a `true` sample
//! while Idle declares presence immediately. Clearing is the slow side: the
//! state stays Active through a grace window and falls back to Idle only
//! once the line has been quiet for the configured timeout. Re-detection
//! after clearing is immediate.
//!
//! The monitor tracks a separate last-published state so the acquisition
//! loop emits at most one event per actual transition, independent of how
//! often it samples.

use log::info;

/// Externally visible presence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    Active,
}

impl MotionState {
    /// Wire-friendly lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Active => "active",
        }
    }
}

/// Debounce-on-entry / timeout-on-exit presence monitor.
pub struct MotionMonitor {
    state: MotionState,
    /// Timestamp of the most recent `true` sample.
    last_seen_ms: u64,
    /// State last successfully emitted; `None` until the first publish.
    published: Option<MotionState>,
    timeout_ms: u64,
}

impl MotionMonitor {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            state: MotionState::Idle,
            last_seen_ms: 0,
            published: None,
            timeout_ms,
        }
    }

    /// Feed one raw line sample at time `now_ms`. Returns the state after
    /// the transition function has run.
    pub fn sample(&mut self, now_ms: u64, detected: bool) -> MotionState {
        match (self.state, detected) {
            (MotionState::Idle, true) => {
                self.state = MotionState::Active;
                self.last_seen_ms = now_ms;
                info!("Motion: detected");
            }
            (MotionState::Active, true) => {
                // Presence continues — refresh the grace window.
                self.last_seen_ms = now_ms;
            }
            (MotionState::Active, false) => {
                if now_ms.saturating_sub(self.last_seen_ms) >= self.timeout_ms {
                    self.state = MotionState::Idle;
                    info!("Motion: cleared after {} ms quiet", self.timeout_ms);
                }
            }
            (MotionState::Idle, false) => {}
        }
        self.state
    }

    /// Current state.
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// True when the visible state differs from what was last emitted.
    pub fn needs_publish(&self) -> bool {
        self.published != Some(self.state)
    }

    /// Record a successful emit of the current state.
    pub fn mark_published(&mut self) {
        self.published = Some(self.state);
    }
}
