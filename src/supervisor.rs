//! Consecutive-error supervisor.
//!
//! Counts failed publish-or-read operations across acquisition cycles. Any
//! fully successful cycle resets the streak; once the streak reaches the
//! configured ceiling, local recovery is abandoned and the acquisition loop
//! requests a full device restart.
//!
//! The counter lives for one run of the loop and is never persisted — a
//! restart wipes it along with everything else.

use log::{error, info, warn};

/// Tracks the consecutive-failure streak against a restart ceiling.
pub struct ErrorSupervisor {
    consecutive: u32,
    ceiling: u32,
}

impl ErrorSupervisor {
    pub fn new(ceiling: u32) -> Self {
        Self {
            consecutive: 0,
            ceiling,
        }
    }

    /// Record one failed operation. Returns the updated streak.
    pub fn record_failure(&mut self) -> u32 {
        self.consecutive = self.consecutive.saturating_add(1);
        if self.ceiling_reached() {
            error!(
                "Error streak hit ceiling ({}/{})",
                self.consecutive, self.ceiling
            );
        } else {
            warn!(
                "Consecutive errors: {}/{}",
                self.consecutive, self.ceiling
            );
        }
        self.consecutive
    }

    /// Clear the streak after a fully successful cycle.
    pub fn reset(&mut self) {
        if self.consecutive > 0 {
            info!("Error streak cleared (was {})", self.consecutive);
        }
        self.consecutive = 0;
    }

    /// Current streak length.
    pub fn count(&self) -> u32 {
        self.consecutive
    }

    /// True once the streak has reached the restart ceiling.
    pub fn ceiling_reached(&self) -> bool {
        self.consecutive >= self.ceiling
    }
}
