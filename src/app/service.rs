//! Acquisition service — the domain core.
//!
//! [`AcquisitionService`] owns the motion monitor, the light tracker, and
//! the error supervisor, and runs one repeating cycle:
//!
//! ```text
//!  SensorPort ──▶ ┌─────────────────────────────┐ ──▶ PublishPort
//!                 │     AcquisitionService      │
//!                 │  motion · light · errors    │ ──▶ EventSink
//!                 └─────────────────────────────┘
//! ```
//!
//! Motion is sampled on every tick so edges are reacted to quickly; the
//! climate + light cycle runs at the configured reading interval. Every
//! failed read or publish feeds the error supervisor, and once the streak
//! reaches the ceiling the tick reports [`TickOutcome::RestartRequired`] —
//! the embedding application performs the actual restart.

use log::warn;

use crate::config::NodeConfig;
use crate::sensors::light::{LightReport, LightTracker, classify, percent_from_raw};
use crate::sensors::motion::MotionMonitor;
use crate::supervisor::ErrorSupervisor;

use super::events::AppEvent;
use super::ports::{EventSink, PublishPort, SensorPort};

/// What the host loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TickOutcome {
    /// Keep looping.
    Nominal,
    /// The error ceiling was reached; restart the device.
    RestartRequired,
}

/// The acquisition loop orchestrator.
pub struct AcquisitionService {
    config: NodeConfig,
    motion: MotionMonitor,
    light: LightTracker,
    errors: ErrorSupervisor,
    /// Start of the most recent full sensor cycle. Recorded regardless of
    /// the cycle's outcome so the cadence never drifts on error.
    last_cycle_ms: Option<u64>,
    restart_announced: bool,
}

impl AcquisitionService {
    pub fn new(config: NodeConfig) -> Self {
        let motion = MotionMonitor::new(config.motion_timeout_ms());
        let light = LightTracker::new(config.light_heartbeat_ms());
        let errors = ErrorSupervisor::new(config.max_consecutive_errors);
        Self {
            config,
            motion,
            light,
            errors,
            last_cycle_ms: None,
            restart_announced: false,
        }
    }

    /// Announce startup through the event sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        log::info!(
            "Acquisition started: room {}, cycle every {}s, error ceiling {}",
            self.config.room,
            self.config.reading_interval_secs,
            self.config.max_consecutive_errors
        );
    }

    /// Run one loop iteration at monotonic time `now_ms`.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut impl SensorPort,
        publisher: &mut impl PublishPort,
        sink: &mut impl EventSink,
    ) -> TickOutcome {
        // 1. Motion: sampled every iteration, published only on edges.
        let detected = hw.sample_motion();
        let state = self.motion.sample(now_ms, detected);
        if self.motion.needs_publish() {
            match publisher.publish_motion(state) {
                Ok(()) => {
                    self.motion.mark_published();
                    sink.emit(&AppEvent::MotionPublished(state));
                }
                Err(e) => {
                    self.errors.record_failure();
                    sink.emit(&AppEvent::PublishFailed {
                        what: "motion",
                        error: e,
                    });
                }
            }
        }

        // 2. Full sensor cycle at the reading cadence.
        let due = match self.last_cycle_ms {
            None => true,
            Some(t) => now_ms.saturating_sub(t) >= self.config.reading_interval_ms(),
        };
        if due {
            // Stamp first: a failing sensor must not tighten the cadence
            // into a hot retry loop.
            self.last_cycle_ms = Some(now_ms);
            self.run_sensor_cycle(now_ms, hw, publisher, sink);
        }

        // 3. Restart decision.
        if self.errors.ceiling_reached() {
            if !self.restart_announced {
                self.restart_announced = true;
                sink.emit(&AppEvent::RestartRequested {
                    consecutive_errors: self.errors.count(),
                });
            }
            return TickOutcome::RestartRequired;
        }
        TickOutcome::Nominal
    }

    /// One atomic climate + light cycle.
    ///
    /// The error streak resets only when the cycle saw at least one
    /// successful publish and no failures of any kind.
    fn run_sensor_cycle(
        &mut self,
        now_ms: u64,
        hw: &mut impl SensorPort,
        publisher: &mut impl PublishPort,
        sink: &mut impl EventSink,
    ) {
        let reading = match hw.measure_climate() {
            Ok(r) => r,
            Err(e) => {
                warn!("Climate measurement failed: {e}");
                self.errors.record_failure();
                sink.emit(&AppEvent::SensorFailed(e));
                return; // no data for this cycle
            }
        };

        let mut failures: u32 = 0;
        let mut successes: u32 = 0;

        match publisher.publish_climate(&reading) {
            Ok(()) => {
                successes += 1;
                sink.emit(&AppEvent::ClimatePublished(reading));
            }
            Err(e) => {
                failures += 1;
                self.errors.record_failure();
                sink.emit(&AppEvent::PublishFailed {
                    what: "climate",
                    error: e,
                });
            }
        }

        match hw.read_light_raw() {
            Ok(raw) => {
                let percent = percent_from_raw(raw);
                let state = classify(
                    percent,
                    self.config.light_dark_threshold_pct,
                    self.config.light_bright_threshold_pct,
                );
                let report = LightReport { percent, state };
                if self.light.should_publish(now_ms, state) {
                    match publisher.publish_light(&report) {
                        Ok(()) => {
                            self.light.mark_published(now_ms, state);
                            successes += 1;
                            sink.emit(&AppEvent::LightPublished(report));
                        }
                        Err(e) => {
                            failures += 1;
                            self.errors.record_failure();
                            sink.emit(&AppEvent::PublishFailed {
                                what: "light",
                                error: e,
                            });
                        }
                    }
                }
            }
            Err(e) => {
                warn!("Light read failed: {e}");
                failures += 1;
                self.errors.record_failure();
                sink.emit(&AppEvent::SensorFailed(e));
            }
        }

        if failures == 0 && successes > 0 {
            self.errors.reset();
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current consecutive-error streak.
    pub fn consecutive_errors(&self) -> u32 {
        self.errors.count()
    }

    /// Current motion state.
    pub fn motion_state(&self) -> crate::sensors::motion::MotionState {
        self.motion.state()
    }
}
