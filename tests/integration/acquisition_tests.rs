//! End-to-end acquisition loop scenarios against mock hardware.
//!
//! Each test drives [`AcquisitionService::tick`] with explicit monotonic
//! timestamps, so the cadence, motion timeout, and heartbeat behaviour are
//! all deterministic.

use roomsense::app::events::AppEvent;
use roomsense::app::service::{AcquisitionService, TickOutcome};
use roomsense::config::NodeConfig;
use roomsense::sensors::motion::MotionState;

use crate::mock_hw::{MockPublisher, MockSensors, RecordingSink};

/// Tightened timings so scenarios stay readable in milliseconds.
fn test_config() -> NodeConfig {
    let mut c = NodeConfig::default();
    c.reading_interval_secs = 5;
    c.motion_timeout_secs = 2;
    c.light_heartbeat_secs = 10;
    c.max_consecutive_errors = 5;
    c
}

fn setup() -> (AcquisitionService, MockSensors, MockPublisher, RecordingSink) {
    (
        AcquisitionService::new(test_config()),
        MockSensors::new(),
        MockPublisher::new(),
        RecordingSink::new(),
    )
}

// ── Motion ────────────────────────────────────────────────────

#[test]
fn motion_publishes_exactly_once_per_transition() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();

    // Boot: baseline idle goes out once.
    let _ = app.tick(0, &mut hw, &mut publisher, &mut sink);

    // Rising edge.
    hw.motion_level = true;
    let _ = app.tick(100, &mut hw, &mut publisher, &mut sink);

    // Line drops; state holds through the 2 s grace window.
    hw.motion_level = false;
    let _ = app.tick(200, &mut hw, &mut publisher, &mut sink);
    let _ = app.tick(1_900, &mut hw, &mut publisher, &mut sink);

    // Quiet long enough: falls back to idle.
    let _ = app.tick(2_200, &mut hw, &mut publisher, &mut sink);
    let _ = app.tick(2_300, &mut hw, &mut publisher, &mut sink);

    assert_eq!(
        publisher.motion_history(),
        vec![MotionState::Idle, MotionState::Active, MotionState::Idle],
        "one publish per actual transition, nothing for repeat samples"
    );
}

#[test]
fn failed_motion_publish_is_retried_next_tick() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();
    hw.motion_level = true;

    publisher.fail_motion = true;
    let _ = app.tick(0, &mut hw, &mut publisher, &mut sink);
    assert!(publisher.motion_history().is_empty());

    publisher.fail_motion = false;
    let _ = app.tick(100, &mut hw, &mut publisher, &mut sink);
    assert_eq!(publisher.motion_history(), vec![MotionState::Active]);
}

// ── Cadence ───────────────────────────────────────────────────

#[test]
fn sensor_cycle_runs_on_the_reading_interval() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();

    let _ = app.tick(0, &mut hw, &mut publisher, &mut sink);
    let _ = app.tick(100, &mut hw, &mut publisher, &mut sink);
    let _ = app.tick(4_900, &mut hw, &mut publisher, &mut sink);
    assert_eq!(hw.climate_reads, 1, "interval not yet elapsed");

    let _ = app.tick(5_000, &mut hw, &mut publisher, &mut sink);
    assert_eq!(hw.climate_reads, 2);
    assert_eq!(publisher.climate_count(), 2);
}

#[test]
fn failing_sensor_does_not_tighten_the_cadence() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();
    hw.fail_climate_bus();

    let _ = app.tick(0, &mut hw, &mut publisher, &mut sink);
    // Immediate follow-up ticks must not re-run the cycle.
    let _ = app.tick(100, &mut hw, &mut publisher, &mut sink);
    let _ = app.tick(200, &mut hw, &mut publisher, &mut sink);
    assert_eq!(hw.climate_reads, 1);
    assert_eq!(app.consecutive_errors(), 1);

    let _ = app.tick(5_000, &mut hw, &mut publisher, &mut sink);
    assert_eq!(hw.climate_reads, 2);
    assert_eq!(app.consecutive_errors(), 2);
}

// ── Error supervision ─────────────────────────────────────────

#[test]
fn restart_requested_exactly_at_the_error_ceiling() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();
    hw.fail_climate_bus();

    // Four failing cycles: still nominal.
    for i in 0..4u64 {
        let outcome = app.tick(i * 5_000, &mut hw, &mut publisher, &mut sink);
        assert_eq!(outcome, TickOutcome::Nominal, "cycle {i} below the ceiling");
    }
    assert_eq!(app.consecutive_errors(), 4);

    // Fifth consecutive failure reaches the ceiling.
    let outcome = app.tick(20_000, &mut hw, &mut publisher, &mut sink);
    assert_eq!(outcome, TickOutcome::RestartRequired);
    assert_eq!(sink.restart_requests(), 1);

    // The signal latches but the event is not duplicated.
    let outcome = app.tick(20_100, &mut hw, &mut publisher, &mut sink);
    assert_eq!(outcome, TickOutcome::RestartRequired);
    assert_eq!(sink.restart_requests(), 1);
}

#[test]
fn clean_cycle_resets_the_error_streak() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();
    hw.fail_climate_bus();

    for i in 0..4u64 {
        let _ = app.tick(i * 5_000, &mut hw, &mut publisher, &mut sink);
    }
    assert_eq!(app.consecutive_errors(), 4);

    // Sensor recovers one cycle before the ceiling.
    hw.restore_climate();
    let outcome = app.tick(20_000, &mut hw, &mut publisher, &mut sink);
    assert_eq!(outcome, TickOutcome::Nominal);
    assert_eq!(app.consecutive_errors(), 0, "full clean cycle clears the streak");
}

#[test]
fn checksum_failure_feeds_the_error_streak() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();
    hw.fail_climate_checksum();

    let _ = app.tick(0, &mut hw, &mut publisher, &mut sink);
    assert_eq!(app.consecutive_errors(), 1);
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::SensorFailed(_))),
        "checksum rejection surfaces as a sensor failure event"
    );
    assert_eq!(publisher.climate_count(), 0, "rejected frame never published");
}

#[test]
fn partial_publish_failure_blocks_the_streak_reset() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();

    publisher.fail_light = true;
    let _ = app.tick(0, &mut hw, &mut publisher, &mut sink);
    assert_eq!(publisher.climate_count(), 1, "climate still goes out");
    assert_eq!(
        app.consecutive_errors(),
        1,
        "a cycle with any failure must not reset the streak"
    );

    publisher.fail_light = false;
    let _ = app.tick(5_000, &mut hw, &mut publisher, &mut sink);
    assert_eq!(app.consecutive_errors(), 0);
}

// ── Light policy ──────────────────────────────────────────────

#[test]
fn unchanged_light_republishes_on_the_heartbeat() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();
    hw.set_light_percent(50.0);

    let _ = app.tick(0, &mut hw, &mut publisher, &mut sink);
    assert_eq!(publisher.light_count(), 1);

    // Unchanged within the 10 s heartbeat: suppressed.
    let _ = app.tick(5_000, &mut hw, &mut publisher, &mut sink);
    assert_eq!(publisher.light_count(), 1);

    // Heartbeat elapsed: republished even though nothing changed.
    let _ = app.tick(10_000, &mut hw, &mut publisher, &mut sink);
    assert_eq!(publisher.light_count(), 2);
}

#[test]
fn light_state_change_publishes_immediately() {
    let (mut app, mut hw, mut publisher, mut sink) = setup();
    hw.set_light_percent(50.0);
    let _ = app.tick(0, &mut hw, &mut publisher, &mut sink);

    hw.set_light_percent(5.0); // crosses into dark
    let _ = app.tick(5_000, &mut hw, &mut publisher, &mut sink);
    assert_eq!(publisher.light_count(), 2);
}
