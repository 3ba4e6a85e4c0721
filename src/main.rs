//! Room telemetry node — main entry point.
//!
//! Hexagonal architecture: adapters on the outer ring, pure acquisition
//! logic in the middle.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter   MqttPublisher   LogEventSink          │
//! │  (SensorPort)      (PublishPort)   (EventSink)           │
//! │  EspI2cBus         MonotonicClock  SystemRestart         │
//! │  (BusPort)                         (RestartPort)         │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ─────────────────    │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │         AcquisitionService (pure logic)            │  │
//! │  │  SHT30 decode · motion debounce · light hysteresis │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::{info, warn};

use esp_idf_hal::delay::{Delay, FreeRtos};
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;

use roomsense::adapters::hardware::HardwareAdapter;
use roomsense::adapters::i2c_bus::EspI2cBus;
use roomsense::adapters::log_sink::LogEventSink;
use roomsense::adapters::mqtt::MqttPublisher;
use roomsense::adapters::restart::SystemRestart;
use roomsense::adapters::time::{self, MonotonicClock};
use roomsense::app::ports::RestartPort;
use roomsense::app::service::{AcquisitionService, TickOutcome};
use roomsense::config::NodeConfig;
use roomsense::pins;
use roomsense::sensors::sht30::{Sht30, SHT30_ADDR};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  RoomSense v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = NodeConfig::default();
    info!(
        "Config: room={} cycle={}s motion_timeout={}s light band {:.0}%..{:.0}% (debounce {}ms)",
        config.room,
        config.reading_interval_secs,
        config.motion_timeout_secs,
        config.light_dark_threshold_pct,
        config.light_bright_threshold_pct,
        config.motion_debounce_ms,
    );

    // ── 3. Hardware peripherals ───────────────────────────────
    let peripherals = Peripherals::take().context("peripherals already taken")?;
    let i2c_config = I2cConfig::new().baudrate(Hertz(pins::I2C_FREQ_HZ));
    // Pin numbers come from the pins module; the GPIOs are not shared with
    // any other driver, so the untyped handles are sound.
    let (sda, scl) = unsafe {
        (
            AnyIOPin::new(pins::I2C_SDA_GPIO),
            AnyIOPin::new(pins::I2C_SCL_GPIO),
        )
    };
    let driver = I2cDriver::new(peripherals.i2c0, sda, scl, &i2c_config)
        .context("I2C driver init failed")?;
    let bus = EspI2cBus::new(driver);

    // A missing climate sensor is fatal at boot: this node exists to
    // report climate, so let the supervisor see a clean abort.
    let sht30 = Sht30::new(bus, Delay::new_default(), SHT30_ADDR)
        .context("SHT30 not found on the I2C bus")?;
    let mut hw = HardwareAdapter::new(sht30, pins::PIR_GPIO, pins::LDR_ADC_CHANNEL);
    if let Err(e) = hw.reset_climate_sensor() {
        warn!("SHT30 reset failed ({e}), continuing with power-on state");
    }

    // ── 4. Connectivity ───────────────────────────────────────
    let mut publisher =
        MqttPublisher::connect(&config, time::uptime_secs).context("MQTT connect failed")?;

    // ── 5. Service construction ───────────────────────────────
    let clock = MonotonicClock::new();
    let mut restart = SystemRestart::new();
    let mut sink = LogEventSink::new();
    let loop_sleep_ms = config.loop_sleep_ms;
    let mut app = AcquisitionService::new(config);
    app.start(&mut sink);

    // ── 6. Acquisition loop ───────────────────────────────────
    loop {
        let outcome = app.tick(clock.uptime_ms(), &mut hw, &mut publisher, &mut sink);
        if outcome == TickOutcome::RestartRequired {
            restart.restart();
        }
        FreeRtos::delay_ms(loop_sleep_ms);
    }
}
