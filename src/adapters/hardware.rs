//! Hardware adapter — bridges the SHT30 driver, PIR line, and LDR channel
//! to the [`SensorPort`] trait.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: the PIR line is a GPIO level read and the LDR is an ADC1
//! oneshot read. On host/test builds both come from static atomics so
//! integration tests can inject values.

#[cfg(not(feature = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use embedded_hal::delay::DelayNs;

use crate::app::ports::{BusPort, SensorPort};
use crate::error::Error;
use crate::sensors::sht30::{Reading, Repeatability, Sht30};

#[cfg(not(feature = "espidf"))]
static SIM_MOTION: AtomicBool = AtomicBool::new(false);
#[cfg(not(feature = "espidf"))]
static SIM_LIGHT_RAW: AtomicU16 = AtomicU16::new(0x8000);

/// Inject a PIR line level for host-side tests.
#[cfg(not(feature = "espidf"))]
pub fn sim_set_motion(detected: bool) {
    SIM_MOTION.store(detected, Ordering::Relaxed);
}

/// Inject a raw LDR count for host-side tests.
#[cfg(not(feature = "espidf"))]
pub fn sim_set_light_raw(raw: u16) {
    SIM_LIGHT_RAW.store(raw, Ordering::Relaxed);
}

/// Concrete adapter combining all sensor hardware behind [`SensorPort`].
pub struct HardwareAdapter<B, D> {
    sht30: Sht30<B, D>,
    repeatability: Repeatability,
    pir_gpio: i32,
    ldr_adc_channel: u32,
}

impl<B: BusPort, D: DelayNs> HardwareAdapter<B, D> {
    pub fn new(sht30: Sht30<B, D>, pir_gpio: i32, ldr_adc_channel: u32) -> Self {
        Self {
            sht30,
            repeatability: Repeatability::High,
            pir_gpio,
            ldr_adc_channel,
        }
    }

    /// GPIO pin the PIR output is wired to.
    pub fn pir_gpio(&self) -> i32 {
        self.pir_gpio
    }

    /// Soft-reset the climate sensor and probe its status register.
    pub fn reset_climate_sensor(&mut self) -> Result<(), Error> {
        self.sht30.soft_reset()?;
        let status = self.sht30.read_status()?;
        log::info!("SHT30: status after reset = 0x{status:04X}");
        Ok(())
    }

    #[cfg(feature = "espidf")]
    fn read_pir_level(&self) -> bool {
        unsafe { esp_idf_svc::sys::gpio_get_level(self.pir_gpio) != 0 }
    }

    #[cfg(not(feature = "espidf"))]
    fn read_pir_level(&self) -> bool {
        SIM_MOTION.load(Ordering::Relaxed)
    }

    #[cfg(feature = "espidf")]
    fn read_ldr_raw(&mut self) -> Result<u16, Error> {
        let raw = unsafe { esp_idf_svc::sys::adc1_get_raw(self.ldr_adc_channel) };
        if raw < 0 {
            return Err(Error::Bus(crate::error::BusError::ReadFailed));
        }
        // 12-bit oneshot result scaled up to the 16-bit raw domain.
        Ok(((raw as u32) << 4) as u16)
    }

    #[cfg(not(feature = "espidf"))]
    fn read_ldr_raw(&mut self) -> Result<u16, Error> {
        let _ = self.ldr_adc_channel;
        Ok(SIM_LIGHT_RAW.load(Ordering::Relaxed))
    }
}

impl<B: BusPort, D: DelayNs> SensorPort for HardwareAdapter<B, D> {
    fn measure_climate(&mut self) -> Result<Reading, Error> {
        self.sht30.measure(self.repeatability)
    }

    fn sample_motion(&mut self) -> bool {
        self.read_pir_level()
    }

    fn read_light_raw(&mut self) -> Result<u16, Error> {
        self.read_ldr_raw()
    }
}
