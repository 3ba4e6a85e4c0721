//! ESP-IDF I²C bus adapter.
//!
//! Wraps [`esp_idf_hal::i2c::I2cDriver`] behind the [`BusPort`] trait the
//! SHT30 driver consumes. Scanning probes every 7-bit address with an empty
//! write and collects the ones that ACK.

use esp_idf_hal::delay::BLOCK;
use esp_idf_hal::i2c::I2cDriver;
use log::debug;

use crate::app::ports::BusPort;
use crate::error::BusError;

/// First/last valid 7-bit device addresses (below 0x08 is reserved).
const SCAN_FIRST: u8 = 0x08;
const SCAN_LAST: u8 = 0x77;

pub struct EspI2cBus {
    driver: I2cDriver<'static>,
}

impl EspI2cBus {
    pub fn new(driver: I2cDriver<'static>) -> Self {
        Self { driver }
    }
}

impl BusPort for EspI2cBus {
    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), BusError> {
        self.driver
            .write(addr, bytes, BLOCK)
            .map_err(|_| BusError::WriteFailed)
    }

    fn read(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), BusError> {
        self.driver
            .read(addr, buf, BLOCK)
            .map_err(|_| BusError::ReadFailed)
    }

    fn scan(&mut self) -> heapless::Vec<u8, 16> {
        let mut found = heapless::Vec::new();
        for addr in SCAN_FIRST..=SCAN_LAST {
            if self.driver.write(addr, &[], BLOCK).is_ok() {
                debug!("I2C: device at 0x{addr:02X}");
                if found.push(addr).is_err() {
                    break; // bus unexpectedly crowded; keep what we have
                }
            }
        }
        found
    }
}
