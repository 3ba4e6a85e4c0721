//! GPIO / peripheral pin assignments for the room node board.
//!
//! Single source of truth: every adapter references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// I²C bus (SHT30 climate sensor)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 4;
pub const I2C_SCL_GPIO: i32 = 5;
/// I²C bus clock. The SHT30 supports up to 1 MHz; 100 kHz keeps long wire
/// runs reliable.
pub const I2C_FREQ_HZ: u32 = 100_000;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// HC-SR501 PIR motion sensor output. HIGH = motion detected.
pub const PIR_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// LDR photoresistor via voltage divider.
/// ADC1 channel 6 (GPIO 34 on the classic ESP32).
pub const LDR_ADC_CHANNEL: u32 = 6;
