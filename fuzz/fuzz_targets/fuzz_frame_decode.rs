//! Fuzz target: `decode_frame`
//!
//! Slides a 6-byte window over arbitrary input and asserts the decoder
//! never panics and that any accepted frame decodes to physically sane
//! values (clamped humidity, datasheet-range temperature).
//!
//! cargo fuzz run fuzz_frame_decode

#![no_main]

use libfuzzer_sys::fuzz_target;
use roomsense::sensors::sht30::decode_frame;

fuzz_target!(|data: &[u8]| {
    for window in data.windows(6) {
        let mut frame = [0u8; 6];
        frame.copy_from_slice(window);

        if let Ok(reading) = decode_frame(&frame) {
            assert!(
                (0.0..=100.0).contains(&reading.humidity_pct),
                "humidity must be clamped"
            );
            assert!(
                (-45.0..=130.0).contains(&reading.temperature_c),
                "temperature outside datasheet range"
            );
        }
    }
});
