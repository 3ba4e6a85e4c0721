//! CRC-8 frame checksum (polynomial 0x31, init 0xFF).
//!
//! Every 16-bit quantity the SHT30 returns is followed by one checksum byte
//! computed with this polynomial. The same routine validates the status
//! register frame.

/// Compute the CRC-8 of `data`.
///
/// Register starts at 0xFF; each byte is XORed in, then shifted out bit by
/// bit against polynomial 0x31. Pure and total — there is no failure mode.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x31
            } else {
                crc << 1
            };
        }
    }
    crc
}
