//! CRC-16/CCITT-FALSE checksum used by the `63` field.
//!
//! Polynomial 0x1021, initial value 0xFFFF, no reflection, no final XOR.

pub const POLYNOMIAL: u16 = 0x1021;
pub const INITIAL: u16 = 0xFFFF;

/// Calculate the CRC over raw bytes.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    data.iter().fold(INITIAL, |crc, byte| update(crc, *byte))
}

/// Checksum of `data` as four uppercase hex digits, ready to be used as the
/// value of the `63` field.
///
/// Each character contributes its code point truncated to 8 bits.
pub fn crc16(data: &str) -> String {
    let crc = data.chars().fold(INITIAL, |crc, c| update(crc, c as u32 as u8));
    format!("{crc:04X}")
}

fn update(mut crc: u16, byte: u8) -> u16 {
    crc ^= u16::from(byte) << 8;
    for _ in 0..8 {
        if crc & 0x8000 != 0 {
            crc = (crc << 1) ^ POLYNOMIAL;
        } else {
            crc <<= 1;
        }
    }
    crc
}
