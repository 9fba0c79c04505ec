// ccnet-rs/ccnet/src/protocol/checksum.rs

use crate::constants::CRC_POLYNOMIAL;

/// Compute the CCNET CRC-16 over `data`.
///
/// Initial value 0, input processed LSB first: each byte is XORed into the
/// low byte of the register, then eight shift-right steps XOR in the
/// reversed polynomial 0x8408 whenever a one bit falls out. The result is
/// appended to the frame little-endian.
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(0u16, |crc, &b| {
        let mut crc = crc ^ b as u16;
        for _ in 0..8 {
            if crc & 0x0001 != 0 {
                crc = (crc >> 1) ^ CRC_POLYNOMIAL;
            } else {
                crc >>= 1;
            }
        }
        crc
    })
}

/// CRC-16 of the first `count` bytes of `data`. `count` is clamped to the
/// slice length.
pub fn crc16_prefix(data: &[u8], count: usize) -> u16 {
    crc16(&data[..count.min(data.len())])
}
