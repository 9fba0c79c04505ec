//! Hexadecimal helpers used for frame tracing and display.
//!
//! Tracing uses the spaced form; the dashed uppercase form is how the
//! validator's asset number is shown to operators.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0x02, 0x03]` -> `"02 03"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, ' ', false)
}

/// Convert a byte slice to uppercase hex joined by dashes.
///
/// Example: `&[0x0a, 0xff]` -> `"0A-FF"`
pub fn bytes_to_hex_dashed(bytes: &[u8]) -> String {
    join_hex(bytes, '-', true)
}

fn join_hex(bytes: &[u8], sep: char, upper: bool) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(sep);
        }
        let _ = if upper {
            write!(&mut s, "{:02X}", b)
        } else {
            write!(&mut s, "{:02x}", b)
        };
    }
    s
}
