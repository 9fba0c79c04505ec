// fixtures.rs: wire frames as captured from a validator

pub const ACK: [u8; 6] = [0x02, 0x03, 0x06, 0x00, 0xc2, 0x82];
pub const NAK: [u8; 6] = [0x02, 0x03, 0x06, 0xff, 0xba, 0x8d];

pub const POLL: [u8; 6] = [0x02, 0x03, 0x06, 0x33, 0xda, 0x81];
pub const RESET: [u8; 6] = [0x02, 0x03, 0x06, 0x30, 0x41, 0xb3];
pub const GET_STATUS: [u8; 6] = [0x02, 0x03, 0x06, 0x31, 0xc8, 0xa2];
pub const IDENTIFICATION: [u8; 6] = [0x02, 0x03, 0x06, 0x37, 0xfe, 0xc7];
pub const STACK: [u8; 6] = [0x02, 0x03, 0x06, 0x35, 0xec, 0xe4];
pub const RETURN: [u8; 6] = [0x02, 0x03, 0x06, 0x36, 0x77, 0xd6];
pub const HOLD: [u8; 6] = [0x02, 0x03, 0x06, 0x38, 0x09, 0x3f];
pub const ENABLE_ALL: [u8; 12] = [
    0x02, 0x03, 0x0c, 0x34, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00, 0x08, 0xec,
];
pub const DISABLE: [u8; 12] = [
    0x02, 0x03, 0x0c, 0x34, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x17, 0x0c,
];
pub const SET_SECURITY_NONE: [u8; 9] = [0x02, 0x03, 0x09, 0x32, 0x00, 0x00, 0x00, 0x26, 0x1f];

pub const IDLING: [u8; 6] = [0x02, 0x03, 0x06, 0x14, 0x67, 0xd4];
pub const INITIALIZE: [u8; 6] = [0x02, 0x03, 0x06, 0x13, 0xd8, 0xa0];
pub const CASSETTE_OUT: [u8; 6] = [0x02, 0x03, 0x06, 0x42, 0xd4, 0xe3];
pub const ESCROW_100: [u8; 7] = [0x02, 0x03, 0x07, 0x80, 0x04, 0xa8, 0x75];
pub const STACKED_100: [u8; 7] = [0x02, 0x03, 0x07, 0x81, 0x04, 0x70, 0x6c];
pub const STACKED_500: [u8; 7] = [0x02, 0x03, 0x07, 0x81, 0x05, 0xf9, 0x7d];
pub const STACKED_1000: [u8; 7] = [0x02, 0x03, 0x07, 0x81, 0x06, 0x62, 0x4f];
pub const REJECT_INSERTION: [u8; 7] = [0x02, 0x03, 0x07, 0x1c, 0x60, 0x77, 0xe0];
pub const FAILURE_STACK_MOTOR: [u8; 7] = [0x02, 0x03, 0x07, 0x47, 0x50, 0xab, 0xe6];

/// IDENTIFICATION reply body as documented: code byte first.
pub fn identification_body() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(b"SM-RU1353      ");
    body.extend_from_slice(b"41A123456   ");
    body.extend_from_slice(&[0x00, 0x00, 0x00, 0x12, 0x34, 0x56, 0x78]);
    body
}

/// Split a documented reply body into (code, data) for `push_reply`.
pub fn split_body(body: &[u8]) -> (u8, &[u8]) {
    (body[0], &body[1..])
}
