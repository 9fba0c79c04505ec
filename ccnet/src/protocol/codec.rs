// ccnet-rs/ccnet/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Reply;

/// Encode a command and its payload into a full wire frame.
///
/// ACK and NAK never carry a payload; any data passed with them is
/// dropped.
pub fn encode_command_frame(cmd: Command, data: &[u8]) -> Result<Vec<u8>> {
    let data: &[u8] = if cmd.expects_reply() { data } else { &[] };
    Frame::encode(cmd.code(), data)
}

/// Decode a full wire frame into a reply.
pub fn decode_reply_frame(frame: &[u8]) -> Result<Reply> {
    Frame::decode(frame)
}

/// The fixed six-byte ACK frame.
pub fn ack_frame() -> Vec<u8> {
    control_frame(Command::Ack)
}

/// The fixed six-byte NAK frame.
pub fn nak_frame() -> Vec<u8> {
    control_frame(Command::Nak)
}

fn control_frame(cmd: Command) -> Vec<u8> {
    let mut out = vec![
        crate::constants::SYNC,
        crate::constants::BILL_VALIDATOR_ADDR,
        crate::constants::FRAME_OVERHEAD as u8,
        cmd.code(),
    ];
    let crc = super::checksum::crc16(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    out
}
