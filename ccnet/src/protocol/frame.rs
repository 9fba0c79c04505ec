// ccnet-rs/ccnet/src/protocol/frame.rs

use crate::constants::{
    ACK_CODE, BILL_VALIDATOR_ADDR, CODE_INDEX, EXTENDED_HEADER_LEN, FRAME_OVERHEAD, LEN_INDEX,
    MAX_PAYLOAD_LEN, MIN_FRAME_LEN, NAK_CODE, SYNC,
};
use crate::protocol::checksum::crc16;
use crate::{Error, Result};

/// CCNET frame helper. Provides encode/decode of the wire frame
/// Format: [SYNC(1)] [ADDR(1)] [LEN(1)] [CMD(1)] [DATA(n)] [CRC_LO(1)] [CRC_HI(1)]
/// LEN counts every byte from SYNC through CRC_HI.
///
/// When LEN is 0 the frame is an extended one and the real length follows
/// the command byte as a big-endian u16: [SYNC] [ADDR] [0] [CMD] [LEN_HI]
/// [LEN_LO] [DATA(n)] [CRC(2)]. Extended frames are only ever decoded; the
/// validator never needs to be sent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command byte (outbound) or status byte (inbound)
    pub code: u8,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(code: u8, data: Vec<u8>) -> Self {
        Self { code, data }
    }

    /// Encode a command code and payload into a full CCNET frame
    pub fn encode(code: u8, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                max: MAX_PAYLOAD_LEN,
                actual: data.len(),
            });
        }

        let len = data.len() + FRAME_OVERHEAD;
        let mut out = Vec::with_capacity(len);
        out.push(SYNC);
        out.push(BILL_VALIDATOR_ADDR);
        out.push(len as u8);
        out.push(code);
        out.extend_from_slice(data);
        let crc = crc16(&out);
        out.extend_from_slice(&crc.to_le_bytes());
        Ok(out)
    }

    /// Decode a full CCNET frame into its code and payload.
    ///
    /// The checksum is verified before the LEN field so that a corrupted
    /// length byte is reported as a checksum failure.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        if frame.len() < MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        let crc_at = frame.len() - 2;
        let expected = crc16(&frame[..crc_at]);
        let actual = u16::from_le_bytes([frame[crc_at], frame[crc_at + 1]]);
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        let (declared, data_start) = if frame[LEN_INDEX] == 0 {
            if frame.len() < EXTENDED_HEADER_LEN + 2 {
                return Err(Error::InvalidLength {
                    expected: EXTENDED_HEADER_LEN + 2,
                    actual: frame.len(),
                });
            }
            let len = u16::from_be_bytes([frame[CODE_INDEX + 1], frame[CODE_INDEX + 2]]);
            (len as usize, EXTENDED_HEADER_LEN)
        } else {
            (frame[LEN_INDEX] as usize, CODE_INDEX + 1)
        };

        if declared != frame.len() {
            return Err(Error::LengthMismatch {
                expected: declared,
                actual: frame.len(),
            });
        }

        // A five byte frame has a valid checksum and length but no code.
        if frame.len() < FRAME_OVERHEAD {
            return Err(Error::InvalidLength {
                expected: FRAME_OVERHEAD,
                actual: frame.len(),
            });
        }

        Ok(Self {
            code: frame[CODE_INDEX],
            data: frame[data_start..crc_at].to_vec(),
        })
    }

    /// Total frame length announced by a (possibly partial) receive buffer
    /// starting at SYNC. Returns None until enough header bytes arrived.
    pub fn expected_len(buf: &[u8]) -> Option<usize> {
        let len = *buf.get(LEN_INDEX)?;
        if len != 0 {
            return Some(len as usize);
        }
        let hi = *buf.get(CODE_INDEX + 1)?;
        let lo = *buf.get(CODE_INDEX + 2)?;
        Some(u16::from_be_bytes([hi, lo]) as usize)
    }

    pub fn is_ack(&self) -> bool {
        self.code == ACK_CODE && self.data.is_empty()
    }

    pub fn is_nak(&self) -> bool {
        self.code == NAK_CODE && self.data.is_empty()
    }

    /// Interior of the frame as the device documents it: the code byte
    /// followed by the payload. Reply layouts (GET STATUS,
    /// IDENTIFICATION) are specified against this view.
    pub fn body(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.data.len());
        out.push(self.code);
        out.extend_from_slice(&self.data);
        out
    }
}
