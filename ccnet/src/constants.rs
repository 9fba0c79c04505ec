// ccnet-rs/ccnet/src/constants.rs
//! Common protocol constants used across the crate

/// CCNET synchronisation byte, first byte of every frame
pub const SYNC: u8 = 0x02;

/// Peripheral address of a bill validator on the CCNET bus
pub const BILL_VALIDATOR_ADDR: u8 = 0x03;

/// Frame overhead: SYNC + ADDR + LEN + CMD + CRC(2)
pub const FRAME_OVERHEAD: usize = 6;

/// Largest frame that can be described by the one-byte LEN field
pub const MAX_FRAME_LEN: usize = 250;

/// Largest outbound payload (MAX_FRAME_LEN - FRAME_OVERHEAD)
pub const MAX_PAYLOAD_LEN: usize = MAX_FRAME_LEN - FRAME_OVERHEAD;

/// Shortest byte sequence the decoder will look at
pub const MIN_FRAME_LEN: usize = 5;

/// Reversed CRC-16 polynomial (CCITT 0x1021 bit-reflected)
pub const CRC_POLYNOMIAL: u16 = 0x8408;

/// Index of the LEN byte inside a frame
pub const LEN_INDEX: usize = 2;

/// Index of the command / status byte inside a frame
pub const CODE_INDEX: usize = 3;

/// Header length of an extended frame (LEN = 0): SYNC ADDR 0 CMD LEN_HI LEN_LO
pub const EXTENDED_HEADER_LEN: usize = 6;

/// Wire codes of the acknowledgement frames
pub const ACK_CODE: u8 = 0x00;
pub const NAK_CODE: u8 = 0xFF;

/// Length of the bill-type bitmask payload carried by ENABLE BILL TYPES
pub const ENABLE_BILL_TYPES_PAYLOAD_LEN: usize = 6;

/// Length of the SET SECURITY payload
pub const SET_SECURITY_PAYLOAD_LEN: usize = 3;

/// Byte index of the nominal mask inside a three-byte bill-type group
pub const NOMINAL_MASK_INDEX: usize = 2;
