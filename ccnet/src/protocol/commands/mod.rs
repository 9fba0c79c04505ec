// ccnet-rs/ccnet/src/protocol/commands/mod.rs

pub mod bill_types;

pub use bill_types::{encode_enable_bill_types, encode_set_security};

use std::fmt;

/// Controller-to-validator commands with their one-byte wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    Ack = 0x00,
    Nak = 0xFF,
    Reset = 0x30,
    GetStatus = 0x31,
    SetSecurity = 0x32,
    Poll = 0x33,
    EnableBillTypes = 0x34,
    Stack = 0x35,
    Return = 0x36,
    Identification = 0x37,
    Hold = 0x38,
}

impl Command {
    pub const ALL: [Command; 11] = [
        Command::Ack,
        Command::Nak,
        Command::Reset,
        Command::GetStatus,
        Command::SetSecurity,
        Command::Poll,
        Command::EnableBillTypes,
        Command::Stack,
        Command::Return,
        Command::Identification,
        Command::Hold,
    ];

    /// Return the command code as sent on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// ACK and NAK are never answered by the device.
    pub fn expects_reply(self) -> bool {
        !matches!(self, Command::Ack | Command::Nak)
    }

    /// Commands the device answers with a bare ACK frame.
    pub fn expects_ack(self) -> bool {
        matches!(
            self,
            Command::Reset
                | Command::SetSecurity
                | Command::EnableBillTypes
                | Command::Stack
                | Command::Return
                | Command::Hold
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Ack => "ACK",
            Command::Nak => "NAK",
            Command::Reset => "RESET",
            Command::GetStatus => "GET STATUS",
            Command::SetSecurity => "SET SECURITY",
            Command::Poll => "POLL",
            Command::EnableBillTypes => "ENABLE BILL TYPES",
            Command::Stack => "STACK",
            Command::Return => "RETURN",
            Command::Identification => "IDENTIFICATION",
            Command::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#04x})", self.name(), self.code())
    }
}
