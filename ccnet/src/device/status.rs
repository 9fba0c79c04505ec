// ccnet-rs/ccnet/src/device/status.rs

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::protocol::Reply;
use crate::types::Denomination;

/// Sub-code of the FAILURE (0x47) status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FailureKind {
    StackMotor,
    TransportMotorSpeed,
    TransportMotor,
    AligningMotor,
    InitialCassetteStatus,
    OpticCanal,
    MagneticCanal,
    CapacitanceCanal,
    Unknown(u8),
}

impl FailureKind {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x50 => Self::StackMotor,
            0x51 => Self::TransportMotorSpeed,
            0x52 => Self::TransportMotor,
            0x53 => Self::AligningMotor,
            0x54 => Self::InitialCassetteStatus,
            0x55 => Self::OpticCanal,
            0x56 => Self::MagneticCanal,
            0x5F => Self::CapacitanceCanal,
            other => Self::Unknown(other),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::StackMotor => "stack motor failure",
            Self::TransportMotorSpeed => "transport motor speed failure",
            Self::TransportMotor => "transport motor failure",
            Self::AligningMotor => "aligning motor failure",
            Self::InitialCassetteStatus => "initial cassette status failure",
            Self::OpticCanal => "optic canal failure",
            Self::MagneticCanal => "magnetic canal failure",
            Self::CapacitanceCanal => "capacitance canal failure",
            Self::Unknown(_) => "unknown failure",
        }
    }
}

/// Sub-code of the REJECTING (0x1C) status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    Insertion,
    Magnetic,
    RemainedBillInHead,
    Multiplying,
    Conveying,
    Identification,
    Verification,
    Optic,
    Inhibit,
    Capacity,
    Operation,
    Length,
    Unknown(u8),
}

impl RejectReason {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x60 => Self::Insertion,
            0x61 => Self::Magnetic,
            0x62 => Self::RemainedBillInHead,
            0x63 => Self::Multiplying,
            0x64 => Self::Conveying,
            0x65 => Self::Identification,
            0x66 => Self::Verification,
            0x67 => Self::Optic,
            0x68 => Self::Inhibit,
            0x69 => Self::Capacity,
            0x6A => Self::Operation,
            0x6C => Self::Length,
            other => Self::Unknown(other),
        }
    }

    pub fn description(&self) -> String {
        let what = match self {
            Self::Insertion => "insertion",
            Self::Magnetic => "magnetic",
            Self::RemainedBillInHead => "remained bill in head",
            Self::Multiplying => "multiplying",
            Self::Conveying => "conveying",
            Self::Identification => "identification",
            Self::Verification => "verification",
            Self::Optic => "optic",
            Self::Inhibit => "inhibit",
            Self::Capacity => "capacity",
            Self::Operation => "operation",
            Self::Length => "length",
            Self::Unknown(code) => return format!("rejecting, unknown reason {:#04x}", code),
        };
        format!("rejecting due to {}", what)
    }
}

/// Named operating state of the validator as reported by POLL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceState {
    PowerUp,
    PowerUpValidator,
    PowerUpStacker,
    Initialize,
    Idling,
    Accepting,
    Stacking,
    Returning,
    UnitDisabled,
    Holding,
    DeviceBusy,
    Reject(RejectReason),
    IllegalCommand,
    CassetteFull,
    CassetteOut,
    ValidatorJammed,
    CassetteJammed,
    Cheated,
    Pause,
    Failure(FailureKind),
    /// Note held in escrow; carries the bill type code.
    Escrow(u8),
    BillStacked(u8),
    BillReturning(u8),
    Unknown(u8),
}

impl DeviceState {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::IllegalCommand
                | Self::CassetteFull
                | Self::CassetteOut
                | Self::ValidatorJammed
                | Self::CassetteJammed
                | Self::Cheated
                | Self::Pause
                | Self::Failure(_)
        )
    }

    pub fn is_power_up(&self) -> bool {
        matches!(
            self,
            Self::PowerUp | Self::PowerUpValidator | Self::PowerUpStacker
        )
    }

    pub fn description(&self) -> String {
        let text = match self {
            Self::PowerUp => "power up",
            Self::PowerUpValidator => "power up with bill in validator",
            Self::PowerUpStacker => "power up with bill in stacker",
            Self::Initialize => "initialize",
            Self::Idling => "idling",
            Self::Accepting => "accepting",
            Self::Stacking => "stacking",
            Self::Returning => "returning",
            Self::UnitDisabled => "unit disabled",
            Self::Holding => "holding",
            Self::DeviceBusy => "device busy",
            Self::Reject(reason) => return reason.description(),
            Self::IllegalCommand => "illegal command",
            Self::CassetteFull => "drop cassette full",
            Self::CassetteOut => "drop cassette out of position",
            Self::ValidatorJammed => "validator jammed",
            Self::CassetteJammed => "drop cassette jammed",
            Self::Cheated => "cheated",
            Self::Pause => "pause",
            Self::Failure(kind) => return format!("failure: {}", kind.description()),
            Self::Escrow(code) => return format!("escrow position, bill type {:#04x}", code),
            Self::BillStacked(code) => return format!("bill stacked, bill type {:#04x}", code),
            Self::BillReturning(code) => {
                return format!("bill returned, bill type {:#04x}", code);
            }
            Self::Unknown(code) => return format!("unknown status {:#04x}", code),
        };
        text.to_string()
    }
}

/// Raw POLL reply: status byte Z1 and optional sub-code Z2 (0 when the
/// device sent none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceStatus {
    pub z1: u8,
    pub z2: u8,
}

impl DeviceStatus {
    pub const fn new(z1: u8, z2: u8) -> Self {
        Self { z1, z2 }
    }

    pub fn from_reply(reply: &Reply) -> Self {
        Self {
            z1: reply.code,
            z2: reply.data.first().copied().unwrap_or(0),
        }
    }

    pub fn state(&self) -> DeviceState {
        match self.z1 {
            0x10 => DeviceState::PowerUp,
            0x11 => DeviceState::PowerUpValidator,
            0x12 => DeviceState::PowerUpStacker,
            0x13 => DeviceState::Initialize,
            0x14 => DeviceState::Idling,
            0x15 => DeviceState::Accepting,
            0x17 => DeviceState::Stacking,
            0x18 => DeviceState::Returning,
            0x19 => DeviceState::UnitDisabled,
            0x1A => DeviceState::Holding,
            0x1B => DeviceState::DeviceBusy,
            0x1C => DeviceState::Reject(RejectReason::from_code(self.z2)),
            0x30 => DeviceState::IllegalCommand,
            0x41 => DeviceState::CassetteFull,
            0x42 => DeviceState::CassetteOut,
            0x43 => DeviceState::ValidatorJammed,
            0x44 => DeviceState::CassetteJammed,
            0x45 => DeviceState::Cheated,
            0x46 => DeviceState::Pause,
            0x47 => DeviceState::Failure(FailureKind::from_code(self.z2)),
            0x80 => DeviceState::Escrow(self.z2),
            0x81 => DeviceState::BillStacked(self.z2),
            0x82 => DeviceState::BillReturning(self.z2),
            other => DeviceState::Unknown(other),
        }
    }

    pub fn is_error(&self) -> bool {
        self.state().is_error()
    }

    /// Both status bytes as one word, Z1 in the high byte.
    pub fn word(&self) -> u16 {
        ((self.z1 as u16) << 8) | self.z2 as u16
    }

    pub fn description(&self) -> String {
        self.state().description()
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#06x})", self.description(), self.word())
    }
}

/// Map a bill type code from an escrow / stacked status to its face value.
/// Codes outside the table are not errors; callers treat them as notes
/// that must be rejected.
pub fn denomination(code: u8) -> Option<Denomination> {
    match code {
        0x02 => Some(Denomination::D10),
        0x03 => Some(Denomination::D50),
        0x04 => Some(Denomination::D100),
        0x0C => Some(Denomination::D200),
        0x05 => Some(Denomination::D500),
        0x06 => Some(Denomination::D1000),
        0x0D => Some(Denomination::D2000),
        0x07 => Some(Denomination::D5000),
        _ => None,
    }
}
