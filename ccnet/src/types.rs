// ccnet-rs/ccnet/src/types.rs

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Face value of a banknote in currency units.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Denomination(u32);

impl Denomination {
    pub const D10: Self = Self(10);
    pub const D50: Self = Self(50);
    pub const D100: Self = Self(100);
    pub const D200: Self = Self(200);
    pub const D500: Self = Self(500);
    pub const D1000: Self = Self(1000);
    pub const D2000: Self = Self(2000);
    pub const D5000: Self = Self(5000);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Bill-type bitmask over the six maskable denominations.
///
/// Bits 2..=7 of the wire byte map to 10, 50, 100, 500, 1000 and 5000.
/// Bits 0 and 1 carry no denomination and are dropped on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NominalMask(u8);

impl NominalMask {
    /// Denominations in bit order, starting at bit 2.
    pub const DENOMINATIONS: [Denomination; 6] = [
        Denomination::D10,
        Denomination::D50,
        Denomination::D100,
        Denomination::D500,
        Denomination::D1000,
        Denomination::D5000,
    ];

    const FIRST_BIT: u8 = 2;
    const VALID_BITS: u8 = 0b1111_1100;

    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::VALID_BITS)
    }

    pub fn from_byte(value: u8) -> Self {
        Self(value & Self::VALID_BITS)
    }

    pub fn to_byte(&self) -> u8 {
        self.0
    }

    pub fn from_denominations(denominations: &[Denomination]) -> Self {
        denominations
            .iter()
            .fold(Self::none(), |mask, &d| mask.with(d))
    }

    fn bit_for(denomination: Denomination) -> Option<u8> {
        Self::DENOMINATIONS
            .iter()
            .position(|&d| d == denomination)
            .map(|i| Self::FIRST_BIT + i as u8)
    }

    /// Return a copy with `denomination` enabled. Denominations outside the
    /// maskable set leave the mask unchanged.
    pub fn with(self, denomination: Denomination) -> Self {
        match Self::bit_for(denomination) {
            Some(bit) => Self(self.0 | (1 << bit)),
            None => self,
        }
    }

    pub fn without(self, denomination: Denomination) -> Self {
        match Self::bit_for(denomination) {
            Some(bit) => Self(self.0 & !(1 << bit)),
            None => self,
        }
    }

    pub fn contains(&self, denomination: Denomination) -> bool {
        Self::bit_for(denomination).is_some_and(|bit| self.0 & (1 << bit) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn denominations(&self) -> Vec<Denomination> {
        Self::DENOMINATIONS
            .iter()
            .copied()
            .filter(|&d| self.contains(d))
            .collect()
    }
}

impl From<u8> for NominalMask {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<NominalMask> for u8 {
    fn from(mask: NominalMask) -> Self {
        mask.to_byte()
    }
}

impl fmt::Display for NominalMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<String> = self.denominations().iter().map(|d| d.to_string()).collect();
        f.write_str(&names.join(","))
    }
}

/// Reply to GET STATUS: which bill types are enabled and which are
/// checked with enhanced security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BillTypeStatus {
    pub enabled: NominalMask,
    pub security: NominalMask,
}

/// Reply to IDENTIFICATION.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identification {
    pub part_number: String,
    pub serial_number: String,
    /// Binary asset number rendered as dash-separated hex bytes.
    pub asset_number: String,
}

/// Whether the drop cassette sits in the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CassetteStatus {
    #[default]
    InPlace,
    Removed,
}
