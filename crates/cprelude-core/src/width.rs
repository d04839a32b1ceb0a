//! Canonical fixed-width type vocabulary.
//!
//! Generated code only ever names the short aliases defined here. How each
//! alias is spelled natively is a toolchain concern and lives in the
//! compiler crate.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when a string does not name a canonical alias.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown canonical type `{0}`")]
pub struct ParseTypeError(pub String);

/// Fixed-width integer types, signed and unsigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl IntType {
    /// All integer types in emission order: signed widths, then unsigned.
    pub const ALL: [IntType; 8] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
    ];

    pub fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// The `<stdint.h>` spelling the width typedefs define (`int8_t` ..).
    pub fn std_name(self) -> &'static str {
        match self {
            Self::I8 => "int8_t",
            Self::I16 => "int16_t",
            Self::I32 => "int32_t",
            Self::I64 => "int64_t",
            Self::U8 => "uint8_t",
            Self::U16 => "uint16_t",
            Self::U32 => "uint32_t",
            Self::U64 => "uint64_t",
        }
    }

    /// The canonical short alias (`i8` ..).
    pub fn alias(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

/// A canonical alias: the boolean `i1` or one of the integer widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum CanonicalType {
    /// `i1`: one bit of logical state in the native boolean representation.
    Bool,
    Int(IntType),
}

impl CanonicalType {
    /// The nine aliases in the order the prologue defines them.
    pub const ALL: [CanonicalType; 9] = [
        Self::Bool,
        Self::Int(IntType::I8),
        Self::Int(IntType::I16),
        Self::Int(IntType::I32),
        Self::Int(IntType::I64),
        Self::Int(IntType::U8),
        Self::Int(IntType::U16),
        Self::Int(IntType::U32),
        Self::Int(IntType::U64),
    ];

    pub const I32: Self = Self::Int(IntType::I32);
    pub const U32: Self = Self::Int(IntType::U32);

    pub fn alias(self) -> &'static str {
        match self {
            Self::Bool => "i1",
            Self::Int(ty) => ty.alias(),
        }
    }

    /// Bits of logical state the alias carries.
    pub fn logical_bits(self) -> u32 {
        match self {
            Self::Bool => 1,
            Self::Int(ty) => ty.bits(),
        }
    }

    /// Bits of storage one value occupies.
    ///
    /// `i1` rounds up to the boolean storage size, which is one byte on
    /// every supported toolchain.
    pub fn storage_bits(self) -> u32 {
        match self {
            Self::Bool => 8,
            Self::Int(ty) => ty.bits(),
        }
    }

    pub fn storage_bytes(self) -> u32 {
        self.storage_bits() / 8
    }

    pub fn is_signed(self) -> bool {
        match self {
            Self::Bool => false,
            Self::Int(ty) => ty.is_signed(),
        }
    }

    pub fn int(self) -> Option<IntType> {
        match self {
            Self::Bool => None,
            Self::Int(ty) => Some(ty),
        }
    }
}

impl From<IntType> for CanonicalType {
    fn from(ty: IntType) -> Self {
        Self::Int(ty)
    }
}

impl From<CanonicalType> for &'static str {
    fn from(ty: CanonicalType) -> Self {
        ty.alias()
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

impl FromStr for CanonicalType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.alias() == s)
            .ok_or_else(|| ParseTypeError(s.to_string()))
    }
}

impl FromStr for IntType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.alias() == s)
            .ok_or_else(|| ParseTypeError(s.to_string()))
    }
}
