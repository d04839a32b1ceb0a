//! Toolchain identity and native type spellings.
//!
//! The identity is an explicit value supplied by the caller. Every
//! toolchain-dependent decision in the crate is a match on [`Toolchain`].

use std::fmt;
use std::str::FromStr;

use cprelude_core::IntType;
use serde::Serialize;

use crate::{Error, Result};

/// Oldest GNU front end whose integer keywords the prologue relies on.
pub const MIN_GNU_MAJOR: u32 = 3;

/// Clang reports itself as this GNU major.
const CLANG_GNU_MAJOR: u32 = 4;

/// Toolchain identity as supplied by the caller, possibly unrecognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolchainId {
    Msvc,
    Gnu { major: u32 },
    Unknown,
}

/// The two compile-time markers the toolchains predefine.
///
/// Mirrors `_MSC_VER` and `__GNUC__` for callers that probe a compiler and
/// want the same precedence the markers have in a header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolchainSignals {
    pub msvc_version: Option<u32>,
    pub gnu_major: Option<u32>,
}

impl ToolchainSignals {
    /// MSVC's marker wins over GNU's; neither marker is `Unknown`.
    pub fn identify(&self) -> ToolchainId {
        if self.msvc_version.is_some() {
            return ToolchainId::Msvc;
        }
        match self.gnu_major {
            Some(major) => ToolchainId::Gnu { major },
            None => ToolchainId::Unknown,
        }
    }
}

impl ToolchainId {
    pub fn resolve(self) -> Result<Toolchain> {
        let toolchain = match self {
            Self::Msvc => Toolchain::Msvc,
            Self::Gnu { major } if major >= MIN_GNU_MAJOR => Toolchain::Gnu,
            Self::Gnu { major } => {
                return Err(Error::UnsupportedGnuVersion {
                    major,
                    minimum: MIN_GNU_MAJOR,
                });
            }
            Self::Unknown => return Err(Error::UnresolvedToolchain),
        };
        log::debug!("resolved toolchain {self} to {toolchain}");
        Ok(toolchain)
    }
}

impl fmt::Display for ToolchainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msvc => f.write_str("msvc"),
            Self::Gnu { major } => write!(f, "gnu-{major}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

impl FromStr for ToolchainId {
    type Err = Error;

    /// Accepts `msvc`, `gnu`, `gcc`, `clang`, and `gnu-<major>` / `gcc-<major>`.
    ///
    /// A bare `gnu` or `gcc` means the minimum supported major.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "msvc" | "cl" => return Ok(Self::Msvc),
            "gnu" | "gcc" => return Ok(Self::Gnu { major: MIN_GNU_MAJOR }),
            "clang" => {
                return Ok(Self::Gnu {
                    major: CLANG_GNU_MAJOR,
                });
            }
            _ => {}
        }

        let versioned = lower
            .strip_prefix("gnu-")
            .or_else(|| lower.strip_prefix("gcc-"));
        match versioned.map(str::parse::<u32>) {
            Some(Ok(major)) => Ok(Self::Gnu { major }),
            _ => Err(Error::UnknownToolchain(s.to_string())),
        }
    }
}

/// A resolved, supported toolchain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
    /// Microsoft's front end, with `__intN` extended integer keywords.
    Msvc,
    /// The GNU front end (gcc, clang), with conventional integer keywords.
    Gnu,
}

impl Toolchain {
    pub const ALL: [Toolchain; 2] = [Self::Msvc, Self::Gnu];

    /// The native spelling the width typedef for `ty` expands to.
    pub fn native_spelling(self, ty: IntType) -> &'static str {
        match self {
            Self::Msvc => match ty {
                IntType::I8 => "__int8",
                IntType::I16 => "__int16",
                IntType::I32 => "__int32",
                IntType::I64 => "__int64",
                IntType::U8 => "unsigned __int8",
                IntType::U16 => "unsigned __int16",
                IntType::U32 => "unsigned __int32",
                IntType::U64 => "unsigned __int64",
            },
            Self::Gnu => match ty {
                // plain `char` has implementation-defined signedness
                IntType::I8 => "signed char",
                IntType::I16 => "short",
                IntType::I32 => "int",
                IntType::I64 => "long long",
                IntType::U8 => "unsigned char",
                IntType::U16 => "unsigned short",
                IntType::U32 => "unsigned int",
                IntType::U64 => "unsigned long long",
            },
        }
    }

    /// The compiler's predefined identity macro, for banners and probes.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Msvc => "_MSC_VER",
            Self::Gnu => "__GNUC__",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Msvc => "msvc",
            Self::Gnu => "gnu",
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
