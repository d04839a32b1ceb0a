//! cprelude compiler: the type-and-primitive prologue for generated C.
//!
//! A translator that emits C or C++ calls into this crate once per output
//! target. Everything is a pure function of an explicit [`ToolchainId`]:
//! - `toolchain` - toolchain identity and native type spellings
//! - `signature` - C types and function signatures in canonical spelling
//! - `primitives` - canonical primitive to backend symbol mapping
//! - `fnref` - typed function-reference table and the opaque handle
//! - `emit` - prologue text emission
//! - `probe` - a translation unit that checks the prologue natively
//! - `settings` - TOML target description
//! - `prologue` - high-level builder facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod fnref;
pub mod primitives;
pub mod probe;
pub mod prologue;
pub mod settings;
pub mod signature;
pub mod toolchain;

#[cfg(test)]
mod fnref_tests;
#[cfg(test)]
mod native_tests;
#[cfg(test)]
mod prologue_tests;
#[cfg(test)]
mod settings_tests;
#[cfg(test)]
mod signature_tests;

pub use emit::{Config, Dialect, Emitter};
pub use fnref::{FnRef, FnRefId, FnRefKind, FnRefTable};
pub use primitives::{BackendSymbol, Linkage, Primitive, SymbolTable};
pub use prologue::{Prologue, PrologueBuilder};
pub use settings::TargetSettings;
pub use signature::{CType, Signature};
pub use toolchain::{MIN_GNU_MAJOR, Toolchain, ToolchainId, ToolchainSignals};

pub use cprelude_core::{CanonicalType, IntType};

/// Errors raised while resolving a target or checking generated code against it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither recognized toolchain was identified.
    #[error("unresolved toolchain: none of the recognized toolchains (msvc, gnu) was identified")]
    UnresolvedToolchain,

    #[error("gnu toolchain major version {major} is not supported (minimum is {minimum})")]
    UnsupportedGnuVersion { major: u32, minimum: u32 },

    #[error("unknown toolchain `{0}` (expected msvc, gnu, gcc, clang or gnu-<major>)")]
    UnknownToolchain(String),

    #[error("unknown dialect `{0}` (expected c or c++)")]
    UnknownDialect(String),

    #[error("invalid type `{0}`")]
    InvalidType(String),

    #[error("invalid signature `{input}`: {reason}")]
    InvalidSignature { input: String, reason: &'static str },

    #[error("`{0}` is not a valid C identifier")]
    InvalidIdentifier(String),

    #[error("`{symbol}` takes {expected} argument(s), found {found}")]
    PrimitiveArity {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("function reference `{name}` returns {expected}, cannot hold a function returning {found}")]
    FnRefReturnMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("function reference `{name}` has signature {expected}, found {found}")]
    FnRefSignatureMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("call through `{name}`: expected ({expected}), found ({found})")]
    FnRefArgumentMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("call through opaque function reference `{0}` needs a signature descriptor")]
    OpaqueCallWithoutDescriptor(String),

    #[error("unknown function reference #{0}")]
    UnknownFnRef(u32),

    #[error("invalid target settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Result type for prologue operations.
pub type Result<T> = std::result::Result<T, Error>;
