//! Primitive operations and the symbols they resolve to.
//!
//! Generated code names primitives canonically (`memset`, `calloc`). The
//! code generator resolves each one through a [`SymbolTable`] when it
//! emits a call, so no macro rebinding is ever placed in the output.

use std::fmt;

use cprelude_core::CanonicalType;
use cprelude_core::utils::is_c_identifier;
use indexmap::IndexMap;
use serde::Serialize;

use crate::prologue::is_reserved_name;
use crate::signature::{CType, Signature};
use crate::toolchain::Toolchain;
use crate::{Error, Result};

/// Allocator symbol used when the target does not name one.
///
/// Declared with one `u32` parameter, unlike libc's two-argument `calloc`;
/// the runtime is expected to provide a matching definition.
pub const DEFAULT_ALLOCATOR: &str = "calloc";

const GNU_FILL_MEMORY: &str = "__builtin_memset";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Primitive {
    /// Fill `count` bytes at `dst` with `value`; returns `dst`.
    FillMemory,
    /// Allocate `size` bytes; returns the new block.
    Allocate,
}

impl Primitive {
    pub const ALL: [Primitive; 2] = [Self::FillMemory, Self::Allocate];

    /// The name generated code uses for the primitive.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::FillMemory => "memset",
            Self::Allocate => "calloc",
        }
    }

    /// The standard header that declares the canonical name.
    pub fn runtime_header(self) -> &'static str {
        match self {
            Self::FillMemory => "string.h",
            Self::Allocate => "stdlib.h",
        }
    }

    pub fn signature(self) -> Signature {
        match self {
            Self::FillMemory => Signature::new(
                CType::void_ptr(),
                vec![
                    CType::void_ptr(),
                    CanonicalType::I32.into(),
                    CanonicalType::U32.into(),
                ],
            ),
            Self::Allocate => Signature::new(CType::void_ptr(), vec![CanonicalType::U32.into()]),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Where a backend symbol's definition comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Linkage {
    /// Declared by the prologue with unmangled C linkage; defined by the
    /// linked runtime.
    C,
    /// A compiler builtin. The compiler declares it implicitly with its
    /// native (`size_t`) signature, so the prologue never redeclares it.
    Builtin,
    /// Declared by the runtime's own headers; the prologue says nothing.
    RuntimeHeader,
}

/// The concrete symbol a primitive resolves to on one toolchain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BackendSymbol {
    pub primitive: Primitive,
    pub name: String,
    #[serde(serialize_with = "serialize_display")]
    pub signature: Signature,
    pub linkage: Linkage,
}

fn serialize_display<S: serde::Serializer>(
    value: &Signature,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Mapping from canonical primitive to backend symbol for one toolchain.
#[derive(Clone, Debug, Serialize)]
pub struct SymbolTable {
    toolchain: Toolchain,
    entries: IndexMap<Primitive, BackendSymbol>,
}

impl SymbolTable {
    /// Build the table for `toolchain`.
    ///
    /// `allocator` overrides [`DEFAULT_ALLOCATOR`]. It is linked unmangled,
    /// so it must be a plain C identifier, and it must not collide with a
    /// name the prologue defines or with another primitive.
    pub fn for_toolchain(toolchain: Toolchain, allocator: Option<&str>) -> Result<Self> {
        let allocator = allocator.unwrap_or(DEFAULT_ALLOCATOR);
        let names_other_primitive = Primitive::ALL
            .iter()
            .any(|&p| p != Primitive::Allocate && p.canonical_name() == allocator);
        if !is_c_identifier(allocator) || is_reserved_name(allocator) || names_other_primitive {
            return Err(Error::InvalidIdentifier(allocator.to_string()));
        }

        let fill_memory = match toolchain {
            Toolchain::Msvc => BackendSymbol {
                primitive: Primitive::FillMemory,
                name: Primitive::FillMemory.canonical_name().to_string(),
                signature: Primitive::FillMemory.signature(),
                linkage: Linkage::RuntimeHeader,
            },
            Toolchain::Gnu => BackendSymbol {
                primitive: Primitive::FillMemory,
                name: GNU_FILL_MEMORY.to_string(),
                signature: Primitive::FillMemory.signature(),
                linkage: Linkage::Builtin,
            },
        };
        let allocate = BackendSymbol {
            primitive: Primitive::Allocate,
            name: allocator.to_string(),
            signature: Primitive::Allocate.signature(),
            linkage: Linkage::C,
        };

        let mut entries = IndexMap::new();
        for symbol in [fill_memory, allocate] {
            log::trace!(
                "{toolchain}: {} -> {} ({:?})",
                symbol.primitive,
                symbol.name,
                symbol.linkage
            );
            entries.insert(symbol.primitive, symbol);
        }

        Ok(Self { toolchain, entries })
    }

    pub fn toolchain(&self) -> Toolchain {
        self.toolchain
    }

    pub fn resolve(&self, primitive: Primitive) -> &BackendSymbol {
        // every primitive is inserted by `for_toolchain`
        &self.entries[&primitive]
    }

    /// Look a primitive up by the name generated code calls it by.
    pub fn lookup(&self, canonical_name: &str) -> Option<&BackendSymbol> {
        self.entries
            .values()
            .find(|s| s.primitive.canonical_name() == canonical_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackendSymbol> {
        self.entries.values()
    }

    /// Symbols the prologue declares and the linker resolves against the
    /// runtime, in table order.
    pub fn link_externs(&self) -> impl Iterator<Item = &BackendSymbol> {
        self.iter().filter(|s| s.linkage == Linkage::C)
    }

    /// Render a call expression to the backend symbol for `primitive`.
    pub fn emit_call(&self, primitive: Primitive, args: &[&str]) -> Result<String> {
        let symbol = self.resolve(primitive);
        let expected = symbol.signature.params.len();
        if args.len() != expected {
            return Err(Error::PrimitiveArity {
                symbol: symbol.name.clone(),
                expected,
                found: args.len(),
            });
        }
        Ok(format!("{}({})", symbol.name, args.join(", ")))
    }
}
