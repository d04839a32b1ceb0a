//! High-level facade: resolve a target once, then emit and query it.
//!
//! ```
//! use cprelude_compiler::{Primitive, Prologue, ToolchainId};
//!
//! let prologue = Prologue::builder(ToolchainId::Gnu { major: 9 })
//!     .fn_ref("i32(i32)".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let call = prologue
//!     .symbols()
//!     .emit_call(Primitive::FillMemory, &["p", "0", "n"])
//!     .unwrap();
//! assert_eq!(call, "__builtin_memset(p, 0, n)");
//! assert!(prologue.emit().contains("typedef int32_t i32;"));
//! ```

use cprelude_core::utils::is_c_identifier;
use cprelude_core::{CanonicalType, IntType};

use crate::emit::{Config, Dialect, Emitter};
use crate::fnref::{FnRefId, FnRefTable, OPAQUE_FN_REF};
use crate::primitives::{Primitive, SymbolTable};
use crate::probe;
use crate::signature::Signature;
use crate::toolchain::{Toolchain, ToolchainId};
use crate::{Error, Result};

/// Builder for [`Prologue`].
#[derive(Clone, Debug)]
pub struct PrologueBuilder {
    toolchain: ToolchainId,
    dialect: Dialect,
    allocator: Option<String>,
    fn_refs: Vec<Signature>,
    opaque_fn_ref: bool,
    header_guard: Option<String>,
    banner: bool,
}

impl PrologueBuilder {
    pub fn new(toolchain: ToolchainId) -> Self {
        Self {
            toolchain,
            dialect: Dialect::default(),
            allocator: None,
            fn_refs: Vec::new(),
            opaque_fn_ref: true,
            header_guard: None,
            banner: true,
        }
    }

    pub fn toolchain(mut self, value: ToolchainId) -> Self {
        self.toolchain = value;
        self
    }

    pub fn dialect(mut self, value: Dialect) -> Self {
        self.dialect = value;
        self
    }

    /// Name of the external allocation routine (default `calloc`).
    ///
    /// It is always declared as `void* <name>(u32)`. That does not match
    /// libc's `calloc(size_t, size_t)`: g++ warns about the builtin mismatch,
    /// and linking the default name against libc passes an undefined second
    /// argument. Runtimes that link libc should name their own one-argument
    /// allocator here.
    pub fn allocator(mut self, name: impl Into<String>) -> Self {
        self.allocator = Some(name.into());
        self
    }

    /// Register a typed function reference.
    pub fn fn_ref(mut self, signature: Signature) -> Self {
        self.fn_refs.push(signature);
        self
    }

    pub fn fn_refs(mut self, signatures: impl IntoIterator<Item = Signature>) -> Self {
        self.fn_refs.extend(signatures);
        self
    }

    /// Whether to define the opaque `anyFn` handle (default on).
    pub fn opaque_fn_ref(mut self, value: bool) -> Self {
        self.opaque_fn_ref = value;
        self
    }

    pub fn header_guard(mut self, name: impl Into<String>) -> Self {
        self.header_guard = Some(name.into());
        self
    }

    pub fn banner(mut self, value: bool) -> Self {
        self.banner = value;
        self
    }

    /// Resolve the toolchain and build the symbol and function-reference tables.
    ///
    /// Fails for an unknown or unsupported toolchain; no partial prologue is
    /// ever produced.
    pub fn build(self) -> Result<Prologue> {
        let toolchain = self.toolchain.resolve()?;

        let symbols = SymbolTable::for_toolchain(toolchain, self.allocator.as_deref())?;

        // `#define <guard>` erases every later use of the name
        if let Some(guard) = &self.header_guard {
            let names_symbol = Primitive::ALL.iter().any(|&p| {
                p.canonical_name() == guard.as_str() || symbols.resolve(p).name == *guard
            });
            if !is_c_identifier(guard) || is_reserved_name(guard) || names_symbol {
                return Err(Error::InvalidIdentifier(guard.clone()));
            }
        }

        let mut fn_refs = if self.opaque_fn_ref {
            FnRefTable::with_opaque()
        } else {
            FnRefTable::new()
        };
        for signature in self.fn_refs {
            fn_refs.intern(signature);
        }

        let config = Config::new()
            .dialect(self.dialect)
            .header_guard(self.header_guard)
            .banner(self.banner);

        log::debug!(
            "built prologue: {toolchain}, {}, {} fn ref(s)",
            self.dialect,
            fn_refs.len()
        );

        Ok(Prologue {
            toolchain,
            symbols,
            fn_refs,
            config,
        })
    }
}

/// A resolved target: everything needed to emit the prologue and to emit
/// calls and function references consistent with it.
#[derive(Clone, Debug)]
pub struct Prologue {
    toolchain: Toolchain,
    symbols: SymbolTable,
    fn_refs: FnRefTable,
    config: Config,
}

impl Prologue {
    pub fn builder(toolchain: ToolchainId) -> PrologueBuilder {
        PrologueBuilder::new(toolchain)
    }

    pub fn toolchain(&self) -> Toolchain {
        self.toolchain
    }

    pub fn dialect(&self) -> Dialect {
        self.config.get_dialect()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn fn_refs(&self) -> &FnRefTable {
        &self.fn_refs
    }

    /// Register a signature discovered while generating code.
    pub fn intern_fn_ref(&mut self, signature: Signature) -> FnRefId {
        self.fn_refs.intern(signature)
    }

    pub fn emit(&self) -> String {
        self.emit_colored(false)
    }

    pub fn emit_colored(&self, colored: bool) -> String {
        let config = self.config.clone().colored(colored);
        Emitter::new(&self.symbols, &self.fn_refs, config).emit()
    }

    /// A translation unit that checks this prologue when compiled natively.
    pub fn probe(&self) -> Result<String> {
        probe::render(self)
    }
}

/// Whether `name` is defined by the prologue or the check unit, or falls in
/// a namespace they use (`fn_*` typedefs, `__builtin_*`, `cprelude_probe*`).
pub(crate) fn is_reserved_name(name: &str) -> bool {
    CanonicalType::ALL.iter().any(|ty| ty.alias() == name)
        || IntType::ALL.iter().any(|ty| ty.std_name() == name)
        || name == OPAQUE_FN_REF
        || name.starts_with("fn_")
        || name.starts_with("__builtin_")
        || name.starts_with(probe::PREFIX)
}
