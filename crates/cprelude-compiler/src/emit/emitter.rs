//! Core emitter struct and main emit logic.

use cprelude_core::Colors;

use crate::fnref::FnRefTable;
use crate::primitives::SymbolTable;
use crate::toolchain::Toolchain;

use super::Config;

/// Prologue emitter for one resolved target.
pub struct Emitter<'a> {
    pub(super) toolchain: Toolchain,
    pub(super) symbols: &'a SymbolTable,
    pub(super) fn_refs: &'a FnRefTable,
    pub(super) config: Config,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(symbols: &'a SymbolTable, fn_refs: &'a FnRefTable, config: Config) -> Self {
        Self {
            toolchain: symbols.toolchain(),
            symbols,
            fn_refs,
            config,
            output: String::new(),
        }
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    /// Emit the whole prologue.
    ///
    /// Sections appear in a fixed order: width typedefs, canonical aliases,
    /// function references, unmangled externs. Empty sections are skipped.
    ///
    /// Builtins are never declared here; gcc and clang declare them
    /// implicitly, and a redeclaration with other parameter types is an
    /// error in C++ and an unresolvable external in C.
    pub fn emit(mut self) -> String {
        log::debug!(
            "emitting prologue for {} ({})",
            self.toolchain,
            self.config.dialect
        );

        if self.config.banner {
            self.emit_banner();
        }
        self.open_guard();

        let width = self.width_typedefs();
        self.push_section(width);
        let aliases = self.canonical_aliases();
        self.push_section(aliases);
        let fn_refs = self.fn_ref_typedefs();
        self.push_section(fn_refs);
        let externs = self.extern_declarations();
        self.push_section(externs);

        self.close_guard();

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    fn push_section(&mut self, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        for line in lines {
            self.output.push_str(&line);
            self.output.push('\n');
        }
        self.output.push('\n');
    }
}
