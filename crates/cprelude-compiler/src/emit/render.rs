//! Section rendering.

use cprelude_core::{CanonicalType, IntType};

use crate::fnref::FnRef;

use super::{Dialect, Emitter};

impl Emitter<'_> {
    pub(super) fn emit_banner(&mut self) {
        let c = self.c();
        let text = format!(
            "/* cprelude prologue: toolchain {}, dialect {} */",
            self.toolchain, self.config.dialect
        );
        self.output.push_str(&c.comment(&text));
        self.output.push('\n');
    }

    pub(super) fn open_guard(&mut self) {
        let Some(guard) = self.config.header_guard.clone() else {
            return;
        };
        let c = self.c();
        self.output
            .push_str(&format!("{} {}\n", c.keyword("#ifndef"), c.name(&guard)));
        self.output
            .push_str(&format!("{} {}\n\n", c.keyword("#define"), c.name(&guard)));
    }

    pub(super) fn close_guard(&mut self) {
        let Some(guard) = self.config.header_guard.clone() else {
            return;
        };
        let c = self.c();
        self.output.push_str(&format!(
            "{} {}\n",
            c.keyword("#endif"),
            c.comment(&format!("/* {guard} */"))
        ));
    }

    /// `typedef <native> int8_t;` .. for the selected toolchain.
    pub(super) fn width_typedefs(&self) -> Vec<String> {
        let c = self.c();
        IntType::ALL
            .iter()
            .map(|&ty| {
                format!(
                    "{} {} {};",
                    c.keyword("typedef"),
                    self.toolchain.native_spelling(ty),
                    c.name(ty.std_name())
                )
            })
            .collect()
    }

    pub(super) fn canonical_aliases(&self) -> Vec<String> {
        let c = self.c();
        CanonicalType::ALL
            .iter()
            .map(|&ty| {
                let target = match ty {
                    CanonicalType::Bool => self.config.dialect.bool_spelling(),
                    CanonicalType::Int(int) => int.std_name(),
                };
                format!("{} {} {};", c.keyword("typedef"), target, c.name(ty.alias()))
            })
            .collect()
    }

    pub(super) fn fn_ref_typedefs(&self) -> Vec<String> {
        let c = self.c();
        self.fn_refs
            .iter()
            .map(|fn_ref| {
                format!(
                    "{} {} (*{})({});",
                    c.keyword("typedef"),
                    fn_ref.signature.ret,
                    c.name(&fn_ref.name),
                    fn_ref_params(fn_ref, self.config.dialect)
                )
            })
            .collect()
    }

    /// Unmangled declarations for everything the linker must supply.
    pub(super) fn extern_declarations(&self) -> Vec<String> {
        let c = self.c();
        let storage = c.keyword(self.config.dialect.unmangled_extern());
        self.symbols
            .link_externs()
            .map(|s| {
                format!(
                    "{} {} {}({});",
                    storage,
                    s.signature.ret,
                    c.name(&s.name),
                    s.signature.render_params()
                )
            })
            .collect()
    }
}

/// Parameter list of a function-reference typedef.
fn fn_ref_params(fn_ref: &FnRef, dialect: Dialect) -> String {
    let sig = &fn_ref.signature;
    if sig.variadic && sig.params.is_empty() && !dialect.allows_bare_ellipsis() {
        return String::new();
    }
    sig.render_params()
}
