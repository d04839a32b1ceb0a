//! Probe translation unit.
//!
//! Compiling the probe with the target toolchain checks what Rust cannot:
//! every alias has its documented storage size, the fill-memory and
//! allocation calls resolve to the backend symbols, and the opaque handle
//! holds an `i32`-returning function. Linking it shows the allocator as the
//! one unresolved, unmangled external.

use cprelude_core::CanonicalType;

use crate::Result;
use crate::emit::Dialect;
use crate::primitives::{Linkage, Primitive};
use crate::prologue::Prologue;

/// Prefix of every name the unit defines.
pub(crate) const PREFIX: &str = "cprelude_probe";

pub(crate) fn render(prologue: &Prologue) -> Result<String> {
    let mut out = String::new();
    let symbols = prologue.symbols();

    for symbol in symbols.iter() {
        if symbol.linkage == Linkage::RuntimeHeader {
            out.push_str(&format!(
                "#include <{}>\n",
                symbol.primitive.runtime_header()
            ));
        }
    }
    if !out.is_empty() {
        out.push('\n');
    }

    out.push_str(&prologue.emit());
    out.push('\n');

    out.push_str("/* a negative array size fails the build */\n");
    for ty in CanonicalType::ALL {
        out.push_str(&format!(
            "typedef char {PREFIX}_size_{alias}[(sizeof({alias}) == {bytes}) ? 1 : -1];\n",
            alias = ty.alias(),
            bytes = ty.storage_bytes(),
        ));
    }
    out.push('\n');

    if let Some(id) = prologue.fn_refs().opaque() {
        let handle = &prologue.fn_refs().get(id)?.name;
        let cast = match prologue.dialect() {
            Dialect::C => String::new(),
            Dialect::Cxx => format!("({handle})"),
        };
        out.push_str(&format!(
            "static i32 {PREFIX}_callee(i32 value, u8* data) {{ (void)data; return value; }}\n"
        ));
        out.push_str(&format!(
            "{handle} {PREFIX}_handle = {cast}{PREFIX}_callee;\n\n"
        ));
    }

    let fill = symbols.emit_call(Primitive::FillMemory, &["buffer", "0", "size"])?;
    let alloc = symbols.emit_call(Primitive::Allocate, &["size"])?;
    out.push_str(&format!("void* {PREFIX}(u8* buffer, u32 size)\n"));
    out.push_str("{\n");
    out.push_str(&format!("    {fill};\n"));
    out.push_str(&format!("    return {alloc};\n"));
    out.push_str("}\n");

    log::debug!("rendered probe unit ({} bytes)", out.len());
    Ok(out)
}
