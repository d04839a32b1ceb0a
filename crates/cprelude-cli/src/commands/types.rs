//! The canonical alias table, with native spellings per toolchain.
//!
//! Without a toolchain every supported toolchain gets a column; an
//! explicitly named toolchain still has to resolve.

use cprelude_compiler::{CanonicalType, Toolchain, ToolchainId};
use serde::Serialize;

use super::target::{TargetArgs, exit_with};

pub struct TypesArgs {
    pub target: TargetArgs,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AliasRow {
    pub alias: CanonicalType,
    pub bits: u32,
    pub storage_bytes: u32,
    pub signed: bool,
    pub native: Vec<NativeSpelling>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NativeSpelling {
    pub toolchain: Toolchain,
    pub spelling: String,
}

pub fn run(args: TypesArgs) {
    let settings = args.target.settings().unwrap_or_else(|e| exit_with(e));
    let toolchains = if settings.toolchain.is_some() {
        let id: ToolchainId = settings.toolchain_id().unwrap_or_else(|e| exit_with(e));
        vec![id.resolve().unwrap_or_else(|e| exit_with(e))]
    } else {
        Toolchain::ALL.to_vec()
    };

    let rows = alias_rows(&toolchains);
    if args.json {
        let json = serde_json::to_string_pretty(&rows).unwrap_or_else(|e| exit_with(e));
        println!("{}", json);
        return;
    }

    print!("{}", render_table(&toolchains, &rows));
}

pub(crate) fn alias_rows(toolchains: &[Toolchain]) -> Vec<AliasRow> {
    CanonicalType::ALL
        .into_iter()
        .map(|alias| AliasRow {
            alias,
            bits: alias.logical_bits(),
            storage_bytes: alias.storage_bytes(),
            signed: alias.is_signed(),
            native: toolchains
                .iter()
                .map(|&toolchain| NativeSpelling {
                    toolchain,
                    spelling: native_spelling(toolchain, alias),
                })
                .collect(),
        })
        .collect()
}

/// `i1` maps to the C++ boolean here; under a C dialect it is `_Bool`.
fn native_spelling(toolchain: Toolchain, alias: CanonicalType) -> String {
    match alias.int() {
        Some(ty) => toolchain.native_spelling(ty).to_string(),
        None => "bool".to_string(),
    }
}

pub(crate) fn render_table(toolchains: &[Toolchain], rows: &[AliasRow]) -> String {
    let mut header = format!("{:<6}{:>5}{:>7}", "alias", "bits", "bytes");
    for toolchain in toolchains {
        header.push_str(&format!("  {:<20}", toolchain.name()));
    }
    let mut out = format!("{}\n", header.trim_end());

    for row in rows {
        let mut line = format!(
            "{:<6}{:>5}{:>7}",
            row.alias.alias(),
            row.bits,
            row.storage_bytes
        );
        for native in &row.native {
            line.push_str(&format!("  {:<20}", native.spelling));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
