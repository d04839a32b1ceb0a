use cprelude_compiler::{Linkage, SymbolTable};

use super::target::{TargetArgs, exit_with, prologue_or_exit};

pub struct SymbolsArgs {
    pub target: TargetArgs,
    pub json: bool,
}

pub fn run(args: SymbolsArgs) {
    let prologue = prologue_or_exit(args.target);

    if args.json {
        let json =
            serde_json::to_string_pretty(prologue.symbols()).unwrap_or_else(|e| exit_with(e));
        println!("{}", json);
        return;
    }

    print!("{}", render_table(prologue.symbols()));
}

fn linkage_label(linkage: Linkage) -> &'static str {
    match linkage {
        Linkage::C => "extern C",
        Linkage::Builtin => "builtin",
        Linkage::RuntimeHeader => "runtime header",
    }
}

pub(crate) fn render_table(symbols: &SymbolTable) -> String {
    let mut out = format!("toolchain: {}\n", symbols.toolchain());
    for symbol in symbols.iter() {
        out.push_str(&format!(
            "  {:<8} -> {:<18} {:<16} {}\n",
            symbol.primitive.canonical_name(),
            symbol.name,
            linkage_label(symbol.linkage),
            symbol.signature,
        ));
    }
    out
}
