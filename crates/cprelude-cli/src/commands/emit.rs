use std::path::{Path, PathBuf};

use cprelude_core::utils::to_macro_case;

use super::target::{TargetArgs, exit_with, write_output};

pub struct EmitArgs {
    pub target: TargetArgs,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: EmitArgs) {
    let mut settings = args.target.settings().unwrap_or_else(|e| exit_with(e));
    if settings.header_guard.is_none() {
        settings.header_guard = args.output.as_deref().and_then(header_guard_for);
    }

    let prologue = settings
        .into_builder()
        .and_then(|builder| builder.build())
        .unwrap_or_else(|e| exit_with(e));
    let output = prologue.emit_colored(args.color);
    write_output(args.output.as_deref(), &output);
}

/// Guard derived from a header file name: `out/prelude.h` -> `PRELUDE_H`.
pub(crate) fn header_guard_for(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !matches!(ext, "h" | "hh" | "hpp") {
        return None;
    }
    let name = path.file_name()?.to_str()?;
    Some(to_macro_case(name))
}
