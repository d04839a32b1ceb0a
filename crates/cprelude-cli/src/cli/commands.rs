//! Command builders for the CLI.
//!
//! Every command that needs a target takes the same target flags, added by
//! `with_target_args`.

use clap::Command;

use super::args::*;

/// Add the flags that describe a target.
fn with_target_args(cmd: Command) -> Command {
    cmd.arg(toolchain_arg())
        .arg(dialect_arg())
        .arg(allocator_arg())
        .arg(fn_ref_arg())
        .arg(no_opaque_fn_ref_arg())
        .arg(header_guard_arg())
        .arg(no_banner_arg())
        .arg(config_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cprelude")
        .about("Toolchain-portable type and primitive prologue for generated C/C++")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(emit_command())
        .subcommand(probe_command())
        .subcommand(symbols_command())
        .subcommand(types_command())
}

/// Print the prologue for a target.
pub fn emit_command() -> Command {
    let cmd = Command::new("emit")
        .about("Emit the prologue for a target")
        .after_help(
            r#"EXAMPLES:
  cprelude emit -t gcc                        # GNU front end, C++
  cprelude emit -t msvc --dialect c           # MSVC, C
  cprelude emit -t clang --fn-ref 'i32(i32)'  # extra typed function reference
  cprelude emit -c cprelude.toml -o prelude.h # from a settings file"#,
        )
        .arg(output_file_arg())
        .arg(color_arg());

    with_target_args(cmd)
}

/// Print a probe translation unit.
pub fn probe_command() -> Command {
    let cmd = Command::new("probe")
        .about("Emit a translation unit that checks the prologue when compiled")
        .after_help(
            r#"EXAMPLES:
  cprelude probe -t gcc -o probe.cpp && g++ -c probe.cpp
  cprelude probe -t msvc --dialect c -o probe.c"#,
        )
        .arg(output_file_arg());

    with_target_args(cmd)
}

/// Show how primitives resolve.
pub fn symbols_command() -> Command {
    let cmd = Command::new("symbols")
        .about("Show the backend symbol for each primitive")
        .arg(json_arg());

    with_target_args(cmd)
}

/// Show the canonical alias table.
pub fn types_command() -> Command {
    Command::new("types")
        .about("Show canonical aliases with native spellings and sizes")
        .arg(toolchain_arg())
        .arg(config_arg())
        .arg(json_arg())
}
