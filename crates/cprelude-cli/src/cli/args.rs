//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the target flags read the same in
//! every command that resolves a target.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Target toolchain (-t/--toolchain).
pub fn toolchain_arg() -> Arg {
    Arg::new("toolchain")
        .short('t')
        .long("toolchain")
        .value_name("TOOLCHAIN")
        .help("Target toolchain: msvc, gnu, gcc, clang or gnu-<major>")
}

/// Output dialect (--dialect).
pub fn dialect_arg() -> Arg {
    Arg::new("dialect")
        .long("dialect")
        .value_name("DIALECT")
        .value_parser(["c", "c++"])
        .help("Language of the generated code (default: c++)")
}

/// Allocator symbol (--allocator).
pub fn allocator_arg() -> Arg {
    Arg::new("allocator")
        .long("allocator")
        .value_name("SYMBOL")
        .help("External allocation routine (default: calloc)")
}

/// Typed function reference (--fn-ref, repeatable).
pub fn fn_ref_arg() -> Arg {
    Arg::new("fn_ref")
        .long("fn-ref")
        .value_name("SIGNATURE")
        .action(ArgAction::Append)
        .help("Function-reference signature, e.g. 'i32(i32, void*)'")
}

/// Omit the opaque handle (--no-opaque-fn-ref).
pub fn no_opaque_fn_ref_arg() -> Arg {
    Arg::new("no_opaque_fn_ref")
        .long("no-opaque-fn-ref")
        .action(ArgAction::SetTrue)
        .help("Do not define the opaque anyFn handle")
}

/// Include guard (--header-guard).
pub fn header_guard_arg() -> Arg {
    Arg::new("header_guard")
        .long("header-guard")
        .value_name("MACRO")
        .help("Wrap the output in an include guard")
}

/// Omit the banner comment (--no-banner).
pub fn no_banner_arg() -> Arg {
    Arg::new("no_banner")
        .long("no-banner")
        .action(ArgAction::SetTrue)
        .help("Do not start the output with a banner comment")
}

/// Target settings file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Target settings file (flags override it)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}
