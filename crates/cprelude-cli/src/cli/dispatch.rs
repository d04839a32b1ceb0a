//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `TargetParams` collects the target flags shared by `emit`, `probe` and
//! `symbols`; its conversion turns them into a [`TargetSettings`] overlay
//! that is merged onto the `--config` file by the command.

use std::path::PathBuf;

use clap::ArgMatches;
use cprelude_compiler::TargetSettings;

use super::ColorChoice;
use crate::commands::emit::EmitArgs;
use crate::commands::probe::ProbeArgs;
use crate::commands::symbols::SymbolsArgs;
use crate::commands::target::TargetArgs;
use crate::commands::types::TypesArgs;

pub struct TargetParams {
    pub config: Option<PathBuf>,
    pub toolchain: Option<String>,
    pub dialect: Option<String>,
    pub allocator: Option<String>,
    pub fn_refs: Vec<String>,
    pub no_opaque_fn_ref: bool,
    pub header_guard: Option<String>,
    pub no_banner: bool,
}

impl TargetParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            toolchain: m.get_one::<String>("toolchain").cloned(),
            dialect: m.get_one::<String>("dialect").cloned(),
            allocator: m.get_one::<String>("allocator").cloned(),
            fn_refs: m
                .get_many::<String>("fn_ref")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            no_opaque_fn_ref: m.get_flag("no_opaque_fn_ref"),
            header_guard: m.get_one::<String>("header_guard").cloned(),
            no_banner: m.get_flag("no_banner"),
        }
    }
}

impl From<TargetParams> for TargetArgs {
    fn from(p: TargetParams) -> Self {
        // Switches only ever turn a feature off; leaving them unset lets the
        // config file decide.
        let overrides = TargetSettings {
            toolchain: p.toolchain,
            dialect: p.dialect,
            allocator: p.allocator,
            opaque_fn_ref: p.no_opaque_fn_ref.then_some(false),
            header_guard: p.header_guard,
            banner: p.no_banner.then_some(false),
            fn_refs: p.fn_refs,
        };
        Self {
            config: p.config,
            overrides,
        }
    }
}

pub struct EmitParams {
    pub target: TargetParams,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            target: TargetParams::from_matches(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        // Files never get escape codes.
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            target: p.target.into(),
            output: p.output,
            color,
        }
    }
}

pub struct ProbeParams {
    pub target: TargetParams,
    pub output: Option<PathBuf>,
}

impl ProbeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            target: TargetParams::from_matches(m),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<ProbeParams> for ProbeArgs {
    fn from(p: ProbeParams) -> Self {
        Self {
            target: p.target.into(),
            output: p.output,
        }
    }
}

pub struct SymbolsParams {
    pub target: TargetParams,
    pub json: bool,
}

impl SymbolsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            target: TargetParams::from_matches(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<SymbolsParams> for SymbolsArgs {
    fn from(p: SymbolsParams) -> Self {
        Self {
            target: p.target.into(),
            json: p.json,
        }
    }
}

pub struct TypesParams {
    pub config: Option<PathBuf>,
    pub toolchain: Option<String>,
    pub json: bool,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            toolchain: m.get_one::<String>("toolchain").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            target: TargetArgs {
                config: p.config,
                overrides: TargetSettings {
                    toolchain: p.toolchain,
                    ..Default::default()
                },
            },
            json: p.json,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
