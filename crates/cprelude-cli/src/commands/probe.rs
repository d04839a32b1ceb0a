use std::path::PathBuf;

use super::target::{TargetArgs, exit_with, prologue_or_exit, write_output};

pub struct ProbeArgs {
    pub target: TargetArgs,
    pub output: Option<PathBuf>,
}

pub fn run(args: ProbeArgs) {
    let prologue = prologue_or_exit(args.target);
    let unit = prologue.probe().unwrap_or_else(|e| exit_with(e));
    write_output(args.output.as_deref(), &unit);
}
