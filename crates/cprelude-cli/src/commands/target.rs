//! Target resolution shared by every command: settings file, flag overlay,
//! prologue, and where the result goes.

use std::fs;
use std::path::{Path, PathBuf};

use cprelude_compiler::{Prologue, Result, TargetSettings};

pub struct TargetArgs {
    pub config: Option<PathBuf>,
    pub overrides: TargetSettings,
}

impl TargetArgs {
    /// The `--config` file (if any) with the command-line flags on top.
    pub fn settings(self) -> Result<TargetSettings> {
        let base = match &self.config {
            Some(path) => TargetSettings::load(path)?,
            None => TargetSettings::default(),
        };
        Ok(base.merge(self.overrides))
    }

    pub fn prologue(self) -> Result<Prologue> {
        self.settings()?.into_builder()?.build()
    }
}

pub fn prologue_or_exit(target: TargetArgs) -> Prologue {
    target.prologue().unwrap_or_else(|e| exit_with(e))
}

/// Print `text` or write it to `output`.
pub fn write_output(output: Option<&Path>, text: &str) {
    let Some(path) = output else {
        print!("{}", text);
        return;
    };

    if let Err(e) = fs::write(path, text) {
        eprintln!("error: cannot write {}: {}", path.display(), e);
        std::process::exit(1);
    }
    log::info!("wrote {}", path.display());
}

pub fn exit_with(e: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", e);
    std::process::exit(1);
}
