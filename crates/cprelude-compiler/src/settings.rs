//! Target settings file (`cprelude.toml`).
//!
//! ```toml
//! toolchain = "gcc-9"
//! dialect = "c"
//! allocator = "GC_malloc"
//! opaque-fn-ref = false
//! header-guard = "RUNTIME_PRELUDE_H"
//! fn-refs = ["i32(i32)", "void(void*, u32)"]
//! ```
//!
//! Every key is optional. A missing toolchain resolves to
//! [`ToolchainId::Unknown`], which fails at build time like any other
//! unrecognized toolchain.

use std::path::Path;

use serde::Deserialize;

use crate::emit::Dialect;
use crate::prologue::PrologueBuilder;
use crate::signature::Signature;
use crate::toolchain::ToolchainId;
use crate::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TargetSettings {
    pub toolchain: Option<String>,
    pub dialect: Option<String>,
    pub allocator: Option<String>,
    pub opaque_fn_ref: Option<bool>,
    pub header_guard: Option<String>,
    pub banner: Option<bool>,
    #[serde(default)]
    pub fn_refs: Vec<String>,
}

impl TargetSettings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded target settings from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Layer `overrides` on top of `self`: set keys win, function
    /// references accumulate.
    pub fn merge(mut self, overrides: TargetSettings) -> Self {
        self.toolchain = overrides.toolchain.or(self.toolchain);
        self.dialect = overrides.dialect.or(self.dialect);
        self.allocator = overrides.allocator.or(self.allocator);
        self.opaque_fn_ref = overrides.opaque_fn_ref.or(self.opaque_fn_ref);
        self.header_guard = overrides.header_guard.or(self.header_guard);
        self.banner = overrides.banner.or(self.banner);
        self.fn_refs.extend(overrides.fn_refs);
        self
    }

    pub fn toolchain_id(&self) -> Result<ToolchainId> {
        match &self.toolchain {
            Some(name) => name.parse(),
            None => Ok(ToolchainId::Unknown),
        }
    }

    /// Parse every value and produce a builder ready to `build()`.
    pub fn into_builder(self) -> Result<PrologueBuilder> {
        let mut builder = PrologueBuilder::new(self.toolchain_id()?);

        if let Some(dialect) = &self.dialect {
            builder = builder.dialect(dialect.parse::<Dialect>()?);
        }
        if let Some(allocator) = self.allocator {
            builder = builder.allocator(allocator);
        }
        if let Some(opaque) = self.opaque_fn_ref {
            builder = builder.opaque_fn_ref(opaque);
        }
        if let Some(guard) = self.header_guard {
            builder = builder.header_guard(guard);
        }
        if let Some(banner) = self.banner {
            builder = builder.banner(banner);
        }
        for text in &self.fn_refs {
            builder = builder.fn_ref(text.parse::<Signature>()?);
        }
        Ok(builder)
    }
}
