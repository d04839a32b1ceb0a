//! Configuration types for prologue emission.

use std::fmt;
use std::str::FromStr;

use cprelude_core::Colors;
use serde::Serialize;

use crate::{Error, Result};

/// Source language of the generated output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Dialect {
    #[serde(rename = "c")]
    C,
    /// C++, the language the translator emits by default.
    #[default]
    #[serde(rename = "c++")]
    Cxx,
}

impl Dialect {
    /// Native spelling of the boolean behind `i1`.
    pub fn bool_spelling(self) -> &'static str {
        match self {
            Self::C => "_Bool",
            Self::Cxx => "bool",
        }
    }

    /// Storage-class prefix for a declaration linked without name mangling.
    pub fn unmangled_extern(self) -> &'static str {
        match self {
            Self::C => "extern",
            Self::Cxx => "extern \"C\"",
        }
    }

    /// Whether `(...)` with no fixed parameter is accepted.
    ///
    /// C before C23 spells "any arguments" as an empty, unprototyped list.
    pub fn allows_bare_ellipsis(self) -> bool {
        matches!(self, Self::Cxx)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cxx => "c++",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "c++" | "cxx" | "cpp" => Ok(Self::Cxx),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}

/// Configuration for prologue emission.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) dialect: Dialect,
    /// Include guard macro; no guard when `None`
    pub(crate) header_guard: Option<String>,
    /// Whether to start with a comment naming the target
    pub(crate) banner: bool,
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            header_guard: None,
            banner: true,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialect(mut self, value: Dialect) -> Self {
        self.dialect = value;
        self
    }

    /// Set the include guard. The name is used verbatim and must already be
    /// a valid identifier.
    pub fn header_guard(mut self, value: Option<String>) -> Self {
        self.header_guard = value;
        self
    }

    pub fn banner(mut self, value: bool) -> Self {
        self.banner = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn get_dialect(&self) -> Dialect {
        self.dialect
    }
}
