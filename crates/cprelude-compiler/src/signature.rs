//! C types and function signatures, spelled with canonical aliases.
//!
//! Textual form, used by the CLI and target settings:
//! - types: `void`, `i32`, `u8*`, `void**`
//! - signatures: `ret(param, param)`, `i32(...)`, `void*(u32)`

use std::fmt;
use std::str::FromStr;

use cprelude_core::CanonicalType;

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CType {
    Void,
    Scalar(CanonicalType),
    Ptr(Box<CType>),
}

impl CType {
    pub fn ptr(inner: CType) -> Self {
        Self::Ptr(Box::new(inner))
    }

    pub fn void_ptr() -> Self {
        Self::ptr(Self::Void)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Identifier-safe encoding used in generated typedef names.
    pub fn mangle(&self) -> String {
        match self {
            Self::Void => "void".to_string(),
            Self::Scalar(ty) => ty.alias().to_string(),
            Self::Ptr(inner) => format!("{}p", inner.mangle()),
        }
    }
}

impl From<CanonicalType> for CType {
    fn from(ty: CanonicalType) -> Self {
        Self::Scalar(ty)
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Scalar(ty) => f.write_str(ty.alias()),
            Self::Ptr(inner) => write!(f, "{inner}*"),
        }
    }
}

impl FromStr for CType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut base = s.trim();
        let mut depth = 0;
        while let Some(rest) = base.strip_suffix('*') {
            base = rest.trim_end();
            depth += 1;
        }

        let mut ty = match base {
            "void" => CType::Void,
            other => other
                .parse::<CanonicalType>()
                .map(CType::Scalar)
                .map_err(|_| Error::InvalidType(s.trim().to_string()))?,
        };
        for _ in 0..depth {
            ty = CType::ptr(ty);
        }
        Ok(ty)
    }
}

/// A function signature: return type, fixed parameters, optional `...` tail.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub ret: CType,
    pub params: Vec<CType>,
    pub variadic: bool,
}

impl Signature {
    pub fn new(ret: CType, params: Vec<CType>) -> Self {
        Self {
            ret,
            params,
            variadic: false,
        }
    }

    pub fn variadic(ret: CType, params: Vec<CType>) -> Self {
        Self {
            ret,
            params,
            variadic: true,
        }
    }

    /// Whether a call with these argument types matches the parameter list.
    pub fn accepts(&self, args: &[CType]) -> bool {
        if self.variadic {
            args.len() >= self.params.len() && self.params.iter().zip(args).all(|(p, a)| p == a)
        } else {
            self.params.as_slice() == args
        }
    }

    /// Name for a typedef of a pointer to this signature, e.g. `fn_i32_i32_voidp`.
    pub fn mangle(&self) -> String {
        let mut name = format!("fn_{}", self.ret.mangle());
        for param in &self.params {
            name.push('_');
            name.push_str(&param.mangle());
        }
        if self.variadic {
            name.push_str("_va");
        }
        name
    }

    /// Parameter list between parentheses, with canonical aliases.
    ///
    /// An empty non-variadic list renders as `void` so that C reads it as a
    /// prototype.
    pub fn render_params(&self) -> String {
        let mut parts: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        if self.variadic {
            parts.push("...".to_string());
        }
        if parts.is_empty() {
            return "void".to_string();
        }
        parts.join(", ")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        if self.variadic {
            parts.push("...".to_string());
        }
        write!(f, "{}({})", self.ret, parts.join(", "))
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidSignature {
            input: s.to_string(),
            reason,
        };

        let text = s.trim();
        let open = text.find('(').ok_or_else(|| invalid("missing `(`"))?;
        let inner = text[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| invalid("missing closing `)`"))?;
        if inner.contains(['(', ')']) {
            return Err(invalid("nested parentheses"));
        }

        let ret_text = text[..open].trim();
        if ret_text.is_empty() {
            return Err(invalid("missing return type"));
        }
        let ret: CType = ret_text.parse()?;

        let inner = inner.trim();
        if inner.is_empty() || inner == "void" {
            return Ok(Self::new(ret, Vec::new()));
        }

        let pieces: Vec<&str> = inner.split(',').map(str::trim).collect();
        let (fixed, variadic) = match pieces.split_last() {
            Some((&"...", fixed)) => (fixed, true),
            _ => (pieces.as_slice(), false),
        };

        let mut params = Vec::with_capacity(fixed.len());
        for piece in fixed {
            if *piece == "..." {
                return Err(invalid("`...` must be the last parameter"));
            }
            let param: CType = piece.parse()?;
            if param.is_void() {
                return Err(invalid("`void` cannot be a parameter type"));
            }
            params.push(param);
        }

        Ok(Self {
            ret,
            params,
            variadic,
        })
    }
}
