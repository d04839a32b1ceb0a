//! Function-reference types.
//!
//! Generated code stores callables through a closed set of typed pointer
//! typedefs, one per signature the generator actually uses. The opaque
//! handle `anyFn` remains for callables whose signature is only known at the
//! call site; calls through it must bring an explicit descriptor.

use std::collections::{BTreeSet, HashMap};

use cprelude_core::CanonicalType;

use crate::signature::{CType, Signature};
use crate::{Error, Result};

/// Typedef name of the opaque handle.
pub const OPAQUE_FN_REF: &str = "anyFn";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FnRefId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnRefKind {
    /// Exactly one signature.
    Typed,
    /// Any parameter list, `i32` return.
    Opaque,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FnRef {
    pub id: FnRefId,
    pub name: String,
    pub signature: Signature,
    pub kind: FnRefKind,
}

/// Interned function-reference typedefs, in registration order.
#[derive(Clone, Debug, Default)]
pub struct FnRefTable {
    refs: Vec<FnRef>,
    by_signature: HashMap<Signature, FnRefId>,
    opaque: Option<FnRefId>,
    /// Names already used (for collision avoidance)
    used_names: BTreeSet<String>,
}

impl FnRefTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table that starts with the opaque handle registered.
    pub fn with_opaque() -> Self {
        let mut table = Self::new();
        table.enable_opaque();
        table
    }

    /// Register the opaque handle, once.
    pub fn enable_opaque(&mut self) -> FnRefId {
        if let Some(id) = self.opaque {
            return id;
        }
        let id = self.push(
            OPAQUE_FN_REF.to_string(),
            Signature::variadic(CanonicalType::I32.into(), Vec::new()),
            FnRefKind::Opaque,
        );
        self.opaque = Some(id);
        id
    }

    pub fn opaque(&self) -> Option<FnRefId> {
        self.opaque
    }

    /// Return the typed reference for `signature`, registering it on first use.
    pub fn intern(&mut self, signature: Signature) -> FnRefId {
        if let Some(&id) = self.by_signature.get(&signature) {
            return id;
        }
        let name = self.unique_name(&signature.mangle());
        let id = self.push(name, signature.clone(), FnRefKind::Typed);
        self.by_signature.insert(signature, id);
        id
    }

    pub fn get(&self, id: FnRefId) -> Result<&FnRef> {
        self.refs
            .get(id.0 as usize)
            .ok_or(Error::UnknownFnRef(id.0))
    }

    pub fn lookup(&self, signature: &Signature) -> Option<&FnRef> {
        let id = self.by_signature.get(signature)?;
        self.refs.get(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FnRef> {
        self.refs.iter()
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Check that a function with `source` signature may be stored in `id`.
    pub fn check_assign(&self, id: FnRefId, source: &Signature) -> Result<()> {
        let fn_ref = self.get(id)?;
        match fn_ref.kind {
            FnRefKind::Typed if fn_ref.signature == *source => Ok(()),
            FnRefKind::Typed => Err(Error::FnRefSignatureMismatch {
                name: fn_ref.name.clone(),
                expected: fn_ref.signature.to_string(),
                found: source.to_string(),
            }),
            FnRefKind::Opaque if fn_ref.signature.ret == source.ret => Ok(()),
            FnRefKind::Opaque => Err(Error::FnRefReturnMismatch {
                name: fn_ref.name.clone(),
                expected: fn_ref.signature.ret.to_string(),
                found: source.ret.to_string(),
            }),
        }
    }

    /// Check a call through a typed reference.
    pub fn check_call(&self, id: FnRefId, args: &[CType]) -> Result<()> {
        let fn_ref = self.get(id)?;
        if fn_ref.kind == FnRefKind::Opaque {
            return Err(Error::OpaqueCallWithoutDescriptor(fn_ref.name.clone()));
        }
        check_args(&fn_ref.name, &fn_ref.signature, args)
    }

    /// Check a call through any reference, using `descriptor` as the callee's
    /// real signature.
    ///
    /// For a typed reference the descriptor must equal its signature.
    pub fn check_call_with(
        &self,
        id: FnRefId,
        descriptor: &Signature,
        args: &[CType],
    ) -> Result<()> {
        self.check_assign(id, descriptor)?;
        let fn_ref = self.get(id)?;
        check_args(&fn_ref.name, descriptor, args)
    }

    fn push(&mut self, name: String, signature: Signature, kind: FnRefKind) -> FnRefId {
        let id = FnRefId(self.refs.len() as u32);
        log::trace!("fn ref #{} {name}: {signature}", id.0);
        self.used_names.insert(name.clone());
        self.refs.push(FnRef {
            id,
            name,
            signature,
            kind,
        });
        id
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.used_names.contains(base) {
            return base.to_string();
        }

        let mut counter = 2;
        loop {
            let name = format!("{}_{}", base, counter);
            if !self.used_names.contains(&name) {
                return name;
            }
            counter += 1;
        }
    }
}

fn check_args(name: &str, signature: &Signature, args: &[CType]) -> Result<()> {
    if signature.accepts(args) {
        return Ok(());
    }
    let found = args
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::FnRefArgumentMismatch {
        name: name.to_string(),
        expected: signature.render_params(),
        found,
    })
}
