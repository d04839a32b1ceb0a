use cprelude_core::CanonicalType;

use crate::Error;
use crate::fnref::{FnRefId, FnRefKind, FnRefTable, OPAQUE_FN_REF};
use crate::signature::{CType, Signature};

fn sig(s: &str) -> Signature {
    s.parse().unwrap()
}

fn ty(s: &str) -> CType {
    s.parse().unwrap()
}

#[test]
fn new_table_is_empty() {
    let table = FnRefTable::new();
    assert!(table.is_empty());
    assert_eq!(table.opaque(), None);
}

#[test]
fn intern_deduplicates() {
    let mut table = FnRefTable::new();
    let a = table.intern(sig("i32(i32, void*)"));
    let b = table.intern(sig("i32(i32, void*)"));
    let c = table.intern(sig("void(u8*)"));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(a).unwrap().name, "fn_i32_i32_voidp");
    assert_eq!(table.get(c).unwrap().name, "fn_void_u8p");
}

#[test]
fn opaque_handle_registered_once() {
    let mut table = FnRefTable::with_opaque();
    let id = table.opaque().unwrap();
    assert_eq!(table.enable_opaque(), id);
    assert_eq!(table.len(), 1);

    let handle = table.get(id).unwrap();
    assert_eq!(handle.name, OPAQUE_FN_REF);
    assert_eq!(handle.kind, FnRefKind::Opaque);
    assert_eq!(handle.signature.to_string(), "i32(...)");
}

#[test]
fn opaque_accepts_any_params_with_i32_return() {
    let table = FnRefTable::with_opaque();
    let id = table.opaque().unwrap();

    for source in ["i32()", "i32(i64, u8*)", "i32(u8*, ...)", "i32(i1)"] {
        assert!(table.check_assign(id, &sig(source)).is_ok(), "{source}");
    }
}

#[test]
fn opaque_rejects_other_returns() {
    let table = FnRefTable::with_opaque();
    let id = table.opaque().unwrap();

    for source in ["void()", "i64(i32)", "u32(i32)", "i32*()"] {
        let err = table.check_assign(id, &sig(source)).unwrap_err();
        assert!(matches!(err, Error::FnRefReturnMismatch { .. }), "{source}");
    }
}

#[test]
fn typed_requires_exact_signature() {
    let mut table = FnRefTable::new();
    let id = table.intern(sig("i32(i32)"));

    assert!(table.check_assign(id, &sig("i32(i32)")).is_ok());
    let err = table.check_assign(id, &sig("i32(u32)")).unwrap_err();
    assert!(matches!(
        err,
        Error::FnRefSignatureMismatch { ref expected, ref found, .. }
            if expected == "i32(i32)" && found == "i32(u32)"
    ));
}

#[test]
fn typed_call_checks_args() {
    let mut table = FnRefTable::new();
    let id = table.intern(sig("void(void*, u32)"));

    assert!(table.check_call(id, &[ty("void*"), ty("u32")]).is_ok());
    let err = table.check_call(id, &[ty("void*")]).unwrap_err();
    assert!(matches!(err, Error::FnRefArgumentMismatch { ref found, .. } if found == "void*"));
}

#[test]
fn opaque_call_needs_descriptor() {
    let table = FnRefTable::with_opaque();
    let id = table.opaque().unwrap();

    let err = table.check_call(id, &[ty("i32")]).unwrap_err();
    assert!(matches!(err, Error::OpaqueCallWithoutDescriptor(ref n) if n == "anyFn"));

    assert!(table.check_call_with(id, &sig("i32(i32)"), &[ty("i32")]).is_ok());
    assert!(
        table
            .check_call_with(id, &sig("i32(i32)"), &[ty("u8")])
            .is_err()
    );
    assert!(
        table
            .check_call_with(id, &sig("void(i32)"), &[ty("i32")])
            .is_err()
    );
}

/// A distinct signature for every `n`: its base-9 digits pick the parameters.
fn nth_signature(mut n: u32) -> Signature {
    let mut params = Vec::new();
    while n > 0 {
        params.push(CanonicalType::ALL[(n % 9) as usize].into());
        n /= 9;
    }
    Signature::new(CType::Void, params)
}

#[test]
fn ids_past_u16_range_do_not_wrap() {
    let mut table = FnRefTable::new();
    let count = u32::from(u16::MAX) + 2;
    for n in 0..count {
        assert_eq!(table.intern(nth_signature(n)), FnRefId(n));
    }

    let last = FnRefId(count - 1);
    assert_eq!(table.get(last).unwrap().signature, nth_signature(count - 1));
    assert_eq!(table.get(FnRefId(0)).unwrap().signature, nth_signature(0));
    assert_eq!(table.len(), count as usize);
}

#[test]
fn unknown_id() {
    let table = FnRefTable::new();
    assert!(matches!(
        table.get(FnRefId(3)).unwrap_err(),
        Error::UnknownFnRef(3)
    ));
}

#[test]
fn lookup_by_signature() {
    let mut table = FnRefTable::with_opaque();
    table.intern(sig("u64(u64, u64)"));

    assert_eq!(
        table.lookup(&sig("u64(u64, u64)")).unwrap().name,
        "fn_u64_u64_u64"
    );
    // the opaque handle is not a typed entry
    assert!(table.lookup(&sig("i32(...)")).is_none());
}
