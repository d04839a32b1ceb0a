use cprelude_core::{CanonicalType, IntType};

use crate::Error;
use crate::signature::{CType, Signature};

fn i32_() -> CType {
    CType::Scalar(CanonicalType::I32)
}

#[test]
fn parse_scalar_and_pointer_types() {
    assert_eq!("i32".parse::<CType>().unwrap(), i32_());
    assert_eq!("void".parse::<CType>().unwrap(), CType::Void);
    assert_eq!("void*".parse::<CType>().unwrap(), CType::void_ptr());
    assert_eq!(
        "u8 * *".parse::<CType>().unwrap(),
        CType::ptr(CType::ptr(CType::Scalar(IntType::U8.into())))
    );
}

#[test]
fn parse_type_rejects_native_spelling() {
    let err = "int".parse::<CType>().unwrap_err();
    assert!(matches!(err, Error::InvalidType(ref t) if t == "int"));
}

#[test]
fn type_display_and_mangle() {
    let ty: CType = "u8**".parse().unwrap();
    assert_eq!(ty.to_string(), "u8**");
    assert_eq!(ty.mangle(), "u8pp");
}

#[test]
fn parse_signature() {
    let sig: Signature = "void*(void*, i32, u32)".parse().unwrap();
    assert_eq!(sig.ret, CType::void_ptr());
    assert_eq!(sig.params.len(), 3);
    assert!(!sig.variadic);
    assert_eq!(sig.to_string(), "void*(void*, i32, u32)");
}

#[test]
fn parse_empty_and_void_params() {
    let a: Signature = "i32()".parse().unwrap();
    let b: Signature = "i32(void)".parse().unwrap();
    assert_eq!(a, b);
    assert!(a.params.is_empty());
    assert_eq!(a.render_params(), "void");
}

#[test]
fn parse_variadic() {
    let any: Signature = "i32(...)".parse().unwrap();
    assert!(any.variadic);
    assert!(any.params.is_empty());
    assert_eq!(any.render_params(), "...");

    let fmt: Signature = "i32(u8*, ...)".parse().unwrap();
    assert_eq!(fmt.params.len(), 1);
    assert!(fmt.variadic);
    assert_eq!(fmt.mangle(), "fn_i32_u8p_va");
}

#[test]
fn parse_signature_errors() {
    for (input, reason) in [
        ("i32", "missing `(`"),
        ("i32(i32", "missing closing `)`"),
        ("(i32)", "missing return type"),
        ("i32(..., i32)", "`...` must be the last parameter"),
        ("i32(i32, void)", "`void` cannot be a parameter type"),
        ("i32(i32(i32))", "nested parentheses"),
    ] {
        match input.parse::<Signature>() {
            Err(Error::InvalidSignature { reason: r, .. }) => assert_eq!(r, reason, "{input}"),
            other => panic!("{input}: unexpected {other:?}"),
        }
    }
}

#[test]
fn parse_signature_bad_param_type() {
    let err = "i32(float)".parse::<Signature>().unwrap_err();
    assert!(matches!(err, Error::InvalidType(ref t) if t == "float"));
}

#[test]
fn accepts_exact_params() {
    let sig: Signature = "void(i32, u8*)".parse().unwrap();
    let args = vec![i32_(), "u8*".parse().unwrap()];
    assert!(sig.accepts(&args));
    assert!(!sig.accepts(&args[..1]));
    assert!(!sig.accepts(&[i32_(), i32_()]));
}

#[test]
fn accepts_variadic_tail() {
    let sig: Signature = "i32(u8*, ...)".parse().unwrap();
    let fmt: CType = "u8*".parse().unwrap();
    assert!(sig.accepts(&[fmt.clone()]));
    assert!(sig.accepts(&[fmt, i32_(), CType::void_ptr()]));
    assert!(!sig.accepts(&[]));
}
