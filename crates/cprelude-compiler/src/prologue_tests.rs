use crate::Error;
use crate::emit::Dialect;
use crate::primitives::{Linkage, Primitive};
use crate::prologue::Prologue;
use crate::signature::Signature;
use crate::toolchain::{Toolchain, ToolchainId, ToolchainSignals};

#[test]
fn unknown_toolchain_builds_nothing() {
    let err = Prologue::builder(ToolchainId::Unknown).build().unwrap_err();
    assert!(matches!(err, Error::UnresolvedToolchain));
}

#[test]
fn no_signals_builds_nothing() {
    let id = ToolchainSignals::default().identify();
    assert!(matches!(
        Prologue::builder(id).build(),
        Err(Error::UnresolvedToolchain)
    ));
}

#[test]
fn signals_select_toolchain() {
    let signals = ToolchainSignals {
        msvc_version: None,
        gnu_major: Some(13),
    };
    let prologue = Prologue::builder(signals.identify()).build().unwrap();
    assert_eq!(prologue.toolchain(), Toolchain::Gnu);
    assert_eq!(prologue.dialect(), Dialect::Cxx);
}

#[test]
fn invalid_header_guard() {
    let err = Prologue::builder(ToolchainId::Msvc)
        .header_guard("prelude.h")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(ref g) if g == "prelude.h"));
}

#[test]
fn invalid_allocator() {
    let err = Prologue::builder(ToolchainId::Msvc)
        .allocator("operator new")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(_)));
}

#[test]
fn symbols_follow_toolchain() {
    let gnu = Prologue::builder(ToolchainId::Gnu { major: 5 })
        .build()
        .unwrap();
    let fill = gnu.symbols().resolve(Primitive::FillMemory);
    assert_eq!(fill.name, "__builtin_memset");
    assert_eq!(fill.linkage, Linkage::Builtin);

    let msvc = Prologue::builder(ToolchainId::Msvc).build().unwrap();
    assert_eq!(
        msvc.symbols().resolve(Primitive::FillMemory).linkage,
        Linkage::RuntimeHeader
    );
}

#[test]
fn fn_refs_registered_after_build_are_emitted() {
    let mut prologue = Prologue::builder(ToolchainId::Msvc)
        .opaque_fn_ref(false)
        .build()
        .unwrap();
    assert!(prologue.fn_refs().is_empty());

    let sig: Signature = "void(i1)".parse().unwrap();
    let id = prologue.intern_fn_ref(sig.clone());
    assert_eq!(prologue.intern_fn_ref(sig), id);

    assert!(
        prologue
            .emit()
            .contains("typedef void (*fn_void_i1)(i1);")
    );
}

#[test]
fn opaque_handle_present_by_default() {
    let prologue = Prologue::builder(ToolchainId::Msvc).build().unwrap();
    let id = prologue.fn_refs().opaque().unwrap();
    let target: Signature = "i32(u8*, u64)".parse().unwrap();
    assert!(prologue.fn_refs().check_assign(id, &target).is_ok());
}

#[test]
fn header_guard_cannot_shadow_prologue_names() {
    for guard in [
        "i32", "u8", "int32_t", "anyFn", "fn_i32_i32", "__builtin_memset", "memset", "calloc",
        "cprelude_probe",
    ] {
        let err = Prologue::builder(ToolchainId::Gnu { major: 9 })
            .header_guard(guard)
            .build()
            .unwrap_err();
        assert!(
            matches!(err, Error::InvalidIdentifier(ref g) if g == guard),
            "{guard}"
        );
    }
}

#[test]
fn header_guard_cannot_shadow_custom_allocator() {
    let err = Prologue::builder(ToolchainId::Msvc)
        .allocator("rt_alloc")
        .header_guard("rt_alloc")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidIdentifier(ref g) if g == "rt_alloc"));
}

#[test]
fn allocator_cannot_reuse_prologue_names() {
    for allocator in ["anyFn", "i32", "uint64_t", "fn_alloc", "memset", "__builtin_malloc"] {
        let err = Prologue::builder(ToolchainId::Gnu { major: 9 })
            .allocator(allocator)
            .build()
            .unwrap_err();
        assert!(
            matches!(err, Error::InvalidIdentifier(ref a) if a == allocator),
            "{allocator}"
        );
    }
}
