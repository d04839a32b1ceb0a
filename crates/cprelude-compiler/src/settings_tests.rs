use std::io::Write;

use indoc::indoc;

use crate::Error;
use crate::emit::Dialect;
use crate::primitives::Primitive;
use crate::settings::TargetSettings;
use crate::toolchain::{Toolchain, ToolchainId};

#[test]
fn parse_full_settings() {
    let settings = TargetSettings::from_toml_str(indoc! {r#"
        toolchain = "gcc-9"
        dialect = "c"
        allocator = "GC_malloc"
        opaque-fn-ref = false
        header-guard = "RUNTIME_PRELUDE_H"
        fn-refs = ["i32(i32)", "void(void*, u32)"]
    "#})
    .unwrap();

    assert_eq!(settings.toolchain_id().unwrap(), ToolchainId::Gnu { major: 9 });

    let prologue = settings.into_builder().unwrap().build().unwrap();
    assert_eq!(prologue.toolchain(), Toolchain::Gnu);
    assert_eq!(prologue.dialect(), Dialect::C);
    assert_eq!(
        prologue.symbols().resolve(Primitive::Allocate).name,
        "GC_malloc"
    );
    assert_eq!(prologue.fn_refs().len(), 2);
    assert_eq!(prologue.fn_refs().opaque(), None);

    let output = prologue.emit();
    assert!(output.contains("#ifndef RUNTIME_PRELUDE_H"));
    assert!(output.contains("typedef void (*fn_void_voidp_u32)(void*, u32);"));
}

#[test]
fn empty_settings_are_unresolved() {
    let settings = TargetSettings::from_toml_str("").unwrap();
    assert_eq!(settings, TargetSettings::default());

    let err = settings.into_builder().unwrap().build().unwrap_err();
    assert!(matches!(err, Error::UnresolvedToolchain));
}

#[test]
fn unknown_key_rejected() {
    let err = TargetSettings::from_toml_str("compiler = \"gcc\"").unwrap_err();
    assert!(matches!(err, Error::Settings(_)));
}

#[test]
fn bad_values_surface_on_into_builder() {
    let settings = TargetSettings::from_toml_str("toolchain = \"tcc\"").unwrap();
    assert!(matches!(
        settings.into_builder().unwrap_err(),
        Error::UnknownToolchain(_)
    ));

    let settings =
        TargetSettings::from_toml_str("toolchain = \"msvc\"\ndialect = \"fortran\"").unwrap();
    assert!(matches!(
        settings.into_builder().unwrap_err(),
        Error::UnknownDialect(_)
    ));

    let settings =
        TargetSettings::from_toml_str("toolchain = \"msvc\"\nfn-refs = [\"i32(\"]").unwrap();
    assert!(matches!(
        settings.into_builder().unwrap_err(),
        Error::InvalidSignature { .. }
    ));
}

#[test]
fn merge_overrides_and_accumulates() {
    let base = TargetSettings {
        toolchain: Some("msvc".into()),
        dialect: Some("c".into()),
        fn_refs: vec!["i32(i32)".into()],
        ..Default::default()
    };
    let overrides = TargetSettings {
        toolchain: Some("clang".into()),
        banner: Some(false),
        fn_refs: vec!["void()".into()],
        ..Default::default()
    };

    let merged = base.merge(overrides);
    assert_eq!(merged.toolchain.as_deref(), Some("clang"));
    assert_eq!(merged.dialect.as_deref(), Some("c"));
    assert_eq!(merged.banner, Some(false));
    assert_eq!(merged.fn_refs, ["i32(i32)", "void()"]);
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "toolchain = \"msvc\"").unwrap();

    let settings = TargetSettings::load(file.path()).unwrap();
    assert_eq!(settings.toolchain_id().unwrap(), ToolchainId::Msvc);
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = TargetSettings::load(&path).unwrap_err();
    assert!(matches!(err, Error::Io { path: ref p, .. } if *p == path));
}
