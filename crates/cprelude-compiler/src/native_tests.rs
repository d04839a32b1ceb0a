//! Compile and link the generated check unit with the host C/C++ compiler.
//!
//! Skipped (with a note on stderr) when `cc` / `c++` is not on PATH.

use std::process::Command;

use crate::emit::Dialect;
use crate::prologue::Prologue;
use crate::signature::Signature;
use crate::toolchain::ToolchainId;

/// Allocator defined by the test itself so the link needs nothing from libc.
const ALLOCATOR: &str = "test_alloc";

fn compiler_available(compiler: &str) -> bool {
    Command::new(compiler)
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

fn unit(dialect: Dialect) -> String {
    let prologue = Prologue::builder(ToolchainId::Gnu { major: 9 })
        .dialect(dialect)
        .allocator(ALLOCATOR)
        .fn_ref("i32(i32, u8*)".parse::<Signature>().unwrap())
        .build()
        .unwrap();

    let linkage = match dialect {
        Dialect::C => "",
        Dialect::Cxx => "extern \"C\" ",
    };
    let mut source = prologue.probe().unwrap();
    source.push_str(&format!(
        "\n{linkage}void* {ALLOCATOR}(u32 size) {{ static u8 block[64]; (void)size; return block; }}\n"
    ));
    source.push_str("int main(void) { u8 buffer[4]; return cprelude_probe(buffer, 4) == 0; }\n");
    source
}

fn compile_and_link(compiler: &str, std: &str, file_name: &str, source: &str) {
    if !compiler_available(compiler) {
        eprintln!("skipping: `{compiler}` not found");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join(file_name);
    std::fs::write(&src, source).unwrap();
    let exe = dir.path().join("unit");

    let out = Command::new(compiler)
        .arg(format!("-std={std}"))
        .arg(&src)
        .arg("-o")
        .arg(&exe)
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "{compiler} rejected the unit:\n{}\n--- source ---\n{source}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(exe.exists());
}

#[test]
fn gnu_c_unit_compiles_and_links() {
    compile_and_link("cc", "c11", "unit.c", &unit(Dialect::C));
}

#[test]
fn gnu_cxx_unit_compiles_and_links() {
    compile_and_link("c++", "c++17", "unit.cpp", &unit(Dialect::Cxx));
}
