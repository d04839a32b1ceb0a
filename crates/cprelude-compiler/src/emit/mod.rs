//! Prologue emission.
//!
//! Renders the resolved target as C/C++ declarations:
//! - width typedefs in the toolchain's native spelling
//! - canonical aliases `i1` .. `u64`
//! - function-reference typedefs
//! - unmangled extern declarations for the runtime

mod config;
mod emitter;
mod render;


pub use config::{Config, Dialect};
pub use emitter::Emitter;
