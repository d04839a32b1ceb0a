pub mod emit;
pub mod probe;
pub mod symbols;
pub mod target;
pub mod types;
