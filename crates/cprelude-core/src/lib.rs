#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core vocabulary shared by the cprelude crates.
//!
//! - `width`: the nine canonical aliases (`i1`, `i8` .. `u64`) and the
//!   fixed-width integer types underneath them
//! - `utils`: C identifier helpers
//! - `colors`: ANSI palette for highlighted C output

pub mod colors;
pub mod utils;
pub mod width;


pub use colors::Colors;
pub use width::{CanonicalType, IntType, ParseTypeError};
