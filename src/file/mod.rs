//! Byte-level access to SPIR-V module data.
//!
//! Sourcing the bytes (files, memory maps, network buffers) is the caller's responsibility;
//! this module only turns an in-memory buffer into a stream of little-endian words.
//!
//! # Key Components
//!
//! - [`crate::file::parser::Parser`] - Bounds-checked cursor over a byte slice
//! - [`crate::file::io`] - Primitive little-endian conversions used by the parser

pub mod io;
pub mod parser;
