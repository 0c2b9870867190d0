// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # spirvscope
//!
//! A schema-driven decoder and disassembler for SPIR-V binary modules, in pure Rust.
//!
//! `spirvscope` reads the little-endian word stream of a SPIR-V module, decodes every
//! instruction against a static grammar, resolves context-dependent literals through the types
//! the module declares, and renders the result as disassembly text.
//!
//! ## Features
//!
//! - **Grammar as data** - Opcodes, enumerations and composite operands live in static tables
//! - **Typed operands** - Every operand decodes to a closed [`disassembler::Value`] variant
//! - **Width-aware literals** - 64-bit constants consume two words, signedness follows the type
//! - **Predictable failure** - Truncation, bad magic and undeclared types are typed errors
//! - **Configurable policy** - Strict and lenient handling of questionable input
//!
//! ## Quick Start
//!
//! ```rust
//! use spirvscope::prelude::*;
//!
//! // Header, OpTypeInt %1 32 1, OpConstant %1 %2 -1
//! let words: [u32; 13] = [
//!     0x0723_0203, 0x0001_0000, 0, 3, 0,
//!     0x0004_0015, 1, 32, 1,
//!     0x0004_002B, 1, 2, 0xFFFF_FFFF,
//! ];
//! let bytes: Vec<u8> = words.iter().flat_map(|word| word.to_le_bytes()).collect();
//!
//! let module = Module::from_mem(&bytes)?;
//! assert_eq!(module.instructions().len(), 2);
//! assert!(module.to_text()?.ends_with("%2 = OpConstant %1 -1\n"));
//! # Ok::<(), spirvscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`module`] - Header parsing and the instruction loop, the main entry point
//! - [`disassembler`] - Operand cursor, type registry, instruction decoding and rendering
//! - [`schema`] - The static instruction grammar
//! - [`DecoderConfig`] - Decoding policy
//! - [`Error`] and [`Result`] - Error handling
//!
//! Sourcing the bytes is up to the caller: [`Module::from_mem`] takes a slice,
//! [`Module::from_reader`] drains any [`std::io::Read`].

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use spirvscope::prelude::*;
///
/// let bytes: Vec<u8> = [0x0723_0203_u32, 0x0001_0000, 0, 1, 0]
///     .iter()
///     .flat_map(|word| word.to_le_bytes())
///     .collect();
/// let module = Module::from_mem(&bytes)?;
/// assert!(module.instructions().is_empty());
/// # Ok::<(), spirvscope::Error>(())
/// ```
pub mod prelude;

/// Decoding policy.
pub mod config;

/// The static instruction grammar the decoder consults.
pub mod schema;

/// Instruction decoding and disassembly.
///
/// # Key Types
///
/// - [`disassembler::Decoder`] - Decodes instructions, tracking declared types
/// - [`disassembler::Instruction`] - A decoded instruction
/// - [`disassembler::TypeRegistry`] - Types declared so far, keyed by id
pub mod disassembler;

/// Whole-module decoding: header, instruction loop and disassembly text.
pub mod module;

/// `spirvscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `spirvscope` Error type
///
/// # Examples
///
/// ```rust
/// use spirvscope::{Error, Module};
///
/// match Module::from_mem(&[]) {
///     Ok(_) => unreachable!(),
///     Err(Error::Empty) => println!("nothing to decode"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// Main entry point: a fully decoded module.
pub use module::Module;

/// Decoding policy, see [`config::DecoderConfig`].
pub use config::DecoderConfig;

/// Indexed instruction grammar, see [`schema::Schema`].
pub use schema::Schema;

/// Low-level word parser over a byte slice.
pub use file::parser::Parser;
