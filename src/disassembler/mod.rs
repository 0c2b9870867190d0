//! SPIR-V instruction decoding and disassembly.
//!
//! This module turns the instruction stream of a module into typed [`Instruction`]s and renders
//! them back as text. Decoding is driven entirely by a [`crate::Schema`]; nothing in here knows
//! about individual opcodes.
//!
//! # Key Types
//! - [`Decoder`] - Decodes instructions and tracks declared types
//! - [`InstructionStream`] - Word-budgeted reader over one instruction's operands
//! - [`Instruction`] - A decoded instruction with its [`Argument`]s
//! - [`Value`] - Closed variant of everything an operand can decode to
//! - [`TypeRegistry`] - Declared types, used to resolve context-dependent literals
//!
//! # Example
//! ```rust
//! use spirvscope::disassembler::{Decoder, TypeKind};
//! use spirvscope::{DecoderConfig, Parser, Schema};
//!
//! // OpTypeFloat %1 32
//! let bytes: Vec<u8> = [0x0003_0016_u32, 1, 32]
//!     .iter()
//!     .flat_map(|word| word.to_le_bytes())
//!     .collect();
//!
//! let mut parser = Parser::new(&bytes);
//! let mut decoder = Decoder::new(Schema::core(), DecoderConfig::default());
//! let instruction = decoder.decode_instruction(&mut parser)?.unwrap();
//!
//! assert_eq!(instruction.mnemonic(), Some("OpTypeFloat"));
//! assert_eq!(decoder.types().lookup(1).unwrap().kind, TypeKind::Float);
//! # Ok::<(), spirvscope::Error>(())
//! ```

mod decoder;
mod instruction;
mod registry;
mod stream;

pub use decoder::{split_header, Decoder};
pub use instruction::{Argument, CompositeValue, EnumValue, Instruction, Value};
pub use registry::{RegisteredType, TypeKind, TypeRegistry};
pub use stream::InstructionStream;
