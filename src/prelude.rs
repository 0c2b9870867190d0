//! # spirvscope Prelude
//!
//! Convenient re-exports of the types most SPIR-V inspection code needs.
//!
//! ```rust
//! use spirvscope::prelude::*;
//!
//! let config = DecoderConfig::strict();
//! assert!(Schema::core().instruction(43).is_some());
//! # let _ = config;
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all spirvscope operations
pub use crate::Error;

/// The result type used throughout spirvscope
pub use crate::Result;

/// Policy knobs for module decoding
pub use crate::DecoderConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Decoded module, the main entry point
pub use crate::module::{Module, ModuleHeader};

/// Low-level word parser
pub use crate::Parser;

// ================================================================================================
// Grammar
// ================================================================================================

/// Instruction grammar tables and their descriptors
pub use crate::schema::{
    EnumerationKind, EnumerationSchema, InstructionSchema, OperandKind, OperandSchema, Quantifier,
    Schema,
};

// ================================================================================================
// Decoded Instructions
// ================================================================================================

/// Instruction decoding and rendering
pub use crate::disassembler::{
    Argument, Decoder, Instruction, RegisteredType, TypeKind, TypeRegistry, Value,
};
