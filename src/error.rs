use thiserror::Error;

use crate::disassembler::TypeKind;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is fatal for the module being decoded or rendered: the format is deterministic,
/// so nothing is retried and no partially decoded [`crate::Module`] is ever handed out.
///
/// # Error Categories
///
/// ## Header Errors
/// - [`Error::BadMagic`] - The first word is not the SPIR-V magic number
/// - [`Error::Empty`] - Empty input provided
///
/// ## Instruction Stream Errors
/// - [`Error::InvalidInstructionLength`] - An instruction announced a word count of zero
/// - [`Error::StreamExhausted`] - A read went past the declared instruction length or the input
/// - [`Error::UnknownOpcode`] - No schema entry exists for an opcode
/// - [`Error::TrailingWords`] - Strict mode: an instruction has words its operands do not use
/// - [`Error::Malformed`] - Operand content is corrupted (e.g. a string is not UTF-8)
///
/// ## Type Errors
/// - [`Error::UnknownResultType`] - A context-dependent literal references an undeclared type
/// - [`Error::UnsupportedNumericWidth`] - A numeric type has a width that cannot be rendered
/// - [`Error::DuplicateType`] - Strict mode: a type id was declared twice with different types
///
/// # Examples
///
/// ```rust
/// use spirvscope::{Error, Module};
///
/// match Module::from_mem(&[0xDE, 0xAD, 0xBE, 0xEF]) {
///     Ok(module) => println!("{} instructions", module.instructions().len()),
///     Err(Error::BadMagic(magic)) => eprintln!("not a SPIR-V module: {magic:#010x}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The module does not start with the SPIR-V magic number.
    ///
    /// The associated value is the word that was found instead.
    #[error("Module does not start with the SPIR-V magic number - found {0:#010x}")]
    BadMagic(u32),

    /// An instruction header announced a word count of zero.
    ///
    /// The word count of an instruction always includes the header word itself, so zero
    /// can never be valid. The opcode from the offending header is kept for diagnostics.
    #[error("Invalid word count 0 for instruction with opcode {opcode}")]
    InvalidInstructionLength {
        /// Opcode found in the offending instruction header
        opcode: u16,
    },

    /// More words were requested than the current instruction holds, or the input ended
    /// in the middle of an instruction or the module header.
    ///
    /// This is distinct from the clean end of a module, which only happens between
    /// instructions and is not an error.
    #[error("Instruction stream has ended but another word was requested")]
    StreamExhausted,

    /// A context-dependent literal references a result type that has not been declared.
    ///
    /// Types must be declared before any instruction that references them.
    #[error("Result type %{0} is unknown")]
    UnknownResultType(u32),

    /// A context-dependent literal has a numeric type whose width cannot be rendered.
    #[error("Unsupported {kind} width {width}")]
    UnsupportedNumericWidth {
        /// Kind of the registered type (integer or float)
        kind: TypeKind,
        /// The width the type was declared with
        width: u32,
    },

    /// The opcode is not described by the schema in use.
    #[error("Unknown opcode {0}")]
    UnknownOpcode(u16),

    /// A type id was declared a second time with a different type.
    ///
    /// Only reported when [`crate::DecoderConfig::reject_duplicate_types`] is set.
    #[error("Type %{0} was declared twice with different types")]
    DuplicateType(u32),

    /// The schema consumed fewer words than the instruction declared.
    ///
    /// Only reported when [`crate::DecoderConfig::reject_trailing_words`] is set.
    #[error("Instruction with opcode {opcode} has {count} unconsumed trailing word(s)")]
    TrailingWords {
        /// Opcode of the offending instruction
        opcode: u16,
        /// Number of words left over after all operands were decoded
        count: u32,
    },

    /// The module is damaged and could not be decoded.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted by the byte parser.
    ///
    /// Module decoding reports this as [`Error::StreamExhausted`]; it only surfaces when the
    /// [`crate::Parser`] is used directly.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// I/O error raised by the reader a module was loaded from.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps byte-level exhaustion onto instruction-level exhaustion.
    ///
    /// The byte parser knows nothing about instructions, so running out of bytes while an
    /// instruction or the header is being read is reported as [`Error::StreamExhausted`].
    pub(crate) fn into_stream_error(self) -> Self {
        match self {
            Error::OutOfBounds => Error::StreamExhausted,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_becomes_stream_exhausted() {
        assert!(matches!(
            Error::OutOfBounds.into_stream_error(),
            Error::StreamExhausted
        ));
        assert!(matches!(
            Error::UnknownOpcode(7).into_stream_error(),
            Error::UnknownOpcode(7)
        ));
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::BadMagic(0xDEADBEEF).to_string(),
            "Module does not start with the SPIR-V magic number - found 0xdeadbeef"
        );
        assert_eq!(
            Error::UnsupportedNumericWidth {
                kind: TypeKind::Int,
                width: 16
            }
            .to_string(),
            "Unsupported Int width 16"
        );

        let err = malformed_error!("bad string at word {}", 3);
        assert!(err.to_string().contains("bad string at word 3"));
    }
}
