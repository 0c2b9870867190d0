//! Decoder configuration
//!
//! This module provides the policy knobs for module decoding. Structural errors (bad magic,
//! zero-length instructions, truncation, unknown result types) are always fatal; the options
//! here only govern situations a well-formed producer never emits but a tolerant reader may
//! want to accept.

/// Configuration for module decoding
///
/// The default is the relaxed policy: questionable but recoverable input is accepted and a
/// `warn!` is logged, except for unknown opcodes, which cannot be skipped without a schema
/// entry unless [`DecoderConfig::preserve_unknown_opcodes`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DecoderConfig {
    /// Fail with [`crate::Error::DuplicateType`] when a type id is declared again with a
    /// different type. When disabled the later declaration overwrites the earlier one.
    pub reject_duplicate_types: bool,

    /// Fail with [`crate::Error::TrailingWords`] when an instruction declares more words than
    /// its operands consume. When disabled the extra words are skipped.
    pub reject_trailing_words: bool,

    /// Keep instructions with an opcode unknown to the schema as raw words instead of failing
    /// with [`crate::Error::UnknownOpcode`]
    pub preserve_unknown_opcodes: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_types: false,
            reject_trailing_words: false,
            preserve_unknown_opcodes: false,
        }
    }
}

impl DecoderConfig {
    /// Creates a configuration that rejects everything questionable
    ///
    /// Duplicate type declarations with conflicting types, trailing words and unknown opcodes
    /// all abort decoding.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reject_duplicate_types: true,
            reject_trailing_words: true,
            preserve_unknown_opcodes: false,
        }
    }

    /// Creates a configuration that accepts as much as possible
    ///
    /// Useful for inspecting modules produced by newer toolchains: instructions the schema does
    /// not know are kept verbatim and rendered as `OpUnknown(<opcode>)` followed by their words.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            reject_duplicate_types: false,
            reject_trailing_words: false,
            preserve_unknown_opcodes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_relaxed_but_not_lenient() {
        let config = DecoderConfig::default();
        assert!(!config.reject_duplicate_types);
        assert!(!config.reject_trailing_words);
        assert!(!config.preserve_unknown_opcodes);
    }

    #[test]
    fn strict_and_lenient() {
        let strict = DecoderConfig::strict();
        assert!(strict.reject_duplicate_types && strict.reject_trailing_words);
        assert!(!strict.preserve_unknown_opcodes);

        let lenient = DecoderConfig::lenient();
        assert!(lenient.preserve_unknown_opcodes);
        assert_ne!(strict, lenient);
    }
}
