//! Helpers for assembling SPIR-V modules in unit tests.

use crate::module::SPIRV_MAGIC;

/// Packs an instruction header word.
pub fn header(opcode: u16, word_count: u16) -> u32 {
    (u32::from(word_count) << 16) | u32::from(opcode)
}

/// Serializes words as little-endian bytes.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}

/// Packs a string into nul-terminated, zero-padded words.
pub fn pack_string(text: &str) -> Vec<u32> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(0);
    while bytes.len() % 4 != 0 {
        bytes.push(0);
    }

    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Builder for complete modules: a header followed by instructions.
///
/// ```ignore
/// let data = ModuleBuilder::new()
///     .bound(3)
///     .instruction(21, &[1, 32, 1])
///     .instruction_with_string(5, &[1], "main", &[])
///     .build();
/// ```
pub struct ModuleBuilder {
    version: u32,
    generator: u32,
    bound: u32,
    words: Vec<u32>,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        ModuleBuilder {
            version: 0x0001_0000,
            generator: 0,
            bound: 1,
            words: Vec::new(),
        }
    }

    pub fn version(mut self, major: u8, minor: u8) -> Self {
        self.version = (u32::from(major) << 16) | (u32::from(minor) << 8);
        self
    }

    pub fn generator(mut self, generator: u32) -> Self {
        self.generator = generator;
        self
    }

    pub fn bound(mut self, bound: u32) -> Self {
        self.bound = bound;
        self
    }

    /// Appends an instruction; the word count is computed from `operands`.
    pub fn instruction(mut self, opcode: u16, operands: &[u32]) -> Self {
        let word_count = u16::try_from(operands.len() + 1).unwrap();
        self.words.push(header(opcode, word_count));
        self.words.extend_from_slice(operands);
        self
    }

    /// Appends an instruction with a string operand between two runs of plain words.
    pub fn instruction_with_string(
        self,
        opcode: u16,
        before: &[u32],
        text: &str,
        after: &[u32],
    ) -> Self {
        let mut operands = before.to_vec();
        operands.extend(pack_string(text));
        operands.extend_from_slice(after);
        self.instruction(opcode, &operands)
    }

    /// Appends words verbatim, e.g. a deliberately malformed instruction.
    pub fn raw(mut self, words: &[u32]) -> Self {
        self.words.extend_from_slice(words);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut words = vec![SPIRV_MAGIC, self.version, self.generator, self.bound, 0];
        words.extend_from_slice(&self.words);
        words_to_bytes(&words)
    }
}

#[test]
fn pack_string_pads_to_words() {
    assert_eq!(pack_string(""), vec![0]);
    assert_eq!(pack_string("abc"), vec![0x0063_6261]);
    assert_eq!(pack_string("main"), vec![0x6E69_616D, 0]);
}

#[test]
fn builder_layout() {
    let data = ModuleBuilder::new().bound(7).instruction(253, &[]).build();
    assert_eq!(data.len(), 24);
    assert_eq!(&data[12..16], &7_u32.to_le_bytes());
    assert_eq!(&data[20..24], &header(253, 1).to_le_bytes());
}
