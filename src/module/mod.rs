//! Whole-module decoding and disassembly.
//!
//! A [`Module`] is built in one linear pass: the five-word [`ModuleHeader`] is read and
//! checked, then instructions are decoded one after another until the input ends exactly at an
//! instruction boundary. Any other failure aborts construction; a `Module` is either fully
//! decoded or not returned at all. Once built it is immutable and can be rendered or inspected
//! from several threads at once.
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::Module;
//!
//! let words: [u32; 5] = [0x0723_0203, 0x0001_0000, 0, 5, 0];
//! let bytes: Vec<u8> = words.iter().flat_map(|word| word.to_le_bytes()).collect();
//!
//! let module = Module::from_mem(&bytes)?;
//! assert_eq!(
//!     module.to_text()?,
//!     "; SPIR-V\n; Version: 1.0\n; Generator: 0\n; Bound: 5\n; Schema: 0\n"
//! );
//! # Ok::<(), spirvscope::Error>(())
//! ```

mod header;

pub use header::{ModuleHeader, HEADER_WORDS, SPIRV_MAGIC};

use std::io::Read;

use log::debug;

use crate::{
    config::DecoderConfig,
    disassembler::{Decoder, Instruction, TypeRegistry},
    file::parser::Parser,
    schema::Schema,
    Error, Result,
};

/// A decoded SPIR-V module.
pub struct Module {
    header: ModuleHeader,
    grammar: &'static Schema,
    instructions: Vec<Instruction>,
    types: TypeRegistry,
}

impl Module {
    /// Decodes a module from memory with the embedded core grammar and the default policy.
    ///
    /// # Errors
    /// See [`Module::from_mem_with`].
    pub fn from_mem(data: &[u8]) -> Result<Module> {
        Self::from_mem_with(data, Schema::core(), DecoderConfig::default())
    }

    /// Decodes a module from memory with an explicit grammar and policy.
    ///
    /// # Errors
    /// - [`Error::Empty`] if `data` is empty
    /// - [`Error::StreamExhausted`] if the header or an instruction is truncated
    /// - [`Error::BadMagic`] if the first word is not the SPIR-V magic number
    /// - any error of [`Decoder::decode_instruction`]
    pub fn from_mem_with(
        data: &[u8],
        schema: &'static Schema,
        config: DecoderConfig,
    ) -> Result<Module> {
        if data.is_empty() {
            return Err(Error::Empty);
        }

        let mut parser = Parser::new(data);
        let header = ModuleHeader::read(&mut parser)?;
        let (instructions, types) = Decoder::new(schema, config).decode_stream(&mut parser)?;

        debug!(
            "Decoded {} instructions, {} declared types",
            instructions.len(),
            types.len()
        );

        Ok(Module {
            header,
            grammar: schema,
            instructions,
            types,
        })
    }

    /// Reads `reader` to the end and decodes the bytes with [`Module::from_mem`].
    ///
    /// # Errors
    /// Returns [`Error::Io`] if reading fails, otherwise the errors of [`Module::from_mem`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Module> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_mem(&data)
    }

    /// The module header.
    #[must_use]
    pub fn header(&self) -> &ModuleHeader {
        &self.header
    }

    /// Major version of the module.
    #[must_use]
    pub fn version_major(&self) -> u8 {
        self.header.version_major()
    }

    /// Minor version of the module.
    #[must_use]
    pub fn version_minor(&self) -> u8 {
        self.header.version_minor()
    }

    /// Generator magic number.
    #[must_use]
    pub fn generator(&self) -> u32 {
        self.header.generator
    }

    /// Id bound.
    #[must_use]
    pub fn bound(&self) -> u32 {
        self.header.bound
    }

    /// Reserved schema word of the header.
    ///
    /// Not to be confused with [`Module::grammar`], the instruction grammar the module was
    /// decoded with.
    #[must_use]
    pub fn schema(&self) -> u32 {
        self.header.schema
    }

    /// Instruction grammar the module was decoded with.
    #[must_use]
    pub fn grammar(&self) -> &'static Schema {
        self.grammar
    }

    /// Decoded instructions in module order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Types declared by the module.
    #[must_use]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Renders the full disassembly: a comment preamble followed by one line per instruction.
    ///
    /// # Errors
    /// Propagates the first error of [`Instruction::to_text`].
    pub fn to_text(&self) -> Result<String> {
        let mut text = format!(
            "; SPIR-V\n; Version: {}.{}\n; Generator: {}\n; Bound: {}\n; Schema: {}\n",
            self.version_major(),
            self.version_minor(),
            self.header.generator,
            self.header.bound,
            self.header.schema
        );

        for instruction in &self.instructions {
            text.push_str(&instruction.to_text(&self.types)?);
            text.push('\n');
        }

        Ok(text)
    }
}
