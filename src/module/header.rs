//! The fixed five-word header at the start of every SPIR-V module.

use log::debug;

use crate::{file::parser::Parser, Error, Result};

/// The SPIR-V magic number, the first word of every module.
pub const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Number of words in the module header.
pub const HEADER_WORDS: usize = 5;

/// Parsed module header.
///
/// ```text
/// word 0: magic      0x07230203
/// word 1: version    0x00MMmm00 (major, minor)
/// word 2: generator  tool that produced the module
/// word 3: bound      every id in the module is below this
/// word 4: schema     reserved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleHeader {
    /// Magic number, always [`SPIRV_MAGIC`] once parsed
    pub magic: u32,
    /// Packed version word
    pub version: u32,
    /// Generator magic number
    pub generator: u32,
    /// Upper bound of the ids used in the module
    pub bound: u32,
    /// Reserved instruction schema word, passed through unchanged
    pub schema: u32,
}

impl ModuleHeader {
    /// Reads and validates the header at the current position of `parser`.
    ///
    /// # Errors
    /// Returns [`Error::StreamExhausted`] if fewer than five words are available, or
    /// [`Error::BadMagic`] if the first word is not [`SPIRV_MAGIC`].
    pub fn read(parser: &mut Parser) -> Result<Self> {
        let mut next = || parser.read_word().map_err(Error::into_stream_error);

        let magic = next()?;
        if magic != SPIRV_MAGIC {
            return Err(Error::BadMagic(magic));
        }

        let header = ModuleHeader {
            magic,
            version: next()?,
            generator: next()?,
            bound: next()?,
            schema: next()?,
        };

        debug!(
            "SPIR-V {}.{} module, generator {:#010x}, bound {}",
            header.version_major(),
            header.version_minor(),
            header.generator,
            header.bound
        );

        Ok(header)
    }

    /// Major version, bits 16..24 of the version word.
    #[must_use]
    pub fn version_major(&self) -> u8 {
        ((self.version >> 16) & 0xFF) as u8
    }

    /// Minor version, bits 8..16 of the version word.
    #[must_use]
    pub fn version_minor(&self) -> u8 {
        ((self.version >> 8) & 0xFF) as u8
    }
}
