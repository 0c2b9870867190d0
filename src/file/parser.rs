//! Low-level word stream parser for SPIR-V module decoding.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor over a little-endian
//! byte buffer. It knows nothing about instructions: the instruction-level word budget lives in
//! [`crate::disassembler::InstructionStream`], which borrows a parser for the duration of one
//! instruction.
//!
//! # Usage Examples
//!
//! ```rust
//! use spirvscope::Parser;
//!
//! let data = [0x03, 0x02, 0x23, 0x07, 0x00, 0x00, 0x01, 0x00];
//! let mut parser = Parser::new(&data);
//!
//! assert_eq!(parser.read_word()?, 0x0723_0203);
//! assert_eq!(parser.read_word()?, 0x0001_0000);
//! assert!(!parser.has_more_data());
//! # Ok::<(), spirvscope::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, WordIO},
    Result,
};

/// A cursor-based reader over a little-endian byte buffer.
///
/// `Parser` maintains an internal position and bounds-checks every read, so truncated or
/// malformed input surfaces as [`crate::Error::OutOfBounds`] rather than a panic.
///
/// # Examples
///
/// ```rust
/// use spirvscope::Parser;
///
/// let data = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00];
/// let mut parser = Parser::new(&data);
///
/// assert_eq!(parser.read_word()?, 1);
/// assert_eq!(parser.remaining(), 2);
/// assert!(parser.read_word().is_err());
/// # Ok::<(), spirvscope::Error>(())
/// ```
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns `true` if there is more data available to parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spirvscope::Parser;
    /// let data = [0x01, 0x00, 0x00, 0x00];
    /// let mut parser = Parser::new(&data);
    /// assert!(parser.has_more_data());
    ///
    /// let _word = parser.read_word()?;
    /// assert!(!parser.has_more_data());
    /// # Ok::<(), spirvscope::Error>(())
    /// ```
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Get the current byte position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Read a type `T` from the current position in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_le<T: WordIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read one 32-bit little-endian word and advance the position by four bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than four bytes remain. The position is
    /// not advanced in that case.
    pub fn read_word(&mut self) -> Result<u32> {
        self.read_le::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn read_words_in_order() {
        let data = [
            0x03, 0x02, 0x23, 0x07, // magic
            0x00, 0x00, 0x01, 0x00, // version 1.0
        ];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_word().unwrap(), 0x0723_0203);
        assert_eq!(parser.pos(), 4);
        assert_eq!(parser.read_word().unwrap(), 0x0001_0000);
        assert!(!parser.has_more_data());
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn partial_word_is_out_of_bounds() {
        let data = [0x01, 0x02, 0x03];
        let mut parser = Parser::new(&data);

        assert!(matches!(parser.read_word(), Err(Error::OutOfBounds)));
        assert_eq!(parser.pos(), 0);
        assert!(parser.has_more_data());
    }

    #[test]
    fn empty_parser() {
        let mut parser = Parser::new(&[]);
        assert!(!parser.has_more_data());
        assert!(matches!(parser.read_word(), Err(Error::OutOfBounds)));
    }

    #[test]
    fn read_double_word() {
        let data = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_le::<u64>().unwrap(), 0x0000_0002_0000_0001);
        assert_eq!(parser.pos(), 8);
        assert!(matches!(parser.read_le::<u64>(), Err(Error::OutOfBounds)));
        assert_eq!(parser.remaining(), 1);
    }
}
