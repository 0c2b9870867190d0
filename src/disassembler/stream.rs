//! Word-budgeted reader over the operands of a single instruction.

use crate::{file::parser::Parser, Error, Result};

/// A bounded reader over the operand words of one instruction.
///
/// The stream borrows the module's [`Parser`] for the duration of one instruction decode and
/// tracks how many of the instruction's declared words are still unread. Reads past that
/// budget, or past the end of the underlying bytes, fail with [`Error::StreamExhausted`].
///
/// # Examples
///
/// ```rust
/// use spirvscope::{disassembler::InstructionStream, Parser};
///
/// // "abc\0" packed into one word, followed by the literal 7
/// let data = [b'a', b'b', b'c', 0, 7, 0, 0, 0];
/// let mut parser = Parser::new(&data);
/// let mut stream = InstructionStream::new(&mut parser, 2);
///
/// assert_eq!(stream.read_string()?, "abc");
/// assert_eq!(stream.read_word()?, 7);
/// assert_eq!(stream.remaining(), 0);
/// assert!(stream.read_word().is_err());
/// # Ok::<(), spirvscope::Error>(())
/// ```
pub struct InstructionStream<'p, 'a> {
    parser: &'p mut Parser<'a>,
    remaining: u32,
}

impl<'p, 'a> InstructionStream<'p, 'a> {
    /// Creates a stream over the next `words` words of `parser`.
    ///
    /// `words` is the instruction's declared word count minus the header word, which the
    /// caller has already consumed.
    pub fn new(parser: &'p mut Parser<'a>, words: u32) -> Self {
        InstructionStream {
            parser,
            remaining: words,
        }
    }

    /// Word budget not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Reads the next word of the instruction.
    ///
    /// # Errors
    /// Returns [`Error::StreamExhausted`] if the budget is zero or the underlying bytes end
    /// before a full word is available.
    pub fn read_word(&mut self) -> Result<u32> {
        if self.remaining == 0 {
            return Err(Error::StreamExhausted);
        }

        let word = self.parser.read_word().map_err(Error::into_stream_error)?;
        self.remaining -= 1;
        Ok(word)
    }

    /// Reads the next two words as one 64-bit value, low-order word first.
    ///
    /// # Errors
    /// Returns [`Error::StreamExhausted`] if fewer than two words remain in the budget or in
    /// the underlying bytes.
    pub fn read_double_word(&mut self) -> Result<u64> {
        if self.remaining < 2 {
            return Err(Error::StreamExhausted);
        }

        let value = self.parser.read_le::<u64>().map_err(Error::into_stream_error)?;
        self.remaining -= 2;
        Ok(value)
    }

    /// Reads one word and reinterprets it as an enumeration value of type `T`.
    ///
    /// No range check is performed: values unknown to `T`'s consumer are preserved verbatim.
    ///
    /// # Errors
    /// Same as [`InstructionStream::read_word`].
    pub fn read_enum<T: From<u32>>(&mut self) -> Result<T> {
        self.read_word().map(T::from)
    }

    /// Reads a nul-terminated UTF-8 string packed four bytes per word.
    ///
    /// Words are consumed until one contains a zero byte; bytes after the terminator within
    /// that word are padding.
    ///
    /// # Errors
    /// Returns [`Error::StreamExhausted`] if no terminator is found within the budget, or
    /// [`Error::Malformed`] if the bytes are not valid UTF-8.
    pub fn read_string(&mut self) -> Result<String> {
        let mut bytes = Vec::new();

        loop {
            let word = self.read_word()?;
            let chunk = word.to_le_bytes();

            if let Some(terminator) = chunk.iter().position(|byte| *byte == 0) {
                bytes.extend_from_slice(&chunk[..terminator]);
                break;
            }

            bytes.extend_from_slice(&chunk);
        }

        String::from_utf8(bytes)
            .map_err(|error| malformed_error!("String operand is not valid UTF-8 - {}", error))
    }

    /// Consumes and returns every word left in the budget.
    ///
    /// # Errors
    /// Returns [`Error::StreamExhausted`] if the underlying bytes end first.
    pub fn read_remaining(&mut self) -> Result<Vec<u32>> {
        let mut words = Vec::with_capacity(self.remaining as usize);
        while self.remaining > 0 {
            words.push(self.read_word()?);
        }

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_limits_reads() {
        let data = [1, 0, 0, 0, 2, 0, 0, 0];
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 1);

        assert_eq!(stream.read_word().unwrap(), 1);
        assert!(matches!(stream.read_word(), Err(Error::StreamExhausted)));
        assert_eq!(parser.pos(), 4);
    }

    #[test]
    fn underlying_end_is_stream_exhausted() {
        let data = [1, 0, 0, 0, 2, 0];
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 3);

        assert_eq!(stream.read_word().unwrap(), 1);
        assert!(matches!(stream.read_word(), Err(Error::StreamExhausted)));
        assert_eq!(stream.remaining(), 2);
    }

    #[test]
    fn double_word_is_low_word_first() {
        let data = [
            0xFE, 0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00,
        ];
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 3);

        assert_eq!(stream.read_double_word().unwrap(), 0x0000_0001_FFFF_FFFE);
        assert_eq!(stream.remaining(), 1);
        assert!(matches!(
            stream.read_double_word(),
            Err(Error::StreamExhausted)
        ));
        assert_eq!(stream.read_word().unwrap(), 7);
    }

    #[test]
    fn double_word_past_underlying_end() {
        let data = [0x01, 0x00, 0x00, 0x00, 0x02, 0x00];
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 2);

        assert!(matches!(
            stream.read_double_word(),
            Err(Error::StreamExhausted)
        ));
        assert_eq!(stream.remaining(), 2);
    }

    #[test]
    fn read_enum_preserves_unknown_values() {
        #[derive(Debug, PartialEq)]
        struct Raw(u32);

        impl From<u32> for Raw {
            fn from(value: u32) -> Self {
                Raw(value)
            }
        }

        let data = 0xDEAD_BEEF_u32.to_le_bytes();
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 1);

        assert_eq!(stream.read_enum::<Raw>().unwrap(), Raw(0xDEAD_BEEF));
    }

    #[test]
    fn string_spanning_words() {
        let data = *b"main\0\0\0\0";
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 2);

        assert_eq!(stream.read_string().unwrap(), "main");
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn string_padding_is_ignored() {
        let data = [b'h', b'i', 0, b'x', 9, 0, 0, 0];
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 2);

        assert_eq!(stream.read_string().unwrap(), "hi");
        assert_eq!(stream.read_word().unwrap(), 9);
    }

    #[test]
    fn empty_string() {
        let data = [0u8; 4];
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 1);

        assert_eq!(stream.read_string().unwrap(), "");
    }

    #[test]
    fn unterminated_string() {
        let data = *b"abcdefgh";
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 2);

        assert!(matches!(stream.read_string(), Err(Error::StreamExhausted)));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let data = [0xFF, 0xFE, 0x00, 0x00];
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 1);

        assert!(matches!(stream.read_string(), Err(Error::Malformed { .. })));
    }

    #[test]
    fn read_remaining_drains_budget() {
        let data = [1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0];
        let mut parser = Parser::new(&data);
        let mut stream = InstructionStream::new(&mut parser, 2);

        assert_eq!(stream.read_remaining().unwrap(), vec![1, 2]);
        assert_eq!(stream.remaining(), 0);
        assert_eq!(parser.remaining(), 4);
    }
}
