//! Low-level byte order and bounds-checked reading utilities.
//!
//! SPIR-V modules handled by this crate are a sequence of little-endian 32-bit words. This
//! module provides the primitive, bounds-checked conversions from raw bytes to integers that
//! the [`crate::file::parser::Parser`] is built on.
//!
//! # Key Components
//!
//! - [`crate::file::io::WordIO`] - Trait describing how a primitive is decoded from bytes
//! - [`crate::file::io::read_le_at`] - Read a value at an offset and advance the offset
//!
//! # Error Handling
//!
//! All reading functions return [`crate::Error::OutOfBounds`] if there are insufficient bytes
//! in the buffer to complete the operation.

use crate::Result;

/// Trait for primitives that can be read from a little-endian byte buffer.
///
/// Each implementation defines a `Bytes` associated type that represents the fixed-size
/// byte array required for that particular type (`[u8; 4]` for `u32`).
pub trait WordIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_word_io {
    ($($ty:ty => $len:literal),* $(,)?) => {
        $(
            impl WordIO for $ty {
                type Bytes = [u8; $len];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_word_io!(u32 => 4, u64 => 8);

/// Safely reads a value of type `T` in little-endian byte order at `offset`.
///
/// On success the offset is advanced past the value; on failure it is left untouched.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes remain.
pub fn read_le_at<T: WordIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let Some(end) = offset.checked_add(std::mem::size_of::<T>()) else {
        return Err(out_of_bounds_error!());
    };
    let Some(bytes) = data.get(*offset..end) else {
        return Err(out_of_bounds_error!());
    };
    let Ok(read) = bytes.try_into() else {
        return Err(out_of_bounds_error!());
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error::OutOfBounds;

    fn read_le<T: WordIO>(data: &[u8]) -> Result<T> {
        let mut offset = 0_usize;
        read_le_at(data, &mut offset)
    }

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_u32() {
        let result = read_le::<u32>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0403_0201);
    }

    #[test]
    fn read_le_u64() {
        let result = read_le::<u64>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0807_0605_0403_0201);
    }

    #[test]
    fn read_le_at_advances() {
        let mut offset = 0;
        assert_eq!(
            read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap(),
            0x0403_0201
        );
        assert_eq!(offset, 4);
        assert_eq!(
            read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap(),
            0x0807_0605
        );
        assert_eq!(offset, 8);
    }

    #[test]
    fn read_le_at_out_of_bounds_keeps_offset() {
        let mut offset = 6;
        let result = read_le_at::<u32>(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(OutOfBounds)));
        assert_eq!(offset, 6);
    }

    #[test]
    fn read_le_at_offset_overflow() {
        let mut offset = usize::MAX - 1;
        let result = read_le_at::<u32>(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(OutOfBounds)));
        assert_eq!(offset, usize::MAX - 1);
    }

    #[test]
    fn read_le_empty() {
        assert!(read_le::<u32>(&[]).is_err());
    }
}
