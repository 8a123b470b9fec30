//! Read-only addressing over a packed row of bits.

use thiserror::Error;

/// An error constructing a bit row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    /// The declared bit length does not fit in the supplied bytes.
    #[error("Row of {len} bits does not fit in {bytes} bytes.")]
    TooShort { len: usize, bytes: usize },
}

/// A row of bits, packed eight to a byte, most significant bit first.
///
/// Rows are borrowed from the demodulator that produced them and are never
/// mutated. Bits past `len` in the final byte are padding and never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRow<'a> {
    bytes: &'a [u8],
    len: usize,
}

impl<'a> BitRow<'a> {
    /// Borrow `len` bits from the start of `bytes`.
    pub const fn new(bytes: &'a [u8], len: usize) -> Result<Self, RowError> {
        if len > bytes.len() * 8 {
            return Err(RowError::TooShort {
                len,
                bytes: bytes.len(),
            });
        }

        Ok(Self { bytes, len })
    }

    /// Borrow every bit of `bytes`.
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            len: bytes.len() * 8,
        }
    }

    /// Read the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`Self::len`].
    pub const fn bit(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index out of range");
        (self.bytes[index >> 3] >> (7 - (index & 0x07))) & 0x01 != 0
    }

    /// Number of bits in the row.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The backing bytes, including any padding bits in the final byte.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}
