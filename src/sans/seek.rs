//! Search for the synchronization pattern preceding a frame.

use super::bits::BitRow;

/// A non-empty bit pattern to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(BitRow<'static>);

impl Pattern {
    /// Take the first `len` bits of `bytes` as a pattern.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or exceeds the bits in `bytes`. In a constant
    /// context this is a compile error.
    pub const fn new(bytes: &'static [u8], len: usize) -> Self {
        assert!(len != 0, "pattern must not be empty");

        match BitRow::new(bytes, len) {
            Ok(row) => Self(row),
            Err(_) => panic!("pattern length exceeds its bytes"),
        }
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn bit(&self, index: usize) -> bool {
        self.0.bit(index)
    }
}

/// The 45 bit preamble and sync word sent ahead of every frame.
///
/// The final three bits of the last byte are not part of the pattern.
pub const SYNC: Pattern = Pattern::new(&[0xCC, 0xCC, 0xCC, 0xCE, 0x91, 0x5D], 45);

/// Find the first occurrence of `pattern` in `row`.
///
/// Returns the offset of the bit immediately after the match, or `None` if
/// the row ends first. After a mismatch the search resumes one bit after the
/// start of the failed candidate, so overlapping candidates are not skipped.
pub fn seek(row: &BitRow, pattern: &Pattern) -> Option<usize> {
    let mut i = 0; // Cursor on the row.
    let mut p = 0; // Cursor on the pattern.

    while i < row.len() && p < pattern.len() {
        if row.bit(i) == pattern.bit(p) {
            i += 1;
            p += 1;
        } else {
            i = i - p + 1;
            p = 0;
        }
    }

    (p == pattern.len()).then_some(i)
}
