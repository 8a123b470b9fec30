//! Decoding of the self-clocked line code following the sync pattern.
//!
//! Each data bit is sent as a pair of line bits, the direction of the
//! transition carrying the value:
//!
//! | Pair  | Transition | Data bit |
//! |-------|------------|----------|
//! | `1 0` | falling    | `0`      |
//! | `0 1` | rising     | `1`      |
//!
//! Pairs without a transition mark the end of the data, or corruption.

use either::Either::{self, Left, Right};

use super::bits::BitRow;

/// A fixed-capacity buffer of decoded bits, filled most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBuffer<const N: usize> {
    bytes: [u8; N],
    bits: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// Capacity of the buffer in bits.
    pub const CAPACITY: usize = N * 8;

    const fn new() -> Self {
        Self {
            bytes: [0; N],
            bits: 0,
        }
    }

    /// Number of decoded bits.
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Number of bytes holding at least one decoded bit.
    ///
    /// Unwritten low-order bits of a partial final byte are zero.
    pub const fn started(&self) -> usize {
        self.bits.div_ceil(8)
    }

    /// The started bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.started()]
    }

    /// The whole buffer, with unstarted bytes zeroed.
    pub const fn as_array(&self) -> [u8; N] {
        self.bytes
    }

    const fn is_full(&self) -> bool {
        self.bits == Self::CAPACITY
    }

    fn push(&mut self, bit: bool) {
        if bit {
            self.bytes[self.bits / 8] |= 0x80 >> (self.bits % 8);
        }
        self.bits += 1;
    }
}

/// State token to decode line bit pairs into a buffer of `N` bytes.
#[derive(Debug)]
pub struct Line<const N: usize> {
    buffer: LineBuffer<N>,
}

impl<const N: usize> Default for Line<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Line<N> {
    pub const fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
        }
    }

    /// Transition to another state by decoding a pair of line bits.
    ///
    /// Returns the filled buffer once an invalid pair is found or the buffer
    /// reaches capacity, and a successor state otherwise. A pair offered to a
    /// full buffer is not consumed.
    pub fn advance(mut self, pair: [bool; 2]) -> Either<LineBuffer<N>, Self> {
        if self.buffer.is_full() {
            return Left(self.buffer);
        }

        match pair {
            [true, false] => self.buffer.push(false),
            [false, true] => self.buffer.push(true),
            _ => return Left(self.buffer),
        }

        if self.buffer.is_full() {
            Left(self.buffer)
        } else {
            Right(self)
        }
    }

    /// End decoding at the end of the input.
    pub fn finish(self) -> LineBuffer<N> {
        self.buffer
    }
}

/// Decode line bit pairs from `row`, starting at bit `start`.
///
/// Stops at the first invalid pair, once `N` bytes are filled, or when fewer
/// than two bits remain. A lone trailing bit is never read.
pub fn decode<const N: usize>(row: &BitRow, start: usize) -> LineBuffer<N> {
    let mut line = Line::new();
    let mut i = start;

    while row.len().saturating_sub(i) >= 2 {
        let pair = [row.bit(i), row.bit(i + 1)];
        i += 2;

        line = match line.advance(pair) {
            Left(buffer) => return buffer,
            Right(line) => line,
        };
    }

    line.finish()
}
