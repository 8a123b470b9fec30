#![allow(dead_code)]

use currentcost::sans::{bits::BitRow, seek::Pattern};

/// A growable row of bits, packed like the rows a demodulator produces.
#[derive(Debug, Default, Clone)]
pub struct Bits {
    bytes: Vec<u8>,
    len: usize,
}

impl Bits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bit: bool) -> &mut Self {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
        self
    }

    /// Push bits written as a string of `0` and `1`, ignoring spaces.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        for c in s.chars().filter(|c| *c != ' ') {
            self.push(c == '1');
        }
        self
    }

    pub fn push_zeros(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.push(false);
        }
        self
    }

    pub fn push_pattern(&mut self, pattern: &Pattern) -> &mut Self {
        for i in 0..pattern.len() {
            self.push(pattern.bit(i));
        }
        self
    }

    /// Push `bytes` in the self-clocked line code: `10` for a zero, `01` for a
    /// one.
    pub fn push_line(&mut self, bytes: &[u8]) -> &mut Self {
        for byte in bytes {
            for k in (0..8).rev() {
                if (byte >> k) & 1 == 1 {
                    self.push(false).push(true);
                } else {
                    self.push(true).push(false);
                }
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn row(&self) -> BitRow<'_> {
        BitRow::new(&self.bytes, self.len).unwrap()
    }
}

/// Decode a string of hexadecimal digit pairs.
pub fn from_hex(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

pub const TIME: &str = "2026-10-18 12:00:00";

pub fn clock() -> &'static str {
    TIME
}
