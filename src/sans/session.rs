//! States decoding a single bit row.

use log::trace;
use thiserror::Error;

use super::{
    bits::BitRow,
    frame::{FRAME_CAPACITY, Frame, FrameError},
    line::{self, LineBuffer},
    seek::{Pattern, seek},
};

/// A reason for dropping a row without producing a record.
///
/// All of these are expected on ordinary captures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The sync pattern is absent from the row.
    #[error("Sync pattern not found.")]
    PatternNotFound,
    /// Too few bytes were decoded before the line code ended.
    #[error("Line code ended after {started} bytes.")]
    LineDecodeTruncated { started: usize },
    /// Incorrect frame type marker.
    #[error("Incorrect frame type marker ({0:#04x}).")]
    FrameTypeMismatch(u8),
}

impl From<FrameError> for DecodeError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::Truncated { started } => Self::LineDecodeTruncated { started },
            FrameError::TypeMismatch(kind) => Self::FrameTypeMismatch(kind),
        }
    }
}

/// State token to search a row for the sync pattern.
#[derive(Debug)]
pub struct Seeking;

impl Seeking {
    /// Transition to another state by searching `row` for `pattern`.
    ///
    /// Returns a successor state token positioned after the pattern.
    pub fn advance(row: &BitRow, pattern: &Pattern) -> Result<Decoding, DecodeError> {
        let start = seek(row, pattern).ok_or(DecodeError::PatternNotFound)?;
        trace!("found sync pattern ending at bit {start} of {}", row.len());

        Ok(Decoding { start })
    }
}

/// State token to decode the line code following the sync pattern.
#[derive(Debug)]
pub struct Decoding {
    start: usize,
}

impl Decoding {
    /// Offset of the first line bit.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Transition to another state by decoding the line code of `row`.
    ///
    /// `row` must be the row this state was produced from.
    pub fn advance(self, row: &BitRow) -> Validating {
        let buffer: LineBuffer<FRAME_CAPACITY> = line::decode(row, self.start);
        trace!("decoded {} bits from the line", buffer.bits());

        Validating {
            bytes: buffer.as_array(),
            started: buffer.started(),
        }
    }
}

/// State token to validate a decoded frame.
#[derive(Debug)]
pub struct Validating {
    bytes: [u8; FRAME_CAPACITY],
    started: usize,
}

impl Validating {
    /// Enter the final state directly from bytes already decoded by the host.
    ///
    /// Bytes beyond the frame capacity are ignored.
    pub fn from_bytes(r: &[u8]) -> Self {
        let started = r.len().min(FRAME_CAPACITY);

        let mut bytes = [0; FRAME_CAPACITY];
        bytes[..started].copy_from_slice(&r[..started]);

        Self { bytes, started }
    }

    /// Number of bytes holding decoded data.
    pub fn started(&self) -> usize {
        self.started
    }

    /// Transition to the end state by validating the frame.
    ///
    /// Returns the extracted frame.
    pub fn advance(self) -> Result<Frame, DecodeError> {
        Ok(Frame::parse(self.bytes, self.started)?)
    }
}
