//! Validation and field extraction for decoded frames.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::FromBytes;

/// Type marker carried in the first byte of a power reading frame.
pub const FRAME_TYPE: u8 = 0x0D;

/// Fewest started bytes a frame may be decoded from.
pub const MIN_STARTED: usize = 7;

/// Bytes decoded from the line for each frame.
pub const FRAME_CAPACITY: usize = 8;

/// An error validating a decoded frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Too few bytes were decoded.
    #[error("Decoded {started} bytes, expected at least 7.")]
    Truncated { started: usize },
    /// Incorrect frame type marker.
    #[error("Incorrect frame type marker ({0:#04x}).")]
    TypeMismatch(u8),
}

/// A validated power reading frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Frame type marker, always [`FRAME_TYPE`].
    pub kind: u8,
    /// Byte following the type marker, believed to carry a rolling or device
    /// code. Its encoding is unverified.
    pub code: u8,
    /// Power on each of the three channels, in watts.
    pub power: [u16; 3],
}

#[repr(C, packed)]
#[derive(FromBytes)]
struct RawFrame {
    kind: u8,
    code: u8,
    power: [[u8; 2]; 3],
}

// A big-endian power field. Bit 15 is reserved and not part of the magnitude.
bitfield! {
    struct PowerField(u16) {
        [0..15] watts: u16,
    }
}

impl Frame {
    /// Validate and extract a frame from the bytes of a line buffer, of which
    /// `started` received at least one bit.
    ///
    /// Bytes past `started` must be zero.
    pub fn parse(bytes: [u8; FRAME_CAPACITY], started: usize) -> Result<Self, FrameError> {
        if started < MIN_STARTED {
            Err(FrameError::Truncated { started })?;
        }

        let RawFrame { kind, code, power } = zerocopy::transmute!(bytes);

        if kind != FRAME_TYPE {
            Err(FrameError::TypeMismatch(kind))?;
        }

        let power = power.map(|p| PowerField(u16::from_be_bytes(p)).watts());

        Ok(Self { kind, code, power })
    }
}
