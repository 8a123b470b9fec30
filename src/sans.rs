//! Pipeline stages for decoding a row, free of any host concerns.
//!
//! See [`crate::avec`] for the functions most hosts should call.
//!
//! # Architecture
//!
//! Each stage of the pipeline is a leaf module usable on its own:
//!
//! - [`bits`] addresses the packed row handed over by the demodulator.
//! - [`seek`] locates the sync pattern.
//! - [`line`] recovers data bits from the self-clocked line code.
//! - [`frame`] validates the recovered bytes and extracts power readings.
//!
//! The [`session`] module strings these together as state tokens, in the
//! order `Seeking`, `Decoding`, `Validating`. Each transition consumes its
//! token, so a row moves strictly forward and is either emitted as a frame or
//! dropped with a [`session::DecodeError`]. Only the initial state,
//! re-exported as [`Decoder`], and the byte entry point
//! [`session::Validating::from_bytes`] can be constructed.
//!
//! No state is kept between rows. Any number of rows may be decoded
//! concurrently.

pub mod bits;
pub mod frame;
pub mod line;
pub mod seek;
pub mod session;

/// Entrypoint to the pipeline.
pub type Decoder = session::Seeking;
