#![no_std]

//! A decoder for the radio transmissions of CurrentCost power meter sensors.
//!
//! Each transmission carries three power readings. The demodulator of a host
//! program (such as an `rtl_433`-style receiver) captures transmissions as
//! rows of bits; this crate finds the sync pattern in a row, recovers the
//! line-coded frame following it, and extracts the readings.
//!
//! Most users should begin with the functions in the [`avec`] module, or
//! register the declarative [`avec::device::CURRENT_COST`] description with
//! their host. The individual stages of the pipeline are exposed in the
//! [`sans`] module.
//!
//! Decoding holds no state between rows, performs no allocation, and never
//! fails loudly: rows without a valid frame simply produce no record.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable the `Publish` derive macro (default).
//! - `std`: enable the system clock (default).

pub mod avec;
pub mod sans;
