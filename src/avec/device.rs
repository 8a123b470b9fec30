//! Declarative description of the decoder, read by the host.
//!
//! The host's demodulator uses the pulse limits to slice transmissions into
//! rows before handing them to [`Device::decode`]. Limits are in the host's
//! time units.

use log::debug;

use crate::sans::{
    bits::BitRow,
    seek::{Pattern, SYNC},
    session::DecodeError,
};

use super::{Clock, MeasurementRecord, Publish, bytes, row};

/// Modulation the host should demodulate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulation {
    /// Frequency shift keying, pulse code modulated.
    FskPulsePcm,
    /// Frequency shift keying, Manchester decoded by the host.
    FskPulseManchester,
}

/// Form in which the host hands over each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Raw bits, searched for a sync pattern and line decoded.
    Bits(Pattern),
    /// Bytes already decoded by the host, starting at the frame type marker.
    Bytes,
}

/// Everything a host needs to register and drive the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Device {
    pub name: &'static str,
    pub modulation: Modulation,
    /// Longest pulse treated as a short symbol.
    pub short_limit: u32,
    /// Longest pulse treated as a long symbol.
    pub long_limit: u32,
    /// Gap ending a transmission.
    pub reset_limit: u32,
    pub input: Input,
    /// Output schema, in publication order.
    pub fields: &'static [&'static str],
}

const FIELDS: &[&str] = <MeasurementRecord<&str> as Publish>::FIELDS;

/// Raw bit rows, decoded entirely by this crate.
pub const CURRENT_COST: Device = Device {
    name: "CurrentCost Sensor",
    modulation: Modulation::FskPulsePcm,
    short_limit: 62,
    long_limit: 62,
    reset_limit: 2000,
    input: Input::Bits(SYNC),
    fields: FIELDS,
};

/// Rows Manchester decoded by the host.
pub const CURRENT_COST_MANCHESTER: Device = Device {
    name: "CurrentCost Sensor",
    modulation: Modulation::FskPulseManchester,
    short_limit: 62,
    long_limit: 260,
    reset_limit: 1000,
    input: Input::Bytes,
    fields: FIELDS,
};

impl Device {
    /// Decode a record from a row handed over by the host.
    ///
    /// Returns `None` for rows that do not hold a valid frame.
    pub fn decode<C: Clock>(
        &self,
        r: &BitRow,
        clock: &C,
    ) -> Option<MeasurementRecord<C::Timestamp>> {
        self.try_decode(r, clock)
            .inspect_err(|err| debug!("{}: dropped row of {} bits: {err}", self.name, r.len()))
            .ok()
    }

    /// Decode a record from a row handed over by the host, reporting why a
    /// row was dropped.
    ///
    /// For [`Input::Bytes`], only whole bytes of the row are used.
    pub fn try_decode<C: Clock>(
        &self,
        r: &BitRow,
        clock: &C,
    ) -> Result<MeasurementRecord<C::Timestamp>, DecodeError> {
        match self.input {
            Input::Bits(pattern) => row::decode_with(r, &pattern, clock),
            Input::Bytes => bytes::try_decode(&r.as_bytes()[..r.len() / 8], clock),
        }
    }
}
