//! Decoding from a raw row of demodulated bits.

use log::debug;

use crate::sans::{
    Decoder,
    bits::BitRow,
    seek::{Pattern, SYNC},
    session::DecodeError,
};

use super::{Clock, MeasurementRecord};

/// Decode a record from a row of bits, searching for the standard sync
/// pattern.
///
/// This method is also re-exported as `currentcost::avec::decode_row`.
///
/// Returns `None` for rows that do not hold a valid frame, which is the
/// common case. The reason is logged at debug level.
pub fn decode<C: Clock>(row: &BitRow, clock: &C) -> Option<MeasurementRecord<C::Timestamp>> {
    try_decode(row, clock)
        .inspect_err(|err| debug!("dropped row of {} bits: {err}", row.len()))
        .ok()
}

/// Decode a record from a row of bits, reporting why a row was dropped.
///
/// This method is also re-exported as `currentcost::avec::try_decode_row`.
pub fn try_decode<C: Clock>(
    row: &BitRow,
    clock: &C,
) -> Result<MeasurementRecord<C::Timestamp>, DecodeError> {
    decode_with(row, &SYNC, clock)
}

/// Decode a record from a row of bits, searching for a given sync pattern.
pub fn decode_with<C: Clock>(
    row: &BitRow,
    pattern: &Pattern,
    clock: &C,
) -> Result<MeasurementRecord<C::Timestamp>, DecodeError> {
    let frame = Decoder::advance(row, pattern)?.advance(row).advance()?;

    Ok(MeasurementRecord::from_frame(clock.now(), &frame))
}
