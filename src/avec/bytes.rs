//! Decoding from bytes the host has already Manchester decoded.
//!
//! The sync pattern and line code are skipped. The bytes must begin with the
//! frame type marker.

use log::debug;

use crate::sans::session::{DecodeError, Validating};

use super::{Clock, MeasurementRecord};

/// Decode a record from pre-decoded bytes.
///
/// This method is also re-exported as `currentcost::avec::decode_bytes`.
pub fn decode<C: Clock>(r: &[u8], clock: &C) -> Option<MeasurementRecord<C::Timestamp>> {
    try_decode(r, clock)
        .inspect_err(|err| debug!("dropped {} bytes: {err}", r.len()))
        .ok()
}

/// Decode a record from pre-decoded bytes, reporting why they were dropped.
///
/// This method is also re-exported as `currentcost::avec::try_decode_bytes`.
pub fn try_decode<C: Clock>(
    r: &[u8],
    clock: &C,
) -> Result<MeasurementRecord<C::Timestamp>, DecodeError> {
    let frame = Validating::from_bytes(r).advance()?;

    Ok(MeasurementRecord::from_frame(clock.now(), &frame))
}
