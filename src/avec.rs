//! Convenience interfaces for decoding rows into measurement records.
//!
//! Hosts handing over raw demodulated bits should call [`decode_row`]. Hosts
//! that already performed Manchester decoding should call [`decode_bytes`].
//! Either way, a successful decode yields a [`MeasurementRecord`], which can
//! be published field-by-field to an output [`Sink`].

pub mod bytes;
pub mod clock;
pub mod device;
pub mod row;

use core::fmt::{self, Display};

pub use bytes::{decode as decode_bytes, try_decode as try_decode_bytes};
pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use row::{decode as decode_row, try_decode as try_decode_row};

use crate::sans::frame::Frame;

/// Model label attached to every record.
pub const MODEL: &str = "CurrentCost TX";

/// Battery state reported by a transmitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Battery {
    Ok,
    Low,
}

impl Display for Battery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "OK",
            Self::Low => "LOW",
        })
    }
}

/// Power readings decoded from a single transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementRecord<T> {
    /// Time the record was decoded, as supplied by the host's [`Clock`].
    pub time: T,
    pub model: &'static str,
    /// Rolling or device code. Its position in the frame is unverified, so it
    /// is never populated.
    pub rc: Option<u8>,
    /// Battery state. No indicator has been located in the frame, so it is
    /// never populated.
    pub battery: Option<Battery>,
    /// Power on each of the three channels, in watts (0 to 32767).
    pub power: [u16; 3],
}

impl<T> MeasurementRecord<T> {
    /// Build a record from a validated frame.
    pub fn from_frame(time: T, frame: &Frame) -> Self {
        Self {
            time,
            model: MODEL,
            rc: None,
            battery: None,
            power: frame.power,
        }
    }
}

/// Derive [`Publish`] for a struct representing an output record.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `field("name")` attribute to each struct field to publish. Fields
/// of type `u8`, `u16` and `u32` are published as integers, and anything else
/// through its [`Display`] implementation. `Option<T>` fields are published
/// only when present, but always appear in [`Publish::FIELDS`].
///
/// ```
/// #[derive(Debug, Publish)]
/// struct Reading {
///     #[field("model")]
///     model: &'static str,
///     #[field("rc")]
///     rc: Option<u8>,
///     #[field("power0")]
///     watts: u16,
/// }
/// ```
#[cfg(feature = "derive")]
pub use currentcost_derive::Publish;

/// Publish the fields of a record to a [`Sink`].
///
/// See the [`Publish`](macro@Publish) derive macro for an automatic
/// implementation of this trait.
pub trait Publish {
    /// Names of every field this record may publish, in publication order.
    const FIELDS: &'static [&'static str];

    /// Publish each present field to the sink.
    fn publish(&self, o: &mut dyn Sink);
}

impl<T: Display> Publish for MeasurementRecord<T> {
    const FIELDS: &'static [&'static str] = &[
        "time", "model", "rc", "power0", "power1", "power2", "battery",
    ];

    fn publish(&self, o: &mut dyn Sink) {
        o.add_display("time", &self.time);
        o.add_display("model", &self.model);
        if let Some(rc) = self.rc {
            o.add_u8("rc", rc);
        }
        o.add_u16("power0", self.power[0]);
        o.add_u16("power1", self.power[1]);
        o.add_u16("power2", self.power[2]);
        if let Some(battery) = &self.battery {
            o.add_display("battery", battery);
        }
    }
}

/// Receive field values of a record.
///
/// The default implementation of each method ignores received values.
#[allow(unused_variables)]
pub trait Sink {
    /// Add a `u8` field.
    fn add_u8(&mut self, key: &'static str, _: u8) {}
    /// Add a `u16` field.
    fn add_u16(&mut self, key: &'static str, _: u16) {}
    /// Add a `u32` field.
    fn add_u32(&mut self, key: &'static str, _: u32) {}
    /// Add a field formatted as a string.
    fn add_display(&mut self, key: &'static str, _: &dyn Display) {}
}
