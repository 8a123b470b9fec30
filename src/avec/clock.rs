//! Timestamps for decoded records.

use core::fmt::Display;

/// A source of wall-clock timestamps.
///
/// Implemented for any closure returning a displayable value.
pub trait Clock {
    type Timestamp: Display;

    /// Read the current time.
    fn now(&self) -> Self::Timestamp;
}

impl<T: Display, F: Fn() -> T> Clock for F {
    type Timestamp = T;

    fn now(&self) -> T {
        self()
    }
}

#[cfg(feature = "std")]
pub use system::{LocalTime, SystemClock};

#[cfg(feature = "std")]
mod system {
    use core::fmt::{self, Display};

    use chrono::{DateTime, Local};

    use super::Clock;

    /// The system clock, in the local time zone.
    ///
    /// _Requires Cargo feature `std`._
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        type Timestamp = LocalTime;

        fn now(&self) -> LocalTime {
            LocalTime(Local::now())
        }
    }

    /// A local time, displayed as `YYYY-MM-DD hh:mm:ss`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LocalTime(pub DateTime<Local>);

    impl Display for LocalTime {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
        }
    }
}
