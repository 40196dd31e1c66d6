//! RTMP timestamps are 32 bit unsigned integers representing the number of milliseconds from
//! an unknown epoch.
//!
//! Every event written to a logical channel carries one of these, and it is copied verbatim
//! into the `timer` field of the packet header so the framing layer can delta encode it.
//! Since streams can run longer than 49 days the value wraps instead of overflowing.
//!
//! # Examples
//!
//! ```
//! use rml_rtmp_channels::time::RtmpTimestamp;
//!
//! let start = RtmpTimestamp::new(u32::max_value() - 9);
//! let later = start + 20;
//!
//! assert_eq!(later, 10);
//! assert_eq!(later.delta_from(start), 20);
//! ```

use std::fmt;
use std::num::Wrapping;
use std::ops::Add;

/// The representation of a RTMP timestamp
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default, Hash)]
pub struct RtmpTimestamp {
    /// The time (as milliseconds from an unknown epoch) being represented by the timestamp
    pub value: u32,
}

impl RtmpTimestamp {
    /// Creates a new timestamp with the specified time value
    pub fn new(initial_value: u32) -> Self {
        RtmpTimestamp {
            value: initial_value,
        }
    }

    /// Number of milliseconds that elapsed between `earlier` and this timestamp, taking
    /// wrap around into account.
    pub fn delta_from(&self, earlier: RtmpTimestamp) -> u32 {
        (Wrapping(self.value) - Wrapping(earlier.value)).0
    }
}

impl From<u32> for RtmpTimestamp {
    fn from(value: u32) -> Self {
        RtmpTimestamp::new(value)
    }
}

impl Add<u32> for RtmpTimestamp {
    type Output = RtmpTimestamp;

    fn add(self, other: u32) -> Self {
        RtmpTimestamp {
            value: (Wrapping(self.value) + Wrapping(other)).0,
        }
    }
}

impl PartialEq<u32> for RtmpTimestamp {
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}

impl fmt::Display for RtmpTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}ms", self.value)
    }
}
