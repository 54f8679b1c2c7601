use crate::{Result, TIMESTAMP_BYTES, TimestampError};
use core::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, limited to the 48 bits a SUID carries.
///
/// Constructing a `Timestamp` through [`TryFrom`] applies the encoder's rules
/// (positive, safe integer, fits in 48 bits). A decoded or deserialized
/// timestamp only guarantees the 48-bit bound: a zero timestamp decodes fine
/// but is refused when fed back to the encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct Timestamp(u64);

impl Timestamp {
    /// Largest value the 6-byte timestamp segment can hold (`2^48 - 1`).
    pub const MAX: Self = Self((1 << (TIMESTAMP_BYTES * 8)) - 1);

    /// Largest integer an IEEE 754 double represents exactly (`2^53 - 1`).
    pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

    /// Returns the raw millisecond count.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Converts to a [`SystemTime`].
    pub fn to_system_time(self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.0)
    }

    pub(crate) const fn from_millis_unchecked(millis: u64) -> Self {
        Self(millis)
    }

    pub(crate) fn to_be_bytes(self) -> [u8; TIMESTAMP_BYTES] {
        let wide = self.0.to_be_bytes();
        let mut out = [0; TIMESTAMP_BYTES];
        out.copy_from_slice(&wide[wide.len() - TIMESTAMP_BYTES..]);
        out
    }

    pub(crate) fn from_be_bytes(bytes: [u8; TIMESTAMP_BYTES]) -> Self {
        let mut wide = [0; 8];
        wide[8 - TIMESTAMP_BYTES..].copy_from_slice(&bytes);
        Self(u64::from_be_bytes(wide))
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = crate::Error;

    fn try_from(millis: i64) -> Result<Self> {
        crate::validate_timestamp_millis(millis)
    }
}

/// Accepts any value that fits in 48 bits, including zero.
impl TryFrom<u64> for Timestamp {
    type Error = crate::Error;

    fn try_from(millis: u64) -> Result<Self> {
        if millis > Self::MAX.0 {
            return Err(TimestampError::OutOfRange(millis).into());
        }
        Ok(Self(millis))
    }
}

impl TryFrom<SystemTime> for Timestamp {
    type Error = crate::Error;

    fn try_from(date: SystemTime) -> Result<Self> {
        crate::validate_date(date)
    }
}

impl From<Timestamp> for SystemTime {
    fn from(ts: Timestamp) -> Self {
        ts.to_system_time()
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
