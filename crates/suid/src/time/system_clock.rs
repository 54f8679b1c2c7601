use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// A [`TimeSource`] backed by [`SystemTime::now`].
///
/// The clock is read on every call, so values follow wall-clock adjustments.
/// A system clock set before 1970 reads as `0`, which the encoder rejects as
/// an invalid timestamp instead of panicking.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
            })
    }
}
