//! Input checks shared by the encoder and decoder.
//!
//! Each check is a pure function so it can be exercised on its own and reused
//! by front ends (such as a CLI) that want to reject bad configuration before
//! generating anything.

use crate::{
    Alphabet, Error, MAX_RANDOM_BYTES, MIN_RANDOM_BYTES, Result, Timestamp, TimestampError,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Checks an explicit millisecond timestamp.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] unless `millis` is at least `1`, no
/// larger than [`Timestamp::MAX_SAFE_INTEGER`], and fits in 48 bits.
pub fn validate_timestamp_millis(millis: i64) -> Result<Timestamp> {
    let Ok(millis) = u64::try_from(millis) else {
        return Err(TimestampError::NotPositive(millis).into());
    };
    validate_unsigned_millis(millis)
}

/// Checks a date by converting it to milliseconds since the Unix epoch.
///
/// Sub-millisecond precision is truncated.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if the date predates the Unix epoch or
/// its millisecond value fails [`validate_timestamp_millis`].
pub fn validate_date(date: SystemTime) -> Result<Timestamp> {
    let elapsed = date
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TimestampError::BeforeEpoch)?;
    let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    validate_unsigned_millis(millis)
}

pub(crate) fn validate_unsigned_millis(millis: u64) -> Result<Timestamp> {
    if millis == 0 {
        return Err(TimestampError::NotPositive(0).into());
    }
    if millis > Timestamp::MAX_SAFE_INTEGER {
        return Err(TimestampError::NotSafeInteger(millis).into());
    }
    if millis > Timestamp::MAX.as_millis() {
        return Err(TimestampError::OutOfRange(millis).into());
    }
    Ok(Timestamp::from_millis_unchecked(millis))
}

/// Checks that a random byte sequence is long enough to split in two.
///
/// # Errors
///
/// Returns [`Error::InvalidRandomSource`] when `bits` holds fewer than
/// [`MIN_RANDOM_BYTES`] bytes.
pub fn validate_random_bits(bits: &[u8]) -> Result<()> {
    if bits.len() < MIN_RANDOM_BYTES {
        return Err(Error::InvalidRandomSource { len: bits.len() });
    }
    Ok(())
}

/// Checks a byte count before drawing that many bytes from a random source.
///
/// # Errors
///
/// Returns [`Error::InvalidRandomSource`] when `len` is below
/// [`MIN_RANDOM_BYTES`] or above [`MAX_RANDOM_BYTES`].
pub fn validate_random_length(len: usize) -> Result<()> {
    if !(MIN_RANDOM_BYTES..=MAX_RANDOM_BYTES).contains(&len) {
        return Err(Error::InvalidRandomSource { len });
    }
    Ok(())
}

/// Checks that `separator` can be split back out of an encoded SUID.
///
/// A separator that the alphabet itself can emit (for example `-` with
/// [`Alphabet::UrlSafe`]), or the padding character `=`, would make the
/// segment boundaries ambiguous.
///
/// # Errors
///
/// Returns [`Error::InvalidSeparator`] for such separators.
pub fn validate_separator(separator: char, alphabet: Alphabet) -> Result<()> {
    if alphabet.contains(separator) || separator == '=' {
        return Err(Error::InvalidSeparator {
            separator,
            alphabet,
        });
    }
    Ok(())
}

/// Checks that decoded random halves have the shape the encoder produces.
pub(crate) fn validate_random_split(head: usize, tail: usize) -> Result<()> {
    let total = head + tail;
    if total < MIN_RANDOM_BYTES || head != total / 2 {
        return Err(crate::InputError::RandomSplit { head, tail }.into());
    }
    Ok(())
}
