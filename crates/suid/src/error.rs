use crate::{Alphabet, MAX_RANDOM_BYTES, MIN_RANDOM_BYTES};
use core::fmt;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `suid` can produce.
///
/// Every variant reports malformed input. Nothing here is transient, so there
/// is nothing to retry: fix the input and call again.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The timestamp is not a positive safe integer, predates the Unix epoch,
    /// or does not fit in the 48-bit timestamp segment.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] TimestampError),

    /// The random source resolved to fewer than [`MIN_RANDOM_BYTES`] bytes, or
    /// asked to draw more than [`MAX_RANDOM_BYTES`].
    #[error(
        "random source must provide at least {min} bytes and draw at most {max}, got {len}",
        min = MIN_RANDOM_BYTES,
        max = MAX_RANDOM_BYTES
    )]
    InvalidRandomSource { len: usize },

    /// The separator cannot be told apart from the alphabet's own characters.
    ///
    /// Besides `-` with [`Alphabet::UrlSafe`], this covers every character of
    /// the chosen alphabet and the padding character `=`.
    #[error("{separator:?} is not an allowed separator for the {alphabet} alphabet")]
    InvalidSeparator { separator: char, alphabet: Alphabet },

    /// The string handed to the decoder is not a well-formed SUID.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A segment contains characters or trailing bits the alphabet rejects.
    #[error("{segment} segment is not valid base64: {source}")]
    Decode {
        segment: Segment,
        #[source]
        source: base64::DecodeError,
    },
}

/// Why a timestamp was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TimestampError {
    #[error("{0} is not a positive integer")]
    NotPositive(i64),
    #[error("{0} is larger than the largest safe integer")]
    NotSafeInteger(u64),
    #[error("{0} does not fit in 48 bits")]
    OutOfRange(u64),
    #[error("date is before the Unix epoch")]
    BeforeEpoch,
}

/// Why a string could not be decoded as a SUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InputError {
    #[error("suid must be a non-empty string")]
    Empty,
    #[error("expected 3 segments, found {found}")]
    SegmentCount { found: usize },
    #[error("timestamp segment decodes to {len} bytes, expected 6")]
    TimestampLength { len: usize },
    #[error("random segments of {head} and {tail} bytes were not produced by an encoder")]
    RandomSplit { head: usize, tail: usize },
}

/// Identifies one of the three separator-delimited parts of a SUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Timestamp,
    RandomHead,
    RandomTail,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp => f.write_str("timestamp"),
            Self::RandomHead => f.write_str("first random"),
            Self::RandomTail => f.write_str("second random"),
        }
    }
}

/// Returned when a string names neither base64 alphabet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown alphabet {0:?}, expected \"standard\" or \"url-safe\"")]
pub struct ParseAlphabetError(pub(crate) String);
