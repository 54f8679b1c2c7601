use crate::validate::validate_unsigned_millis;
use crate::{
    Alphabet, DEFAULT_ALPHABET, DEFAULT_RANDOM_BYTES, DEFAULT_SEPARATOR, ParsedSuid, RandSource,
    Result, TimeSource, Timestamp, validate_date, validate_random_bits, validate_random_length,
    validate_separator, validate_timestamp_millis,
};
use std::time::SystemTime;

/// Where the encoder takes its timestamp from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimestampSource {
    /// Read the configured [`TimeSource`] when the options are resolved.
    #[default]
    Now,
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// A date, truncated to whole milliseconds.
    Date(SystemTime),
}

impl From<i64> for TimestampSource {
    fn from(millis: i64) -> Self {
        Self::Millis(millis)
    }
}

impl From<SystemTime> for TimestampSource {
    fn from(date: SystemTime) -> Self {
        Self::Date(date)
    }
}

impl From<Timestamp> for TimestampSource {
    fn from(ts: Timestamp) -> Self {
        // Lossless: a Timestamp never exceeds 48 bits.
        Self::Millis(ts.as_millis() as i64)
    }
}

/// Where the encoder takes its random bits from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RandomSource {
    /// [`DEFAULT_RANDOM_BYTES`] bytes from the configured [`RandSource`].
    #[default]
    Default,
    /// Exactly these bytes.
    Bytes(Vec<u8>),
    /// This many bytes from the configured [`RandSource`], at most
    /// [`MAX_RANDOM_BYTES`](crate::MAX_RANDOM_BYTES).
    Length(usize),
}

impl From<Vec<u8>> for RandomSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for RandomSource {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for RandomSource {
    fn from(bytes: [u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<usize> for RandomSource {
    fn from(len: usize) -> Self {
        Self::Length(len)
    }
}

/// Encoder configuration. Every field has a default.
///
/// Options are inert until [`SuidOptions::resolve`] turns them into a
/// [`ResolvedOptions`]: only then is the clock read or randomness drawn, so a
/// `SuidOptions` value can be built once and reused without every call sharing
/// the same random bytes.
///
/// ```
/// use suid::{Alphabet, SuidOptions, generate_suid};
///
/// let suid = generate_suid(
///     SuidOptions::new()
///         .with_timestamp(1_734_076_800_000_i64)
///         .with_random_source([236_u8, 229, 72, 197, 74, 155, 111, 0, 144, 245, 43, 1])
///         .with_alphabet(Alphabet::Standard)
///         .with_separator('.'),
/// )
/// .unwrap();
/// assert_eq!(suid, "AZO/CBwA.7OVIxUqb.bwCQ9SsB");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuidOptions {
    pub timestamp: TimestampSource,
    pub random_source: RandomSource,
    pub alphabet: Alphabet,
    pub separator: char,
}

impl Default for SuidOptions {
    fn default() -> Self {
        Self {
            timestamp: TimestampSource::Now,
            random_source: RandomSource::Default,
            alphabet: DEFAULT_ALPHABET,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl SuidOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<TimestampSource>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub fn with_random_source(mut self, random_source: impl Into<RandomSource>) -> Self {
        self.random_source = random_source.into();
        self
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Normalizes and validates the options.
    ///
    /// Dates become milliseconds, byte counts become freshly drawn bytes, and
    /// defaults are filled in from `time` and `rand`. Checks run in order:
    /// timestamp, random source, then separator.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp)
    /// - [`Error::InvalidRandomSource`](crate::Error::InvalidRandomSource)
    /// - [`Error::InvalidSeparator`](crate::Error::InvalidSeparator)
    pub fn resolve<T, R>(self, time: &T, rand: &R) -> Result<ResolvedOptions>
    where
        T: TimeSource + ?Sized,
        R: RandSource + ?Sized,
    {
        let timestamp = match self.timestamp {
            TimestampSource::Now => validate_unsigned_millis(time.current_millis()),
            TimestampSource::Millis(millis) => validate_timestamp_millis(millis),
            TimestampSource::Date(date) => validate_date(date),
        }?;

        let random_bits = match self.random_source {
            RandomSource::Default => rand.bytes(DEFAULT_RANDOM_BYTES),
            RandomSource::Bytes(bytes) => bytes,
            RandomSource::Length(len) => {
                validate_random_length(len)?;
                rand.bytes(len)
            }
        };
        validate_random_bits(&random_bits)?;

        validate_separator(self.separator, self.alphabet)?;

        Ok(ResolvedOptions {
            timestamp,
            random_bits,
            alphabet: self.alphabet,
            separator: self.separator,
        })
    }
}

impl From<ParsedSuid> for SuidOptions {
    fn from(parsed: ParsedSuid) -> Self {
        Self {
            timestamp: parsed.timestamp.into(),
            random_source: RandomSource::Bytes(parsed.random_bits),
            alphabet: parsed.alphabet,
            separator: parsed.separator,
        }
    }
}

/// Fully validated encoder input. Encoding it cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedOptions {
    timestamp: Timestamp,
    random_bits: Vec<u8>,
    alphabet: Alphabet,
    separator: char,
}

impl ResolvedOptions {
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn random_bits(&self) -> &[u8] {
        &self.random_bits
    }

    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub const fn separator(&self) -> char {
        self.separator
    }
}

/// Decoder configuration. Must match the options the SUID was generated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    pub alphabet: Alphabet,
    pub separator: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl From<&SuidOptions> for ParseOptions {
    fn from(options: &SuidOptions) -> Self {
        Self {
            alphabet: options.alphabet,
            separator: options.separator,
        }
    }
}

impl From<&ResolvedOptions> for ParseOptions {
    fn from(options: &ResolvedOptions) -> Self {
        Self {
            alphabet: options.alphabet,
            separator: options.separator,
        }
    }
}
