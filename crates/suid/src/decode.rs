use crate::validate::validate_random_split;
use crate::{
    Alphabet, InputError, ParseOptions, Result, Segment, SuidOptions, TIMESTAMP_BYTES, Timestamp,
    codec, validate_separator,
};
use core::str::FromStr;
use std::time::SystemTime;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The parts recovered from a SUID, plus the options used to decode it.
///
/// Converting a `ParsedSuid` into [`SuidOptions`] and generating again yields
/// the original string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedSuid {
    pub timestamp: Timestamp,
    pub random_bits: Vec<u8>,
    pub alphabet: Alphabet,
    pub separator: char,
}

impl ParsedSuid {
    /// The timestamp as a date.
    pub fn date(&self) -> SystemTime {
        self.timestamp.to_system_time()
    }

    /// Re-encodes these parts.
    ///
    /// # Errors
    ///
    /// Fails like [`generate_suid`](crate::generate_suid), e.g. when the
    /// decoded timestamp is zero.
    pub fn to_suid(&self) -> Result<String> {
        crate::generate_suid(SuidOptions::from(self.clone()))
    }
}

impl FromStr for ParsedSuid {
    type Err = crate::Error;

    /// Parses with the default alphabet and separator.
    fn from_str(s: &str) -> Result<Self> {
        parse_suid(s, ParseOptions::default())
    }
}

/// Decodes a SUID into its timestamp and random bits.
///
/// `options` must carry the alphabet and separator the SUID was generated
/// with; neither can be detected from the string.
///
/// ```
/// use suid::{ParseOptions, parse_suid};
///
/// let parsed = parse_suid("AZO/CBwA.7OVIxUqb.bwCQ9SsB", ParseOptions::default()).unwrap();
/// assert_eq!(parsed.timestamp.as_millis(), 1_734_076_800_000);
/// assert_eq!(
///     parsed.random_bits,
///     [236, 229, 72, 197, 74, 155, 111, 0, 144, 245, 43, 1]
/// );
/// ```
///
/// # Errors
///
/// - [`Error::InvalidInput`](crate::Error::InvalidInput) if the string is
///   empty, does not have exactly three segments, has a timestamp segment that
///   is not 6 bytes wide, or has random segments an encoder could not have
///   produced.
/// - [`Error::InvalidSeparator`](crate::Error::InvalidSeparator) if the
///   options could never have produced a SUID.
/// - [`Error::Decode`](crate::Error::Decode) if a segment is not valid base64
///   for the alphabet.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(options)))]
pub fn parse_suid(suid: &str, options: ParseOptions) -> Result<ParsedSuid> {
    let ParseOptions {
        alphabet,
        separator,
    } = options;

    if suid.is_empty() {
        return Err(InputError::Empty.into());
    }
    validate_separator(separator, alphabet)?;

    let mut segments = suid.split(separator);
    let (Some(time_seg), Some(head_seg), Some(tail_seg), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        let found = suid.split(separator).count();
        #[cfg(feature = "tracing")]
        tracing::debug!(found, "wrong number of segments");
        return Err(InputError::SegmentCount { found }.into());
    };

    let time_bytes = codec::decode(alphabet, time_seg, Segment::Timestamp)?;
    let Ok(time_bytes) = <[u8; TIMESTAMP_BYTES]>::try_from(time_bytes.as_slice()) else {
        return Err(InputError::TimestampLength {
            len: time_bytes.len(),
        }
        .into());
    };

    let mut random_bits = codec::decode(alphabet, head_seg, Segment::RandomHead)?;
    let tail = codec::decode(alphabet, tail_seg, Segment::RandomTail)?;
    validate_random_split(random_bits.len(), tail.len())?;
    random_bits.extend_from_slice(&tail);

    Ok(ParsedSuid {
        timestamp: Timestamp::from_be_bytes(time_bytes),
        random_bits,
        alphabet,
        separator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, TimestampError, generate_suid};
    use std::time::{Duration, UNIX_EPOCH};

    const KNOWN: &str = "AZO/CBwA.7OVIxUqb.bwCQ9SsB";
    const KNOWN_BITS: [u8; 12] = [236, 229, 72, 197, 74, 155, 111, 0, 144, 245, 43, 1];

    #[test]
    fn known_vector() {
        let parsed = parse_suid(KNOWN, ParseOptions::default()).unwrap();
        assert_eq!(parsed.timestamp.as_millis(), 1_734_076_800_000);
        assert_eq!(parsed.random_bits, KNOWN_BITS);
        assert_eq!(parsed.alphabet, Alphabet::Standard);
        assert_eq!(parsed.separator, '.');
        assert_eq!(
            parsed.date(),
            UNIX_EPOCH + Duration::from_millis(1_734_076_800_000)
        );
    }

    #[test]
    fn from_str_uses_defaults() {
        let parsed: ParsedSuid = KNOWN.parse().unwrap();
        assert_eq!(parsed, parse_suid(KNOWN, ParseOptions::default()).unwrap());
    }

    #[test]
    fn reencodes_to_same_string() {
        let parsed = parse_suid(KNOWN, ParseOptions::default()).unwrap();
        assert_eq!(parsed.to_suid().unwrap(), KNOWN);
        assert_eq!(generate_suid(parsed.into()).unwrap(), KNOWN);
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            parse_suid("", ParseOptions::default()),
            Err(Error::InvalidInput(InputError::Empty))
        );
    }

    #[test]
    fn wrong_segment_count() {
        assert_eq!(
            parse_suid("AZO/CBwA.7OVIxUqb", ParseOptions::default()),
            Err(Error::InvalidInput(InputError::SegmentCount { found: 2 }))
        );
        assert_eq!(
            parse_suid("AZO/CBwA.7OVIxUqb.bwCQ9SsB.AA", ParseOptions::default()),
            Err(Error::InvalidInput(InputError::SegmentCount { found: 4 }))
        );
    }

    #[test]
    fn wrong_separator_is_reported() {
        let options = ParseOptions::default().with_separator(':');
        assert_eq!(
            parse_suid(KNOWN, options),
            Err(Error::InvalidInput(InputError::SegmentCount { found: 1 }))
        );
    }

    #[test]
    fn wrong_alphabet_is_reported() {
        let options = ParseOptions::default().with_alphabet(Alphabet::UrlSafe);
        assert!(matches!(
            parse_suid(KNOWN, options),
            Err(Error::Decode {
                segment: Segment::Timestamp,
                ..
            })
        ));
    }

    #[test]
    fn invalid_separator_is_rejected() {
        let options = ParseOptions::default()
            .with_alphabet(Alphabet::UrlSafe)
            .with_separator('-');
        assert!(matches!(
            parse_suid("AZO_CBwA-7OVIxUqb-bwCQ9SsB", options),
            Err(Error::InvalidSeparator { .. })
        ));
    }

    #[test]
    fn timestamp_must_be_six_bytes() {
        assert_eq!(
            parse_suid("AZO/CA.7OVIxUqb.bwCQ9SsB", ParseOptions::default()),
            Err(Error::InvalidInput(InputError::TimestampLength { len: 4 }))
        );
        assert_eq!(
            parse_suid(".7OVIxUqb.bwCQ9SsB", ParseOptions::default()),
            Err(Error::InvalidInput(InputError::TimestampLength { len: 0 }))
        );
    }

    #[test]
    fn random_halves_must_match_encoder_split() {
        assert_eq!(
            parse_suid("AZO/CBwA..", ParseOptions::default()),
            Err(Error::InvalidInput(InputError::RandomSplit { head: 0, tail: 0 }))
        );
        // Longer half first never comes out of the encoder.
        assert_eq!(
            parse_suid("AZO/CBwA.//8./w", ParseOptions::default()),
            Err(Error::InvalidInput(InputError::RandomSplit { head: 2, tail: 1 }))
        );
    }

    #[test]
    fn accepts_padded_segments() {
        let parsed = parse_suid("AZO/CBwA./w==.//8=", ParseOptions::default()).unwrap();
        assert_eq!(parsed.random_bits, [0xff, 0xff, 0xff]);
        // Re-encoding drops the padding.
        assert_eq!(parsed.to_suid().unwrap(), "AZO/CBwA./w.//8");
    }

    #[test]
    fn zero_timestamp_decodes_but_does_not_reencode() {
        let parsed = parse_suid("AAAAAAAA.AA.AA", ParseOptions::default()).unwrap();
        assert_eq!(parsed.timestamp.as_millis(), 0);
        assert_eq!(
            parsed.to_suid(),
            Err(Error::InvalidTimestamp(TimestampError::NotPositive(0)))
        );
    }

    #[test]
    fn max_timestamp() {
        let options = ParseOptions::default().with_alphabet(Alphabet::UrlSafe);
        let parsed = parse_suid("________.AA.AA", options).unwrap();
        assert_eq!(parsed.timestamp, Timestamp::MAX);
    }
}
