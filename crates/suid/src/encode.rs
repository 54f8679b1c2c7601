use crate::{
    ResolvedOptions, Result, SuidGenerator, SuidOptions, SystemClock, TIMESTAMP_BYTES, ThreadRandom,
    codec,
};

/// Generates a SUID, filling defaults from the system clock and the
/// thread-local CSPRNG.
///
/// The output is `B64(timestamp) SEP B64(bits[..mid]) SEP B64(bits[mid..])`
/// where the timestamp is 6 big-endian bytes, `mid = bits.len() / 2`, and no
/// segment carries `=` padding.
///
/// ```
/// use suid::{ParseOptions, SuidOptions, generate_suid, parse_suid};
///
/// let suid = generate_suid(SuidOptions::default()).unwrap();
/// assert_eq!(suid.matches('.').count(), 2);
/// assert!(parse_suid(&suid, ParseOptions::default()).is_ok());
/// ```
///
/// # Errors
///
/// See [`SuidOptions::resolve`].
pub fn generate_suid(options: SuidOptions) -> Result<String> {
    SuidGenerator::new(SystemClock, ThreadRandom).generate(options)
}

impl ResolvedOptions {
    /// Renders the SUID string.
    pub fn encode(&self) -> String {
        let bits = self.random_bits();
        let (head, tail) = bits.split_at(bits.len() / 2);
        let alphabet = self.alphabet();
        let separator = self.separator();

        let mut out = String::with_capacity(
            codec::encoded_len(TIMESTAMP_BYTES)
                + codec::encoded_len(head.len())
                + codec::encoded_len(tail.len())
                + 2 * separator.len_utf8(),
        );
        codec::encode_into(alphabet, &self.timestamp().to_be_bytes(), &mut out);
        out.push(separator);
        codec::encode_into(alphabet, head, &mut out);
        out.push(separator);
        codec::encode_into(alphabet, tail, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alphabet, Error, TimestampError};

    const KNOWN_MILLIS: i64 = 1_734_076_800_000; // 2024-12-13T08:00:00.000Z
    const KNOWN_BITS: [u8; 12] = [236, 229, 72, 197, 74, 155, 111, 0, 144, 245, 43, 1];

    fn known() -> SuidOptions {
        SuidOptions::new()
            .with_timestamp(KNOWN_MILLIS)
            .with_random_source(KNOWN_BITS)
    }

    #[test]
    fn known_vector() {
        assert_eq!(generate_suid(known()).unwrap(), "AZO/CBwA.7OVIxUqb.bwCQ9SsB");
    }

    #[test]
    fn known_vector_is_stable() {
        let first = generate_suid(known()).unwrap();
        for _ in 0..8 {
            assert_eq!(generate_suid(known()).unwrap(), first);
        }
    }

    #[test]
    fn custom_separator() {
        let suid = generate_suid(known().with_separator(':')).unwrap();
        assert_eq!(suid, "AZO/CBwA:7OVIxUqb:bwCQ9SsB");

        let suid = generate_suid(known().with_separator('·')).unwrap();
        assert_eq!(suid, "AZO/CBwA·7OVIxUqb·bwCQ9SsB");
    }

    #[test]
    fn url_safe_swaps_symbols() {
        let suid = generate_suid(known().with_alphabet(Alphabet::UrlSafe)).unwrap();
        assert_eq!(suid, "AZO_CBwA.7OVIxUqb.bwCQ9SsB");
        assert_ne!(suid, generate_suid(known()).unwrap());
    }

    #[test]
    fn odd_length_puts_smaller_half_first() {
        let suid = generate_suid(known().with_random_source([0xff_u8, 0xff, 0xff])).unwrap();
        let segments: Vec<_> = suid.split('.').collect();
        assert_eq!(segments, ["AZO/CBwA", "/w", "//8"]);
    }

    #[test]
    fn minimum_random_bits() {
        let suid = generate_suid(known().with_random_source([0_u8, 0])).unwrap();
        assert_eq!(suid, "AZO/CBwA.AA.AA");
    }

    #[test]
    fn smallest_timestamp_is_zero_padded() {
        let suid = generate_suid(known().with_timestamp(1_i64)).unwrap();
        assert!(suid.starts_with("AAAAAAAB."));
    }

    #[test]
    fn rejects_negative_timestamp() {
        let err = generate_suid(known().with_timestamp(-1_i64)).unwrap_err();
        assert_eq!(err, Error::InvalidTimestamp(TimestampError::NotPositive(-1)));
    }

    #[test]
    fn rejects_empty_random_bits() {
        let err = generate_suid(known().with_random_source(Vec::<u8>::new())).unwrap_err();
        assert_eq!(err, Error::InvalidRandomSource { len: 0 });
    }

    #[test]
    fn rejects_dash_with_url_safe() {
        let err = generate_suid(
            known()
                .with_alphabet(Alphabet::UrlSafe)
                .with_separator('-'),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSeparator { separator: '-', .. }));
    }

    #[test]
    fn length_matches_segment_widths() {
        let resolved = known()
            .with_random_source(vec![7_u8; 9])
            .resolve(&crate::SystemClock, &crate::ThreadRandom)
            .unwrap();
        // 8 + 6 + 7 characters plus two separators.
        assert_eq!(resolved.encode().len(), 23);
    }
}
