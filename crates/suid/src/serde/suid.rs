use serde::{Deserializer, Serializer};

/// (De)serializes a [`ParsedSuid`](crate::ParsedSuid) field as its SUID
/// string instead of as a struct.
///
/// Serialization re-encodes with the value's own alphabet and separator.
/// Deserialization parses with the defaults, so only values that use the
/// default alphabet and separator round-trip.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use suid::{ParsedSuid, as_suid};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_suid")]
///     id: ParsedSuid,
/// }
/// ```
pub mod as_suid {
    use super::*;
    use crate::{ParseOptions, ParsedSuid, parse_suid};

    pub fn serialize<S>(parsed: &ParsedSuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let suid = parsed.to_suid().map_err(serde::ser::Error::custom)?;
        s.serialize_str(&suid)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<ParsedSuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SuidVisitor;

        impl serde::de::Visitor<'_> for SuidVisitor {
            type Value = ParsedSuid;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a SUID string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                parse_suid(v, ParseOptions::default()).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(SuidVisitor)
    }
}
