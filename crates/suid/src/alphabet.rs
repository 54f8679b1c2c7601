use crate::ParseAlphabetError;
use core::{fmt, str::FromStr};

/// The base64 character set used for every segment of a SUID.
///
/// Both variants share `A-Z`, `a-z` and `0-9`; they differ only in the last
/// two symbols. The decoder cannot detect which one produced a string, so the
/// caller has to parse with the same alphabet it generated with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Alphabet {
    /// RFC 4648 section 4: `+` and `/`.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "base64"))]
    Standard,
    /// RFC 4648 section 5: `-` and `_`.
    #[cfg_attr(feature = "serde", serde(alias = "base64url"))]
    UrlSafe,
}

impl Alphabet {
    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::UrlSafe => "url-safe",
        }
    }

    /// The two symbols following the alphanumerics (values 62 and 63).
    pub const fn symbols(self) -> [char; 2] {
        match self {
            Self::Standard => ['+', '/'],
            Self::UrlSafe => ['-', '_'],
        }
    }

    /// Returns `true` if `c` can appear inside an encoded segment.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.symbols().contains(&c)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alphabet {
    type Err = ParseAlphabetError;

    /// Accepts the canonical names as well as `base64` / `base64url`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" | "base64" => Ok(Self::Standard),
            "url-safe" | "base64url" => Ok(Self::UrlSafe),
            other => Err(ParseAlphabetError(other.to_owned())),
        }
    }
}
