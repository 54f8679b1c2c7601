use crate::{Alphabet, Error, Result, Segment};
use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

// Never emit `=`, but tolerate it on input so padded segments from other
// encoders still decode. Non-canonical trailing bits are rejected, which keeps
// decode-then-encode byte-for-byte stable.
const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

static STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);
static URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, CONFIG);

impl Alphabet {
    pub(crate) fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::Standard => &STANDARD,
            Self::UrlSafe => &URL_SAFE,
        }
    }
}

/// Number of characters an unpadded encoding of `len` bytes occupies.
pub(crate) const fn encoded_len(len: usize) -> usize {
    (len * 4).div_ceil(3)
}

pub(crate) fn encode_into(alphabet: Alphabet, bytes: &[u8], out: &mut String) {
    alphabet.engine().encode_string(bytes, out);
}

pub(crate) fn decode(alphabet: Alphabet, input: &str, segment: Segment) -> Result<Vec<u8>> {
    alphabet
        .engine()
        .decode(input)
        .map_err(|source| Error::Decode { segment, source })
}
