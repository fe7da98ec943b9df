use crate::errors::EncodingError;
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;

/// A character encoding that is guaranteed to encode ASCII characters with
/// the same bytes as ASCII does, so markup delimiters survive decoding intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiCompatibleEncoding(&'static Encoding);

impl AsciiCompatibleEncoding {
    /// Returns `None` if the encoding is not ASCII-compatible.
    #[inline]
    pub fn new(encoding: &'static Encoding) -> Option<Self> {
        encoding.is_ascii_compatible().then_some(Self(encoding))
    }

    #[inline]
    pub fn utf_8() -> Self {
        Self(UTF_8)
    }
}

impl From<AsciiCompatibleEncoding> for &'static Encoding {
    #[inline]
    fn from(encoding: AsciiCompatibleEncoding) -> Self {
        encoding.0
    }
}

impl TryFrom<&'static Encoding> for AsciiCompatibleEncoding {
    type Error = EncodingError;

    #[inline]
    fn try_from(encoding: &'static Encoding) -> Result<Self, EncodingError> {
        Self::new(encoding).ok_or(EncodingError::NonAsciiCompatibleEncoding)
    }
}

/// Specifies how byte input is turned into markup text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The encoding of byte input.
    ///
    /// A byte order mark at the start of the input takes precedence.
    ///
    /// ### Default
    ///
    /// `UTF-8`.
    pub encoding: AsciiCompatibleEncoding,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Settings {
            encoding: AsciiCompatibleEncoding::utf_8(),
        }
    }
}

impl Settings {
    /// Creates settings for the encoding with the given [WHATWG label].
    ///
    /// [WHATWG label]: https://encoding.spec.whatwg.org/#names-and-labels
    pub fn from_encoding_label(label: &str) -> Result<Self, EncodingError> {
        let encoding = Encoding::for_label_no_replacement(label.as_bytes())
            .ok_or(EncodingError::UnknownEncoding)?;

        Ok(Settings {
            encoding: encoding.try_into()?,
        })
    }

    /// Decodes `input`, replacing malformed sequences with U+FFFD.
    pub fn decode<'b>(&self, input: &'b [u8]) -> Cow<'b, str> {
        let encoding: &'static Encoding = self.encoding.into();
        let (text, _actual_encoding, _had_errors) = encoding.decode(input);

        text
    }
}
