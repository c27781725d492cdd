use core::fmt;

/// Recoverable failure to decode a single glyph.
///
/// Drawing entry points never return this; the affected glyph is skipped,
/// logged and counted in [`TextDiagnostics`](crate::TextDiagnostics).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphError {
    /// Run lengths of an encoded glyph do not sum to `width * height`.
    MalformedGlyphStream {
        code: u32,
        expected: u32,
        actual: u32,
    },
    /// The font tables are too short to hold the glyph's bitmap.
    TruncatedGlyphTable { code: u32 },
}

impl GlyphError {
    /// Character code of the glyph that failed.
    pub fn code(&self) -> u32 {
        match self {
            Self::MalformedGlyphStream { code, .. } | Self::TruncatedGlyphTable { code } => *code,
        }
    }
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGlyphStream {
                code,
                expected,
                actual,
            } => write!(
                f,
                "malformed glyph stream for U+{:04X}: runs cover {} pixels, expected {}",
                code, actual, expected
            ),
            Self::TruncatedGlyphTable { code } => {
                write!(f, "glyph table truncated at U+{:04X}", code)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GlyphError {}

/// Number could not be rendered as digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberError {
    /// Magnitude does not fit the 31-bit integer part (or is not finite).
    Overflow,
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "number too large to format"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NumberError {}
