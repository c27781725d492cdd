/// Degraded-output events observed while drawing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFault {
    /// A glyph failed to decode and was skipped.
    MalformedGlyphStream,
    /// The active font has no glyph for a character.
    OutOfRangeCharacter,
    /// A font slot was requested that holds no font.
    FontUnavailable,
    /// A glyph fell wholly outside the surface and was not drawn.
    SurfaceBoundsExceeded,
    /// A number was too large to format and `...` was drawn instead.
    OverflowingNumericValue,
}

/// Saturating counters for [`TextFault`] events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextDiagnostics {
    pub malformed_glyphs: u64,
    pub missing_glyphs: u64,
    pub unavailable_fonts: u64,
    pub offscreen_glyphs: u64,
    pub numeric_overflows: u64,
}

impl TextDiagnostics {
    /// Total event count across all faults.
    pub fn total(&self) -> u64 {
        self.malformed_glyphs
            .saturating_add(self.missing_glyphs)
            .saturating_add(self.unavailable_fonts)
            .saturating_add(self.offscreen_glyphs)
            .saturating_add(self.numeric_overflows)
    }

    pub(crate) fn note(&mut self, fault: TextFault) {
        let counter = match fault {
            TextFault::MalformedGlyphStream => &mut self.malformed_glyphs,
            TextFault::OutOfRangeCharacter => &mut self.missing_glyphs,
            TextFault::FontUnavailable => &mut self.unavailable_fonts,
            TextFault::SurfaceBoundsExceeded => &mut self.offscreen_glyphs,
            TextFault::OverflowingNumericValue => &mut self.numeric_overflows,
        };
        *counter = counter.saturating_add(1);
    }
}
