//! Seam for the streamed anti-aliased font format.
//!
//! Decoding and alpha blending belong to the stream collaborator. The engine
//! only measures through the metrics it reports and forwards draw requests.

use crate::color::Color565;
use crate::error::GlyphError;

/// Line metrics of a loaded smooth font, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmoothFontMetrics {
    pub y_advance: u16,
    pub space_width: u16,
    pub max_ascent: u16,
    pub max_descent: u16,
}

/// Metrics of one smooth glyph, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmoothGlyphMetrics {
    pub width: u16,
    pub height: u16,
    pub x_advance: u16,
    /// Left bearing from the pen.
    pub x_offset: i16,
    /// Bitmap top relative to the top of the line.
    pub y_offset: i16,
}

/// An anti-aliased font streamed from external storage.
pub trait SmoothFont {
    fn metrics(&self) -> SmoothFontMetrics;

    /// Metrics for `code`, or `None` when the font has no such glyph.
    fn glyph_metrics(&self, code: u32) -> Option<SmoothGlyphMetrics>;

    /// Render `code` with the pen at the top-left of the line and return the
    /// pen advance.
    ///
    /// Blended pixels are handed to `plot`. A stream whose runs do not cover
    /// the glyph is reported as [`GlyphError::MalformedGlyphStream`].
    fn draw_glyph(
        &mut self,
        code: u32,
        pen: (i32, i32),
        foreground: Color565,
        background: Color565,
        plot: &mut dyn FnMut(i32, i32, Color565),
    ) -> Result<i32, GlyphError>;
}

/// Width of `text` in `font`.
///
/// Spaces use the space width and unknown glyphs one pixel more. A negative
/// left bearing on the first glyph widens the string, and the final glyph
/// contributes its ink extent rather than its advance.
pub fn measure(font: &dyn SmoothFont, text: &str) -> i32 {
    let metrics = font.metrics();
    let space = i32::from(metrics.space_width);
    let mut width = 0i32;
    let mut first = true;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let code = u32::from(ch);
        let last = chars.peek().is_none();
        match font.glyph_metrics(code).filter(|_| ch != ' ') {
            Some(glyph) => {
                let x_offset = i32::from(glyph.x_offset);
                if first && x_offset < 0 {
                    width -= x_offset;
                }
                if last {
                    width += x_offset + i32::from(glyph.width);
                } else {
                    width += i32::from(glyph.x_advance);
                }
            }
            None if ch == ' ' => width += space,
            None => width += space + 1,
        }
        first = false;
    }
    width.max(0)
}
