//! String measurement, datum placement, padding and the character stream.

use alloc::boxed::Box;
use core::fmt;

use crate::color::Color565;
use crate::config::EngineConfig;
use crate::diagnostics::{TextDiagnostics, TextFault};
use crate::font::{FontFace, FontId, FontRegistry, OutlineFont, FIRST_TABLE_CODE, LAST_TABLE_CODE};
use crate::glyph::{FontFormat, GlyphSource};
use crate::number::{format_float, format_integer};
use crate::render::{blit, is_off_surface, DisplaySurface, Paint};
use crate::smooth::{self, SmoothFont};
use crate::state::{Datum, HorizontalAlign, TextState, TextStyle, VerticalAnchor, MAX_TEXT_SIZE};

/// Text drawn in place of a number that cannot be formatted.
const OVERFLOW_TEXT: &str = "...";

/// Text layout engine for one display.
///
/// Owns the cursor and style state and borrows the font tables. Drawing goes
/// through a caller-supplied [`DisplaySurface`]; surface errors are returned,
/// while per-glyph problems are logged, counted in [`TextDiagnostics`] and
/// degrade to drawing nothing for that glyph.
pub struct TextEngine<'a> {
    fonts: FontRegistry<'a>,
    state: TextState<'a>,
    smooth: Option<Box<dyn SmoothFont + 'a>>,
    panel_width: u16,
    panel_height: u16,
    width: i32,
    height: i32,
    rotation: u8,
    diagnostics: TextDiagnostics,
}

impl<'a> TextEngine<'a> {
    pub fn new(config: EngineConfig, fonts: FontRegistry<'a>) -> Self {
        let mut engine = Self {
            fonts,
            state: TextState::new(config.style),
            smooth: None,
            panel_width: config.width,
            panel_height: config.height,
            width: i32::from(config.width),
            height: i32::from(config.height),
            rotation: 0,
            diagnostics: TextDiagnostics::default(),
        };
        engine.set_rotation(config.rotation);
        engine
    }

    /// Logical width at the current rotation.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Logical height at the current rotation.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Store `rotation & 3`; odd rotations swap the logical width and height.
    pub fn set_rotation(&mut self, rotation: u8) {
        self.rotation = rotation & 3;
        let (width, height) = if self.rotation % 2 == 0 {
            (self.panel_width, self.panel_height)
        } else {
            (self.panel_height, self.panel_width)
        };
        self.width = i32::from(width);
        self.height = i32::from(height);
    }

    pub fn fonts(&self) -> &FontRegistry<'a> {
        &self.fonts
    }

    /// Bitmask with bit N set when built-in font slot N is loaded.
    pub fn fonts_loaded(&self) -> u16 {
        self.fonts.loaded_mask()
    }

    pub fn diagnostics(&self) -> TextDiagnostics {
        self.diagnostics
    }

    pub fn reset_diagnostics(&mut self) {
        self.diagnostics = TextDiagnostics::default();
    }

    pub fn state(&self) -> &TextState<'a> {
        &self.state
    }

    pub fn style(&self) -> &TextStyle {
        self.state.style()
    }

    pub fn cursor_x(&self) -> i32 {
        self.state.cursor_x
    }

    pub fn cursor_y(&self) -> i32 {
        self.state.cursor_y
    }

    pub fn text_datum(&self) -> Datum {
        self.state.style().datum
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.state.set_cursor(x, y);
    }

    pub fn set_cursor_with_font(&mut self, x: i32, y: i32, font: FontId) {
        self.state.set_cursor_with_font(x, y, font);
    }

    /// Transparent text in `color`.
    pub fn set_text_color(&mut self, color: Color565) {
        self.state.set_text_color(color);
    }

    pub fn set_text_colors(&mut self, foreground: Color565, background: Color565) {
        self.state.set_text_colors(foreground, background);
    }

    pub fn set_text_size(&mut self, size: u8) {
        self.state.set_text_size(size);
    }

    pub fn set_text_font(&mut self, font: FontId) {
        self.state.set_text_font(font);
    }

    pub fn set_free_font(&mut self, font: Option<OutlineFont<'a>>) {
        self.state.set_free_font(font);
    }

    pub fn set_text_datum(&mut self, datum: Datum) {
        self.state.set_text_datum(datum);
    }

    pub fn set_text_padding(&mut self, width: u16) {
        self.state.set_text_padding(width);
    }

    pub fn set_text_wrap(&mut self, wrap_x: bool, wrap_y: bool) {
        self.state.set_text_wrap(wrap_x, wrap_y);
    }

    /// Route all text through `font` until it is unloaded.
    pub fn load_smooth_font(&mut self, font: Box<dyn SmoothFont + 'a>) {
        self.smooth = Some(font);
    }

    /// Return to the built-in fonts, handing back the smooth font.
    pub fn unload_smooth_font(&mut self) -> Option<Box<dyn SmoothFont + 'a>> {
        self.smooth.take()
    }

    /// Format used for text in the current style, or `None` when the active
    /// slot is empty.
    pub fn active_format(&self) -> Option<FontFormat> {
        if self.smooth.is_some() {
            return Some(FontFormat::StreamedSmooth);
        }
        self.glyph_source(self.state.style().font)
            .map(|source| source.format())
    }

    /// Width of `text` in the current font.
    pub fn text_width(&self, text: &str) -> i32 {
        self.text_width_with_font(text, self.state.style().font)
    }

    /// Width of `text` in `font`: the sum of the scaled glyph advances.
    /// Depends only on the text, the font and the size multiplier.
    pub fn text_width_with_font(&self, text: &str, font: FontId) -> i32 {
        if let Some(smooth) = self.smooth.as_deref() {
            return smooth::measure(smooth, text);
        }
        let Some(source) = self.glyph_source(font) else {
            return 0;
        };
        let size = i32::from(self.state.style().size);
        text.chars()
            .map(|ch| i32::from(source.advance(u32::from(ch))) * size)
            .sum()
    }

    /// Line height of the current font.
    pub fn font_height(&self) -> i32 {
        self.font_height_with_font(self.state.style().font)
    }

    pub fn font_height_with_font(&self, font: FontId) -> i32 {
        if let Some(smooth) = self.smooth.as_deref() {
            return i32::from(smooth.metrics().y_advance);
        }
        let size = i32::from(self.state.style().size);
        if font == 1 {
            if let Some(outline) = self.state.outline() {
                return i32::from(outline.font.y_advance) * size;
            }
        }
        i32::from(self.fonts.height_of(font)) * size
    }

    /// Draw one character in the current font with its pen at (`x`, `y`).
    pub fn draw_char<S>(&mut self, surface: &mut S, ch: char, x: i32, y: i32) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        self.draw_char_with_font(surface, ch, x, y, self.state.style().font)
    }

    /// Draw one character and return its scaled advance.
    ///
    /// The pen is the glyph's top-left corner, or its baseline origin for an
    /// outline font. Glyphs that fail to decode or miss the surface still
    /// return their advance.
    pub fn draw_char_with_font<S>(
        &mut self,
        surface: &mut S,
        ch: char,
        x: i32,
        y: i32,
        font: FontId,
    ) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        let code = u32::from(ch);
        let style = *self.state.style();
        if let Some(smooth) = self.smooth.as_deref_mut() {
            return draw_smooth_glyph(
                smooth,
                surface,
                code,
                (x, y),
                style.foreground,
                style.background,
                &mut self.diagnostics,
            );
        }
        let Some(source) = self.glyph_source(font) else {
            self.note_unavailable(font);
            return Ok(0);
        };
        let paint = self.paint();
        self.draw_glyph(surface, &source, code, x, y, paint)
    }

    /// Draw `ch` from font 1 (or the installed outline font) with explicit
    /// colours and size, ignoring the text style.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_char_cell<S>(
        &mut self,
        surface: &mut S,
        x: i32,
        y: i32,
        ch: char,
        foreground: Color565,
        background: Color565,
        size: u8,
    ) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        let Some(source) = self.glyph_source(1) else {
            self.note_unavailable(1);
            return Ok(0);
        };
        let paint = Paint {
            size: size.clamp(1, MAX_TEXT_SIZE),
            foreground,
            background,
            fill_background: true,
        };
        self.draw_glyph(surface, &source, u32::from(ch), x, y, paint)
    }

    /// Draw `text` in the current font at (`x`, `y`) interpreted by the datum.
    pub fn draw_string<S>(&mut self, surface: &mut S, text: &str, x: i32, y: i32) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        self.draw_string_with_font(surface, text, x, y, self.state.style().font)
    }

    /// Draw `text` in `font` and return the sum of the drawn advances.
    ///
    /// A non top-left datum or a non-zero padding moves the origin by the
    /// datum and then clamps it onto the surface. When the padding exceeds
    /// the text width and the text is not transparent, the remainder is
    /// filled with the background colour on the side(s) the datum's
    /// horizontal class selects.
    pub fn draw_string_with_font<S>(
        &mut self,
        surface: &mut S,
        text: &str,
        x: i32,
        y: i32,
        font: FontId,
    ) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        let style = *self.state.style();
        let size = i32::from(style.size);
        let transparent = style.foreground == style.background;
        let smooth_metrics = self.smooth.as_deref().map(|smooth| smooth.metrics());
        let source = self.glyph_source(font);
        if smooth_metrics.is_none() && source.is_none() {
            self.note_unavailable(font);
            return Ok(0);
        }
        let outline = if smooth_metrics.is_none() && font == 1 {
            self.state.outline().copied()
        } else {
            None
        };

        let mut cwidth = self.text_width_with_font(text, font);
        let (cheight, baseline) = match (smooth_metrics, outline) {
            (Some(metrics), _) => (i32::from(metrics.y_advance), i32::from(metrics.max_ascent)),
            (None, Some(outline)) => {
                let ascent = i32::from(outline.ascent) * size;
                let descent = i32::from(outline.descent) * size;
                (ascent + descent, ascent)
            }
            (None, None) => (
                self.font_height_with_font(font),
                i32::from(self.fonts.baseline_of(font)) * size,
            ),
        };

        let mut left = x;
        let mut top = y;
        if style.datum != Datum::TopLeft || style.padding != 0 {
            match style.datum.horizontal() {
                HorizontalAlign::Left => {}
                HorizontalAlign::Center => left = left.saturating_sub(cwidth / 2),
                HorizontalAlign::Right => left = left.saturating_sub(cwidth),
            }
            match style.datum.vertical() {
                VerticalAnchor::Top => {}
                VerticalAnchor::Middle => top = top.saturating_sub(cheight / 2),
                VerticalAnchor::Bottom => top = top.saturating_sub(cheight),
                VerticalAnchor::Baseline => top = top.saturating_sub(baseline),
            }
            if left < 0 {
                left = 0;
            }
            if left.saturating_add(cwidth) > self.width {
                left = self.width - cwidth;
            }
            if top < 0 {
                top = 0;
            }
            if top.saturating_add(cheight) > self.height {
                top = self.height - cheight;
            }
        }

        // Outline text gets one background box; its glyphs paint ink only.
        let mut ink_left = left;
        if let (Some(outline), false) = (outline, transparent) {
            let first = text.chars().next().and_then(|ch| outline.font.glyph(u32::from(ch)));
            if let Some(glyph) = first {
                let x_offset = (i32::from(glyph.x_offset) * size).min(0);
                cwidth -= x_offset;
                ink_left = left.saturating_add(x_offset);
                fill_area(surface, ink_left, top, cwidth, cheight, style.background)?;
            }
        }

        let drawn = if let Some(smooth) = self.smooth.as_deref_mut() {
            if !transparent {
                fill_area(surface, left, top, cwidth, cheight, style.background)?;
            }
            let mut pen_x = left;
            for ch in text.chars() {
                let advance = draw_smooth_glyph(
                    smooth,
                    surface,
                    u32::from(ch),
                    (pen_x, top),
                    style.foreground,
                    style.background,
                    &mut self.diagnostics,
                )?;
                pen_x = pen_x.saturating_add(advance);
            }
            cwidth
        } else if let Some(source) = source {
            let ascent = outline.map_or(0, |outline| i32::from(outline.ascent) * size);
            let pen_y = top.saturating_add(ascent);
            let paint = self.paint();
            let mut advance = 0i32;
            for ch in text.chars() {
                let pen_x = left.saturating_add(advance);
                let glyph_advance =
                    self.draw_glyph(surface, &source, u32::from(ch), pen_x, pen_y, paint)?;
                advance = advance.saturating_add(glyph_advance);
            }
            advance
        } else {
            0
        };

        let padding = i32::from(style.padding);
        if padding > cwidth && !transparent {
            let spare = padding - cwidth;
            let ink_right = ink_left.saturating_add(cwidth);
            let background = style.background;
            match style.datum.horizontal() {
                HorizontalAlign::Left => {
                    fill_area(surface, ink_right, top, spare, cheight, background)?;
                }
                HorizontalAlign::Center => {
                    let right = spare / 2;
                    let left_pad = spare - right;
                    fill_area(surface, ink_right, top, right, cheight, background)?;
                    let pad_left = ink_left.saturating_sub(left_pad);
                    fill_area(surface, pad_left, top, left_pad, cheight, background)?;
                }
                HorizontalAlign::Right => {
                    let pad_left = ink_left.saturating_sub(spare);
                    fill_area(surface, pad_left, top, spare, cheight, background)?;
                }
            }
        }

        Ok(drawn)
    }

    /// Draw `value` in base 10 through [`draw_string`](Self::draw_string).
    pub fn draw_number<S>(&mut self, surface: &mut S, value: i64, x: i32, y: i32) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        self.draw_number_with_font(surface, value, x, y, self.state.style().font)
    }

    pub fn draw_number_with_font<S>(
        &mut self,
        surface: &mut S,
        value: i64,
        x: i32,
        y: i32,
        font: FontId,
    ) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        let text = format_integer(value);
        self.draw_string_with_font(surface, &text, x, y, font)
    }

    /// Draw `value` with `decimals` fraction digits (at most 7).
    pub fn draw_float<S>(
        &mut self,
        surface: &mut S,
        value: f64,
        decimals: u8,
        x: i32,
        y: i32,
    ) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        self.draw_float_with_font(surface, value, decimals, x, y, self.state.style().font)
    }

    /// Draw `value` in `font`; magnitudes that overflow 31 bits draw `...`.
    pub fn draw_float_with_font<S>(
        &mut self,
        surface: &mut S,
        value: f64,
        decimals: u8,
        x: i32,
        y: i32,
        font: FontId,
    ) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        match format_float(value, decimals) {
            Ok(text) => self.draw_string_with_font(surface, &text, x, y, font),
            Err(err) => {
                log::debug!("{}: drawing placeholder for {}", err, value);
                self.diagnostics.note(TextFault::OverflowingNumericValue);
                self.draw_string_with_font(surface, OVERFLOW_TEXT, x, y, font)
            }
        }
    }

    /// Draw `ch` at the cursor and advance it.
    ///
    /// `'\r'` is ignored and `'\n'` moves to the start of the next line.
    /// With x-wrap enabled a glyph that would cross the right edge is moved
    /// to the next line first; with y-wrap enabled a cursor below the surface
    /// returns to the top. Returns `false` when nothing could be drawn: the
    /// font is unavailable, lacks the character, or `ch` is another control
    /// code.
    pub fn feed<S>(&mut self, surface: &mut S, ch: char) -> Result<bool, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        if ch == '\r' {
            return Ok(true);
        }
        let style = *self.state.style();
        let size = i32::from(style.size);
        let code = u32::from(ch);

        if let Some(metrics) = self.smooth.as_deref().map(|smooth| smooth.metrics()) {
            let line = i32::from(metrics.y_advance);
            if ch == '\n' {
                self.new_line(line);
                return Ok(true);
            }
            if code < FIRST_TABLE_CODE {
                return Ok(false);
            }
            let extent = self
                .smooth
                .as_deref()
                .and_then(|smooth| smooth.glyph_metrics(code))
                .map_or(i32::from(metrics.space_width), |glyph| {
                    i32::from(glyph.x_offset) + i32::from(glyph.width)
                });
            self.wrap_before(extent, line);
            let pen = (self.state.cursor_x, self.state.cursor_y);
            if let Some(smooth) = self.smooth.as_deref_mut() {
                let advance = draw_smooth_glyph(
                    smooth,
                    surface,
                    code,
                    pen,
                    style.foreground,
                    style.background,
                    &mut self.diagnostics,
                )?;
                self.state.cursor_x = self.state.cursor_x.saturating_add(advance);
            }
            return Ok(true);
        }

        if let Some(outline) = self.state.outline().copied() {
            let line = i32::from(outline.font.y_advance) * size;
            if ch == '\n' {
                self.new_line(line);
                return Ok(true);
            }
            let Some(glyph) = outline.font.glyph(code) else {
                self.note_missing(code);
                return Ok(false);
            };
            if glyph.width > 0 && glyph.height > 0 {
                self.wrap_before(size * (i32::from(glyph.x_offset) + i32::from(glyph.width)), line);
                let (x, y) = (self.state.cursor_x, self.state.cursor_y);
                let paint = self.paint();
                self.draw_glyph(surface, &GlyphSource::Outline(outline.font), code, x, y, paint)?;
            }
            let advance = i32::from(glyph.x_advance) * size;
            self.state.cursor_x = self.state.cursor_x.saturating_add(advance);
            return Ok(true);
        }

        let Some(source) = self.glyph_source(style.font) else {
            self.note_unavailable(style.font);
            return Ok(false);
        };
        let line = i32::from(self.fonts.height_of(style.font)) * size;
        if ch == '\n' {
            self.new_line(line);
            return Ok(true);
        }
        if code < FIRST_TABLE_CODE {
            return Ok(false);
        }
        if !matches!(source, GlyphSource::Fixed(_)) && code > LAST_TABLE_CODE {
            self.note_missing(code);
            return Ok(false);
        }
        self.wrap_before(i32::from(source.advance(code)) * size, line);
        let (x, y) = (self.state.cursor_x, self.state.cursor_y);
        let paint = self.paint();
        let advance = self.draw_glyph(surface, &source, code, x, y, paint)?;
        self.state.cursor_x = self.state.cursor_x.saturating_add(advance);
        Ok(true)
    }

    /// [`feed`](Self::feed) every character of `text`; returns how many were
    /// accepted.
    pub fn write_str<S>(&mut self, surface: &mut S, text: &str) -> Result<usize, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        let mut accepted = 0;
        for ch in text.chars() {
            if self.feed(surface, ch)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    fn glyph_source(&self, font: FontId) -> Option<GlyphSource<'a>> {
        if font == 1 {
            if let Some(outline) = self.state.outline() {
                return Some(GlyphSource::Outline(outline.font));
            }
        }
        self.fonts.face(font).map(|face| match *face {
            FontFace::Fixed(font) => GlyphSource::Fixed(font),
            FontFace::WidthTable(font) => GlyphSource::WidthTable(font),
            FontFace::RunLength(font) => GlyphSource::RunLength(font),
        })
    }

    fn paint(&self) -> Paint {
        let style = self.state.style();
        Paint {
            size: style.size,
            foreground: style.foreground,
            background: style.background,
            fill_background: true,
        }
    }

    fn draw_glyph<S>(
        &mut self,
        surface: &mut S,
        source: &GlyphSource<'a>,
        code: u32,
        x: i32,
        y: i32,
        paint: Paint,
    ) -> Result<i32, S::Error>
    where
        S: DisplaySurface + ?Sized,
    {
        let size = i32::from(paint.size.max(1));
        let glyph = match source.decode(code) {
            Ok(glyph) => glyph,
            Err(err) => {
                log::warn!("skipping glyph: {}", err);
                self.diagnostics.note(TextFault::MalformedGlyphStream);
                return Ok(i32::from(source.advance(code)) * size);
            }
        };
        let advance = i32::from(glyph.advance) * size;
        if glyph.missing {
            self.note_missing(code);
        }
        if glyph.is_blank() {
            return Ok(advance);
        }

        let origin_x = x.saturating_add(i32::from(glyph.x_offset) * size);
        let origin_y = y.saturating_add(i32::from(glyph.y_offset) * size);
        let extent_x = i32::from(glyph.width) * size;
        let extent_y = i32::from(glyph.height) * size;
        if is_off_surface(origin_x, origin_y, extent_x, extent_y, self.width, self.height) {
            log::debug!("glyph U+{:04X} at ({}, {}) is off surface", code, origin_x, origin_y);
            self.diagnostics.note(TextFault::SurfaceBoundsExceeded);
            return Ok(advance);
        }

        blit(
            surface,
            origin_x,
            origin_y,
            glyph.width,
            glyph.height,
            glyph.runs(),
            Paint {
                fill_background: glyph.fills_background,
                ..paint
            },
        )?;
        Ok(advance)
    }

    fn wrap_before(&mut self, extent: i32, line: i32) {
        let style = *self.state.style();
        if style.wrap_x && self.state.cursor_x.saturating_add(extent) > self.width {
            self.new_line(line);
        }
        if style.wrap_y && self.state.cursor_y >= self.height {
            self.state.cursor_y = 0;
        }
    }

    fn new_line(&mut self, line: i32) {
        self.state.cursor_x = 0;
        self.state.cursor_y = self.state.cursor_y.saturating_add(line);
    }

    fn note_missing(&mut self, code: u32) {
        log::debug!("no glyph for U+{:04X} in the active font", code);
        self.diagnostics.note(TextFault::OutOfRangeCharacter);
    }

    fn note_unavailable(&mut self, font: FontId) {
        log::debug!("font {} is not loaded", font);
        self.diagnostics.note(TextFault::FontUnavailable);
    }
}

impl fmt::Debug for TextEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEngine")
            .field("fonts", &self.fonts)
            .field("state", &self.state)
            .field("smooth_font", &self.smooth.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rotation", &self.rotation)
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

fn fill_area<S>(
    surface: &mut S,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color565,
) -> Result<(), S::Error>
where
    S: DisplaySurface + ?Sized,
{
    if width > 0 && height > 0 {
        surface.fill_rect(x, y, width, height, color)?;
    }
    Ok(())
}

/// Draw one smooth glyph, returning the first surface error hit while
/// plotting. Stream errors are logged and counted; the glyph's advance is
/// still returned.
fn draw_smooth_glyph<'f, S>(
    font: &mut (dyn SmoothFont + 'f),
    surface: &mut S,
    code: u32,
    pen: (i32, i32),
    foreground: Color565,
    background: Color565,
    diagnostics: &mut TextDiagnostics,
) -> Result<i32, S::Error>
where
    S: DisplaySurface + ?Sized,
{
    let mut failure = None;
    let drawn = font.draw_glyph(code, pen, foreground, background, &mut |x: i32, y: i32, color: Color565| {
        if failure.is_none() {
            if let Err(err) = surface.draw_pixel(x, y, color) {
                failure = Some(err);
            }
        }
    });
    if let Some(err) = failure {
        return Err(err);
    }
    match drawn {
        Ok(advance) => Ok(advance),
        Err(err) => {
            log::warn!("skipping smooth glyph: {}", err);
            diagnostics.note(TextFault::MalformedGlyphStream);
            let space = i32::from(font.metrics().space_width);
            Ok(font
                .glyph_metrics(code)
                .map_or(space, |glyph| i32::from(glyph.x_advance)))
        }
    }
}
