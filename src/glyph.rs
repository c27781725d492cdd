//! Per-format glyph decoding.
//!
//! Every format decodes to the same shape: a [`DecodedGlyph`] placed relative
//! to the pen, whose [`runs`](DecodedGlyph::runs) cover exactly
//! `width * height` pixels in row-major order, plus an advance in font units.

use crate::error::GlyphError;
use crate::font::{FixedFont, OutlineFont, TableFont, FIRST_TABLE_CODE};

/// Glyph encoding selected for the active font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFormat {
    FixedBitmap,
    WidthTable,
    RunLengthEncoded,
    OutlineGlyph,
    StreamedSmooth,
}

/// Horizontal span of same-coloured pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub foreground: bool,
    pub length: u16,
}

/// A font whose glyphs this module can decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphSource<'a> {
    Fixed(FixedFont<'a>),
    WidthTable(TableFont<'a>),
    RunLength(TableFont<'a>),
    Outline(OutlineFont<'a>),
}

impl<'a> GlyphSource<'a> {
    pub fn format(&self) -> FontFormat {
        match self {
            Self::Fixed(_) => FontFormat::FixedBitmap,
            Self::WidthTable(_) => FontFormat::WidthTable,
            Self::RunLength(_) => FontFormat::RunLengthEncoded,
            Self::Outline(_) => FontFormat::OutlineGlyph,
        }
    }

    /// Unscaled advance of `code` without decoding its bitmap.
    pub fn advance(&self, code: u32) -> u8 {
        match self {
            Self::Fixed(_) => FixedFont::CELL_WIDTH,
            Self::WidthTable(font) | Self::RunLength(font) => font.width_of(code),
            Self::Outline(font) => font.glyph(code).map_or(0, |glyph| glyph.x_advance),
        }
    }

    /// Decode `code`. Characters the font does not contain decode to a
    /// blank glyph flagged [`missing`](DecodedGlyph::missing).
    pub fn decode(&self, code: u32) -> Result<DecodedGlyph<'a>, GlyphError> {
        match self {
            Self::Fixed(font) => Ok(decode_fixed(font, code)),
            Self::WidthTable(font) => decode_width_table(font, code),
            Self::RunLength(font) => decode_run_length(font, code),
            Self::Outline(font) => decode_outline(font, code),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pixels<'a> {
    None,
    /// Column bytes, bit 0 at the top.
    Columns(&'a [u8]),
    /// Row-major bytes, most significant bit leftmost.
    Rows { data: &'a [u8], stride: usize },
    /// Validated run tokens.
    RunLength(&'a [u8]),
    /// Continuous MSB-first bit stream.
    Packed(&'a [u8]),
}

/// A glyph located in its font and ready to blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedGlyph<'a> {
    pub code: u32,
    pub width: u16,
    pub height: u16,
    /// Offset of the bitmap's top-left corner from the pen, in font units.
    pub x_offset: i16,
    pub y_offset: i16,
    pub advance: u16,
    /// Whether background runs belong to the glyph cell and may be painted.
    pub fills_background: bool,
    /// The font has no glyph for this code.
    pub missing: bool,
    pixels: Pixels<'a>,
}

impl<'a> DecodedGlyph<'a> {
    fn blank(code: u32, advance: u8, missing: bool) -> Self {
        Self {
            code,
            width: 0,
            height: 0,
            x_offset: 0,
            y_offset: 0,
            advance: u16::from(advance),
            fills_background: false,
            missing,
            pixels: Pixels::None,
        }
    }

    /// Pixels covered by [`runs`](Self::runs).
    pub fn pixel_count(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    /// Whether there is nothing to draw.
    pub fn is_blank(&self) -> bool {
        matches!(self.pixels, Pixels::None) || self.pixel_count() == 0
    }

    /// Foreground state of pixel (`x`, `y`); `false` outside the glyph.
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        match self.pixels {
            Pixels::RunLength(_) => {
                let target = u32::from(y) * u32::from(self.width) + u32::from(x);
                let mut covered = 0u32;
                for run in self.runs() {
                    covered += u32::from(run.length);
                    if covered > target {
                        return run.foreground;
                    }
                }
                false
            }
            _ => self.bit(u32::from(x), u32::from(y)),
        }
    }

    /// Row-major runs covering the glyph.
    ///
    /// Bitmap formats yield runs that stop at row ends; run-length encoded
    /// glyphs yield their stored tokens, which may continue onto the next row.
    pub fn runs(&self) -> Runs<'a> {
        Runs {
            glyph: *self,
            next_pixel: 0,
            next_byte: 0,
        }
    }

    fn bit(&self, x: u32, y: u32) -> bool {
        match self.pixels {
            Pixels::Columns(columns) => columns
                .get(x as usize)
                .is_some_and(|&column| (column >> y) & 0x01 != 0),
            Pixels::Rows { data, stride } => data
                .get(y as usize * stride + x as usize / 8)
                .is_some_and(|&byte| byte & (0x80 >> (x % 8)) != 0),
            Pixels::Packed(data) => {
                let index = (y * u32::from(self.width) + x) as usize;
                data.get(index / 8)
                    .is_some_and(|&byte| (byte >> (7 - index % 8)) & 0x01 != 0)
            }
            Pixels::RunLength(_) | Pixels::None => false,
        }
    }
}

/// Iterator returned by [`DecodedGlyph::runs`].
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    glyph: DecodedGlyph<'a>,
    next_pixel: u32,
    next_byte: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let total = self.glyph.pixel_count();
        if self.next_pixel >= total {
            return None;
        }
        match self.glyph.pixels {
            Pixels::None => None,
            Pixels::RunLength(tokens) => {
                let token = *tokens.get(self.next_byte)?;
                self.next_byte += 1;
                let length = (u32::from(token & 0x7F) + 1).min(total - self.next_pixel);
                self.next_pixel += length;
                Some(Run {
                    foreground: token & 0x80 != 0,
                    length: length as u16,
                })
            }
            _ => {
                let width = u32::from(self.glyph.width);
                let start = self.next_pixel;
                let (x, y) = (start % width, start / width);
                let foreground = self.glyph.bit(x, y);
                let mut end_x = x + 1;
                while end_x < width && self.glyph.bit(end_x, y) == foreground {
                    end_x += 1;
                }
                self.next_pixel = y * width + end_x;
                Some(Run {
                    foreground,
                    length: (end_x - x) as u16,
                })
            }
        }
    }
}

fn decode_fixed<'a>(font: &FixedFont<'a>, code: u32) -> DecodedGlyph<'a> {
    if code < FIRST_TABLE_CODE {
        return DecodedGlyph::blank(code, FixedFont::CELL_WIDTH, false);
    }
    match font.glyph_columns(code) {
        Some(columns) => DecodedGlyph {
            code,
            width: u16::from(FixedFont::CELL_WIDTH),
            height: u16::from(FixedFont::HEIGHT),
            x_offset: 0,
            y_offset: 0,
            advance: u16::from(FixedFont::CELL_WIDTH),
            fills_background: true,
            missing: false,
            pixels: Pixels::Columns(columns),
        },
        None => DecodedGlyph::blank(code, FixedFont::CELL_WIDTH, true),
    }
}

fn decode_width_table<'a>(
    font: &TableFont<'a>,
    code: u32,
) -> Result<DecodedGlyph<'a>, GlyphError> {
    let Some(index) = font.glyph_index(code) else {
        return Ok(DecodedGlyph::blank(code, 0, true));
    };
    let width = font.widths.get(index).copied().unwrap_or(0);
    let stride = usize::from(width).div_ceil(8);
    let needed = stride * usize::from(font.height);
    let data = font
        .glyph_bytes(index)
        .and_then(|bytes| bytes.get(..needed))
        .ok_or(GlyphError::TruncatedGlyphTable { code })?;
    Ok(DecodedGlyph {
        code,
        width: u16::from(width),
        height: u16::from(font.height),
        x_offset: 0,
        y_offset: 0,
        advance: u16::from(width),
        fills_background: true,
        missing: false,
        pixels: Pixels::Rows { data, stride },
    })
}

fn decode_run_length<'a>(
    font: &TableFont<'a>,
    code: u32,
) -> Result<DecodedGlyph<'a>, GlyphError> {
    let Some(index) = font.glyph_index(code) else {
        return Ok(DecodedGlyph::blank(code, 0, true));
    };
    let width = font.widths.get(index).copied().unwrap_or(0);
    let bytes = font
        .glyph_bytes(index)
        .ok_or(GlyphError::TruncatedGlyphTable { code })?;
    let total = u32::from(width) * u32::from(font.height);
    let tokens = validate_run_length(code, bytes, total)?;
    Ok(DecodedGlyph {
        code,
        width: u16::from(width),
        height: u16::from(font.height),
        x_offset: 0,
        y_offset: 0,
        advance: u16::from(width),
        fills_background: true,
        missing: false,
        pixels: Pixels::RunLength(tokens),
    })
}

/// Take tokens from the front of `bytes` until they cover exactly `total`
/// pixels and return just those tokens.
///
/// A token that crosses `total` is an overrun; running out of bytes first is
/// an underrun.
fn validate_run_length(code: u32, bytes: &[u8], total: u32) -> Result<&[u8], GlyphError> {
    let mut covered = 0u32;
    for (index, &token) in bytes.iter().enumerate() {
        if covered == total {
            return Ok(&bytes[..index]);
        }
        covered += u32::from(token & 0x7F) + 1;
        if covered > total {
            return Err(GlyphError::MalformedGlyphStream {
                code,
                expected: total,
                actual: covered,
            });
        }
    }
    if covered == total {
        Ok(bytes)
    } else {
        Err(GlyphError::MalformedGlyphStream {
            code,
            expected: total,
            actual: covered,
        })
    }
}

fn decode_outline<'a>(font: &OutlineFont<'a>, code: u32) -> Result<DecodedGlyph<'a>, GlyphError> {
    let Some(metric) = font.glyph(code) else {
        return Ok(DecodedGlyph::blank(code, 0, true));
    };
    let bits = u32::from(metric.width) * u32::from(metric.height);
    let start = usize::from(metric.bitmap_offset);
    let data = font
        .bitmap
        .get(start..start + bits.div_ceil(8) as usize)
        .ok_or(GlyphError::TruncatedGlyphTable { code })?;
    Ok(DecodedGlyph {
        code,
        width: u16::from(metric.width),
        height: u16::from(metric.height),
        x_offset: i16::from(metric.x_offset),
        y_offset: i16::from(metric.y_offset),
        advance: u16::from(metric.x_advance),
        fills_background: false,
        missing: false,
        pixels: Pixels::Packed(data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::GlyphMetric;

    fn rle_font<'a>(bitmaps: &'a [u8], widths: &'a [u8], height: u8) -> TableFont<'a> {
        TableFont {
            bitmaps,
            offsets: &[0],
            widths,
            height,
            baseline: height,
        }
    }

    fn collect(glyph: &DecodedGlyph<'_>) -> Vec<Run> {
        glyph.runs().collect()
    }

    #[test]
    fn rle_single_foreground_token_fills_two_by_two() {
        let font = rle_font(&[0x83], &[2], 2);
        let glyph = GlyphSource::RunLength(font).decode(' ' as u32).unwrap();
        assert_eq!(
            collect(&glyph),
            vec![Run {
                foreground: true,
                length: 4
            }]
        );
        for y in 0..2 {
            for x in 0..2 {
                assert!(glyph.pixel(x, y));
            }
        }
    }

    #[test]
    fn rle_underrun_is_malformed() {
        let font = rle_font(&[0x82], &[2], 2);
        let err = GlyphSource::RunLength(font).decode(' ' as u32).unwrap_err();
        assert_eq!(
            err,
            GlyphError::MalformedGlyphStream {
                code: 32,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn rle_token_crossing_the_glyph_end_is_malformed() {
        let font = rle_font(&[0x84], &[2], 2);
        let err = GlyphSource::RunLength(font).decode(' ' as u32).unwrap_err();
        assert_eq!(
            err,
            GlyphError::MalformedGlyphStream {
                code: 32,
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn rle_background_then_foreground_rows() {
        let font = rle_font(&[0x01, 0x81], &[2], 2);
        let glyph = GlyphSource::RunLength(font).decode(' ' as u32).unwrap();
        assert_eq!(
            collect(&glyph),
            vec![
                Run {
                    foreground: false,
                    length: 2
                },
                Run {
                    foreground: true,
                    length: 2
                },
            ]
        );
        assert!(!glyph.pixel(1, 0));
        assert!(glyph.pixel(0, 1));
    }

    #[test]
    fn rle_decoding_stops_once_the_glyph_is_covered() {
        let font = TableFont {
            bitmaps: &[0x83, 0x01, 0x81],
            offsets: &[0, 1],
            widths: &[2, 2],
            height: 2,
            baseline: 2,
        };
        let first = GlyphSource::RunLength(font).decode(' ' as u32).unwrap();
        assert_eq!(first.runs().count(), 1);
        let second = GlyphSource::RunLength(font).decode('!' as u32).unwrap();
        assert_eq!(second.runs().count(), 2);
    }

    #[test]
    fn rle_glyphs_may_share_one_bitmap() {
        let font = TableFont {
            bitmaps: &[0x83],
            offsets: &[0, 0],
            widths: &[2, 2],
            height: 2,
            baseline: 2,
        };
        for code in [' ', '!'] {
            let glyph = GlyphSource::RunLength(font).decode(code as u32).unwrap();
            assert_eq!(
                collect(&glyph),
                vec![Run {
                    foreground: true,
                    length: 4
                }]
            );
        }
    }

    #[test]
    fn rle_glyphs_may_be_stored_out_of_order() {
        // '!' lives after '"' in the blob.
        let font = TableFont {
            bitmaps: &[0x83, 0x03, 0x01, 0x81],
            offsets: &[0, 2, 1],
            widths: &[2, 2, 2],
            height: 2,
            baseline: 2,
        };
        let space = GlyphSource::RunLength(font).decode(' ' as u32).unwrap();
        assert!(space.pixel(1, 1));
        let bang = GlyphSource::RunLength(font).decode('!' as u32).unwrap();
        assert!(!bang.pixel(0, 0) && bang.pixel(0, 1));
        let quote = GlyphSource::RunLength(font).decode('"' as u32).unwrap();
        assert!(!quote.pixel(1, 1));
    }

    #[test]
    fn rle_stream_ending_early_is_malformed() {
        let font = TableFont {
            bitmaps: &[0x83, 0x81],
            offsets: &[0, 1],
            widths: &[2, 2],
            height: 2,
            baseline: 2,
        };
        assert_eq!(
            GlyphSource::RunLength(font).decode('!' as u32),
            Err(GlyphError::MalformedGlyphStream {
                code: 33,
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn width_table_glyphs_may_share_or_reorder_offsets() {
        let font = TableFont {
            bitmaps: &[0x80, 0x00, 0x40, 0x40],
            offsets: &[0, 0, 2],
            widths: &[2, 2, 2],
            height: 2,
            baseline: 2,
        };
        let shared = GlyphSource::WidthTable(font).decode(' ' as u32).unwrap();
        let again = GlyphSource::WidthTable(font).decode('!' as u32).unwrap();
        assert!(shared.pixel(0, 0) && !shared.pixel(0, 1));
        assert_eq!(collect(&shared), collect(&again));
        let later = GlyphSource::WidthTable(font).decode('"' as u32).unwrap();
        assert!(later.pixel(1, 0) && later.pixel(1, 1) && !later.pixel(0, 0));
    }

    #[test]
    fn rle_runs_may_span_rows() {
        let font = rle_font(&[0x00, 0x83, 0x00], &[3], 2);
        let glyph = GlyphSource::RunLength(font).decode(' ' as u32).unwrap();
        let runs = collect(&glyph);
        assert_eq!(runs[1].length, 4);
        assert!(glyph.pixel(1, 0));
        assert!(!glyph.pixel(2, 1));
        assert!(glyph.pixel(0, 1));
    }

    #[test]
    fn fixed_glyph_reads_columns_top_down_with_blank_spacer() {
        // Vertical bar in column 0 covering rows 0..=2.
        let columns = [0x07, 0x00, 0x00, 0x00, 0x00];
        let glyph = GlyphSource::Fixed(FixedFont::new(&columns))
            .decode('!' as u32 - 1)
            .unwrap();
        assert_eq!((glyph.width, glyph.height, glyph.advance), (6, 8, 6));
        assert!(glyph.pixel(0, 0) && glyph.pixel(0, 2));
        assert!(!glyph.pixel(0, 3));
        assert!(!glyph.pixel(5, 0));
        let runs = collect(&glyph);
        assert_eq!(runs.iter().map(|r| u32::from(r.length)).sum::<u32>(), 48);
        assert_eq!(
            runs[0],
            Run {
                foreground: true,
                length: 1
            }
        );
        assert_eq!(
            runs[1],
            Run {
                foreground: false,
                length: 5
            }
        );
    }

    #[test]
    fn fixed_control_codes_are_blank_but_advance() {
        let glyph = GlyphSource::Fixed(FixedFont::new(&[0xFF; 5]))
            .decode(0x07)
            .unwrap();
        assert!(glyph.is_blank());
        assert!(!glyph.missing);
        assert_eq!(glyph.advance, 6);
    }

    #[test]
    fn width_table_rows_are_msb_first_and_ceil_byte_wide() {
        // 10 px wide -> 2 bytes per row, 2 rows.
        let bitmaps = [0b1000_0000, 0b0100_0000, 0b0000_0001, 0b0000_0000];
        let font = TableFont {
            bitmaps: &bitmaps,
            offsets: &[0],
            widths: &[10],
            height: 2,
            baseline: 2,
        };
        let glyph = GlyphSource::WidthTable(font).decode(' ' as u32).unwrap();
        assert!(glyph.pixel(0, 0));
        assert!(glyph.pixel(9, 0));
        assert!(glyph.pixel(7, 1));
        assert!(!glyph.pixel(8, 1));
        let lengths: Vec<u16> = collect(&glyph).iter().map(|r| r.length).collect();
        assert_eq!(lengths, vec![1, 8, 1, 7, 1, 2]);
    }

    #[test]
    fn width_table_short_bitmap_is_truncated() {
        let font = TableFont {
            bitmaps: &[0xFF],
            offsets: &[0],
            widths: &[8],
            height: 2,
            baseline: 2,
        };
        assert_eq!(
            GlyphSource::WidthTable(font).decode(' ' as u32),
            Err(GlyphError::TruncatedGlyphTable { code: 32 })
        );
    }

    #[test]
    fn table_codes_outside_ascii_are_missing_with_zero_advance() {
        let font = rle_font(&[0x83], &[2], 2);
        let glyph = GlyphSource::RunLength(font).decode(0xE9).unwrap();
        assert!(glyph.missing);
        assert_eq!(glyph.advance, 0);
    }

    #[test]
    fn outline_glyph_is_packed_across_byte_boundaries() {
        // 3x3 glyph: X.X / .X. / X.X -> 101 010 101 (+7 pad bits)
        let bitmap = [0b1010_1010, 0b1000_0000];
        let glyphs = [GlyphMetric {
            bitmap_offset: 0,
            width: 3,
            height: 3,
            x_advance: 4,
            x_offset: 1,
            y_offset: -3,
        }];
        let font = OutlineFont {
            bitmap: &bitmap,
            glyphs: &glyphs,
            first: b'x',
            last: b'x',
            y_advance: 5,
        };
        let glyph = GlyphSource::Outline(font).decode('x' as u32).unwrap();
        assert_eq!((glyph.x_offset, glyph.y_offset, glyph.advance), (1, -3, 4));
        assert!(!glyph.fills_background);
        assert!(glyph.pixel(0, 0) && glyph.pixel(2, 0));
        assert!(glyph.pixel(1, 1) && !glyph.pixel(0, 1));
        assert!(glyph.pixel(0, 2) && glyph.pixel(2, 2));

        let missing = GlyphSource::Outline(font).decode('y' as u32).unwrap();
        assert!(missing.missing && missing.is_blank());
        assert_eq!(missing.advance, 0);
    }
}
