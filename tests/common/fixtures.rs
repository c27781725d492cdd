use core::convert::Infallible;

use panel_text::{Color565, DisplaySurface, FixedFont, FontRegistry, TableFont};

/// Classic 5x7 column font for ' '..='Z'.
#[rustfmt::skip]
pub static FIXED_COLUMNS: [u8; 59 * 5] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x5F, 0x00, 0x00,
    0x00, 0x07, 0x00, 0x07, 0x00, 0x14, 0x7F, 0x14, 0x7F, 0x14,
    0x24, 0x2A, 0x7F, 0x2A, 0x12, 0x23, 0x13, 0x08, 0x64, 0x62,
    0x36, 0x49, 0x56, 0x20, 0x50, 0x00, 0x08, 0x07, 0x03, 0x00,
    0x00, 0x1C, 0x22, 0x41, 0x00, 0x00, 0x41, 0x22, 0x1C, 0x00,
    0x2A, 0x1C, 0x7F, 0x1C, 0x2A, 0x08, 0x08, 0x3E, 0x08, 0x08,
    0x00, 0x80, 0x70, 0x30, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08,
    0x00, 0x00, 0x60, 0x60, 0x00, 0x20, 0x10, 0x08, 0x04, 0x02,
    0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00, 0x42, 0x7F, 0x40, 0x00,
    0x72, 0x49, 0x49, 0x49, 0x46, 0x21, 0x41, 0x49, 0x4D, 0x33,
    0x18, 0x14, 0x12, 0x7F, 0x10, 0x27, 0x45, 0x45, 0x45, 0x39,
    0x3C, 0x4A, 0x49, 0x49, 0x31, 0x41, 0x21, 0x11, 0x09, 0x07,
    0x36, 0x49, 0x49, 0x49, 0x36, 0x46, 0x49, 0x49, 0x29, 0x1E,
    0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0x40, 0x34, 0x00, 0x00,
    0x00, 0x08, 0x14, 0x22, 0x41, 0x14, 0x14, 0x14, 0x14, 0x14,
    0x00, 0x41, 0x22, 0x14, 0x08, 0x02, 0x01, 0x59, 0x09, 0x06,
    0x3E, 0x41, 0x5D, 0x59, 0x4E, 0x7C, 0x12, 0x11, 0x12, 0x7C,
    0x7F, 0x49, 0x49, 0x49, 0x36, 0x3E, 0x41, 0x41, 0x41, 0x22,
    0x7F, 0x41, 0x41, 0x41, 0x3E, 0x7F, 0x49, 0x49, 0x49, 0x41,
    0x7F, 0x09, 0x09, 0x09, 0x01, 0x3E, 0x41, 0x41, 0x51, 0x73,
    0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00, 0x41, 0x7F, 0x41, 0x00,
    0x20, 0x40, 0x41, 0x3F, 0x01, 0x7F, 0x08, 0x14, 0x22, 0x41,
    0x7F, 0x40, 0x40, 0x40, 0x40, 0x7F, 0x02, 0x1C, 0x02, 0x7F,
    0x7F, 0x04, 0x08, 0x10, 0x7F, 0x3E, 0x41, 0x41, 0x41, 0x3E,
    0x7F, 0x09, 0x09, 0x09, 0x06, 0x3E, 0x41, 0x51, 0x21, 0x5E,
    0x7F, 0x09, 0x19, 0x29, 0x46, 0x26, 0x49, 0x49, 0x49, 0x32,
    0x03, 0x01, 0x7F, 0x01, 0x03, 0x3F, 0x40, 0x40, 0x40, 0x3F,
    0x1F, 0x20, 0x40, 0x20, 0x1F, 0x3F, 0x40, 0x38, 0x40, 0x3F,
    0x63, 0x14, 0x08, 0x14, 0x63, 0x03, 0x04, 0x78, 0x04, 0x03,
    0x61, 0x59, 0x49, 0x4D, 0x43,
];

/// Hollow 4x6 box as run tokens: 5 on, then (2 off, 2 on) x3, 2 off, 5 on.
const BOX_TOKENS: [u8; 9] = [0x84, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x84];
pub const BOX_WIDTH: u8 = 4;
pub const BOX_HEIGHT: u8 = 6;

/// 5x8 width-table glyph: a bar on row 6, stride one byte.
const UNDERLINE_ROWS: [u8; 8] = [0, 0, 0, 0, 0, 0, 0xF8, 0];

const fn tile<const N: usize, const P: usize>(pattern: [u8; P]) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = pattern[i % P];
        i += 1;
    }
    out
}

const fn ramp<const N: usize>(step: u32) -> [u32; N] {
    let mut out = [0u32; N];
    let mut i = 0;
    while i < N {
        out[i] = i as u32 * step;
        i += 1;
    }
    out
}

static BOX_BITMAPS: [u8; 96 * 9] = tile(BOX_TOKENS);
static BOX_OFFSETS: [u32; 96] = ramp(9);
static BOX_WIDTHS: [u8; 96] = [BOX_WIDTH; 96];

static UNDERLINE_BITMAPS: [u8; 96 * 8] = tile(UNDERLINE_ROWS);
static UNDERLINE_OFFSETS: [u32; 96] = ramp(8);
static UNDERLINE_WIDTHS: [u8; 96] = [5; 96];

pub fn box_font() -> TableFont<'static> {
    TableFont {
        bitmaps: &BOX_BITMAPS,
        offsets: &BOX_OFFSETS,
        widths: &BOX_WIDTHS,
        height: BOX_HEIGHT,
        baseline: 5,
    }
}

pub fn underline_font() -> TableFont<'static> {
    TableFont {
        bitmaps: &UNDERLINE_BITMAPS,
        offsets: &UNDERLINE_OFFSETS,
        widths: &UNDERLINE_WIDTHS,
        height: 8,
        baseline: 6,
    }
}

/// Fixed font in slot 1, width-table font in slot 2, box font in slot 4.
pub fn registry() -> FontRegistry<'static> {
    FontRegistry::empty()
        .with_fixed(FixedFont::new(&FIXED_COLUMNS))
        .with_width_table(underline_font())
        .with_rle(4, box_font())
}

/// Surface that tracks the painted bounding box and call counts without
/// allocating.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundsSurface {
    pub calls: usize,
    pub painted: Option<(i32, i32, i32, i32)>,
    pub foreground_area: i64,
    pub foreground: Color565,
}

impl BoundsSurface {
    pub fn tracking(foreground: Color565) -> Self {
        Self {
            foreground,
            ..Self::default()
        }
    }

    /// Painted width and height.
    pub fn extent(&self) -> (i32, i32) {
        self.painted
            .map_or((0, 0), |(left, top, right, bottom)| (right - left, bottom - top))
    }

    fn record(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color565) {
        self.calls += 1;
        if color == self.foreground {
            self.foreground_area += i64::from(w) * i64::from(h);
        }
        let (left, top, right, bottom) = self.painted.unwrap_or((x, y, x + w, y + h));
        self.painted = Some((left.min(x), top.min(y), right.max(x + w), bottom.max(y + h)));
    }
}

impl DisplaySurface for BoundsSurface {
    type Error = Infallible;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color565) -> Result<(), Infallible> {
        self.record(x, y, 1, 1, color);
        Ok(())
    }

    fn draw_fast_hline(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        color: Color565,
    ) -> Result<(), Infallible> {
        self.record(x, y, length, 1, color);
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), Infallible> {
        self.record(x, y, width, height, color);
        Ok(())
    }
}
