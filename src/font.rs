//! Font slot registry and typed read-only views over font tables.
//!
//! Font tables are borrowed, never copied. Every accessor is bounds-checked so
//! a short or inconsistent table degrades to "no glyph" instead of a fault.

/// Font slot identifier. Slots 1..=8 are built-in; 3 and 5 are reserved.
pub type FontId = u8;

/// Number of addressable font slots.
pub const FONT_SLOT_COUNT: usize = 8;

/// First character code stored in the built-in font tables.
pub const FIRST_TABLE_CODE: u32 = 32;

/// Last character code stored in the proportional built-in font tables.
pub const LAST_TABLE_CODE: u32 = 127;

/// Fixed 6x8 bitmap font stored as 5 column bytes per glyph, bit 0 at the top.
///
/// The sixth column of every cell is an implicit blank spacing column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedFont<'a> {
    /// Column bytes for codes starting at [`FIRST_TABLE_CODE`].
    pub columns: &'a [u8],
}

impl<'a> FixedFont<'a> {
    /// Stored columns per glyph.
    pub const COLUMNS: usize = 5;
    /// Advance of every glyph, including the blank spacing column.
    pub const CELL_WIDTH: u8 = 6;
    /// Cell height in pixels.
    pub const HEIGHT: u8 = 8;
    /// Baseline row from the top of the cell.
    pub const BASELINE: u8 = 7;

    pub const fn new(columns: &'a [u8]) -> Self {
        Self { columns }
    }

    /// Column bytes for `code`, or `None` when the table does not cover it.
    pub fn glyph_columns(&self, code: u32) -> Option<&'a [u8]> {
        let index = code.checked_sub(FIRST_TABLE_CODE)? as usize;
        let start = index.checked_mul(Self::COLUMNS)?;
        self.columns.get(start..start + Self::COLUMNS)
    }
}

/// Proportional font addressed through a per-character offset table.
///
/// Used by both the byte-packed width-table format and the run-length
/// encoded format; the two differ only in how the addressed bytes are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableFont<'a> {
    /// Concatenated glyph data.
    pub bitmaps: &'a [u8],
    /// Byte offset into `bitmaps` for each code from [`FIRST_TABLE_CODE`].
    pub offsets: &'a [u32],
    /// Advance width in pixels for each code from [`FIRST_TABLE_CODE`].
    pub widths: &'a [u8],
    /// Glyph height in pixels.
    pub height: u8,
    /// Baseline row from the top of the glyph.
    pub baseline: u8,
}

impl<'a> TableFont<'a> {
    /// Table index for `code`, or `None` when it is outside 32..=127 or the
    /// tables are too short to describe it.
    pub fn glyph_index(&self, code: u32) -> Option<usize> {
        if !(FIRST_TABLE_CODE..=LAST_TABLE_CODE).contains(&code) {
            return None;
        }
        let index = (code - FIRST_TABLE_CODE) as usize;
        (index < self.widths.len() && index < self.offsets.len()).then_some(index)
    }

    /// Advance width for `code`; zero for codes the font does not contain.
    pub fn width_of(&self, code: u32) -> u8 {
        self.glyph_index(code)
            .and_then(|index| self.widths.get(index).copied())
            .unwrap_or(0)
    }

    /// Bitmap bytes from glyph `index`'s offset to the end of the blob.
    ///
    /// Glyphs may share offsets or be stored in any order, so the decoder
    /// reads only as far as the glyph needs.
    pub fn glyph_bytes(&self, index: usize) -> Option<&'a [u8]> {
        let start = *self.offsets.get(index)? as usize;
        self.bitmaps.get(start..)
    }
}

/// Per-glyph metrics of an outline glyph font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphMetric {
    /// Bit-packed bitmap start, in bytes, inside [`OutlineFont::bitmap`].
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    pub x_advance: u8,
    /// Horizontal offset from the pen to the bitmap's left edge.
    pub x_offset: i8,
    /// Vertical offset from the baseline to the bitmap's top edge.
    pub y_offset: i8,
}

/// Externally supplied font of 1-bit, MSB-first packed glyph bitmaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutlineFont<'a> {
    pub bitmap: &'a [u8],
    pub glyphs: &'a [GlyphMetric],
    pub first: u8,
    pub last: u8,
    /// Line advance in pixels.
    pub y_advance: u8,
}

impl<'a> OutlineFont<'a> {
    /// Metrics for `code`, or `None` outside `first..=last`.
    pub fn glyph(&self, code: u32) -> Option<&'a GlyphMetric> {
        if code < u32::from(self.first) || code > u32::from(self.last) {
            return None;
        }
        self.glyphs.get((code - u32::from(self.first)) as usize)
    }

    /// Largest extent above and below the baseline over every glyph.
    pub fn vertical_extent(&self) -> (u8, u8) {
        let mut above = 0u8;
        let mut below = 0u8;
        for glyph in self.glyphs {
            let ab = -i16::from(glyph.y_offset);
            let bb = i16::from(glyph.height) - ab;
            above = above.max(ab.clamp(0, i16::from(u8::MAX)) as u8);
            below = below.max(bb.clamp(0, i16::from(u8::MAX)) as u8);
        }
        (above, below)
    }
}

/// Contents of a populated built-in slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFace<'a> {
    Fixed(FixedFont<'a>),
    WidthTable(TableFont<'a>),
    RunLength(TableFont<'a>),
}

/// Runtime table of the built-in font slots.
///
/// Slot 1 holds the fixed font, slot 2 the width-table font and slots
/// 4, 6, 7 and 8 run-length encoded fonts. Slots 3 and 5 are reserved and
/// always empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontRegistry<'a> {
    slots: [Option<FontFace<'a>>; FONT_SLOT_COUNT],
}

impl<'a> FontRegistry<'a> {
    /// Registry with every slot empty.
    pub const fn empty() -> Self {
        Self {
            slots: [None; FONT_SLOT_COUNT],
        }
    }

    /// Install the fixed font in slot 1.
    pub fn with_fixed(mut self, font: FixedFont<'a>) -> Self {
        self.slots[0] = Some(FontFace::Fixed(font));
        self
    }

    /// Install the width-table font in slot 2.
    pub fn with_width_table(mut self, font: TableFont<'a>) -> Self {
        self.slots[1] = Some(FontFace::WidthTable(font));
        self
    }

    /// Install a run-length encoded font in slot 4, 6, 7 or 8.
    ///
    /// Other slot ids are rejected and leave the registry unchanged.
    pub fn with_rle(mut self, id: FontId, font: TableFont<'a>) -> Self {
        if matches!(id, 4 | 6 | 7 | 8) {
            self.slots[usize::from(id) - 1] = Some(FontFace::RunLength(font));
        } else {
            log::warn!("font slot {} cannot hold a run-length encoded font; ignored", id);
        }
        self
    }

    /// Face installed in `id`, if any.
    pub fn face(&self, id: FontId) -> Option<&FontFace<'a>> {
        match id {
            1..=8 => self.slots[usize::from(id) - 1].as_ref(),
            _ => None,
        }
    }

    /// Whether slot `id` is populated.
    pub fn is_loaded(&self, id: FontId) -> bool {
        self.face(id).is_some()
    }

    /// Bitmask with bit N set when slot N is populated.
    pub fn loaded_mask(&self) -> u16 {
        (1..=FONT_SLOT_COUNT as u8)
            .filter(|&id| self.is_loaded(id))
            .fold(0u16, |mask, id| mask | (1 << id))
    }

    /// Unscaled glyph height; zero for empty slots.
    pub fn height_of(&self, id: FontId) -> u8 {
        match self.face(id) {
            Some(FontFace::Fixed(_)) => FixedFont::HEIGHT,
            Some(FontFace::WidthTable(font)) | Some(FontFace::RunLength(font)) => font.height,
            None => 0,
        }
    }

    /// Unscaled baseline offset from the glyph top; zero for empty slots.
    pub fn baseline_of(&self, id: FontId) -> u8 {
        match self.face(id) {
            Some(FontFace::Fixed(_)) => FixedFont::BASELINE,
            Some(FontFace::WidthTable(font)) | Some(FontFace::RunLength(font)) => font.baseline,
            None => 0,
        }
    }

    /// Unscaled advance of `code`; zero for empty slots and missing codes.
    pub fn width_of(&self, id: FontId, code: u32) -> u8 {
        match self.face(id) {
            Some(FontFace::Fixed(_)) => FixedFont::CELL_WIDTH,
            Some(FontFace::WidthTable(font)) | Some(FontFace::RunLength(font)) => {
                font.width_of(code)
            }
            None => 0,
        }
    }
}
