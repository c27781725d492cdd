//! Cursor and text style state with clamping setters.

use crate::color::Color565;
use crate::font::{FontId, OutlineFont};

/// Largest text size multiplier.
pub const MAX_TEXT_SIZE: u8 = 7;

/// Reference point on a string's bounding box addressed by the draw
/// coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Datum {
    #[default]
    TopLeft = 0,
    TopCenter = 1,
    TopRight = 2,
    MiddleLeft = 3,
    MiddleCenter = 4,
    MiddleRight = 5,
    BottomLeft = 6,
    BottomCenter = 7,
    BottomRight = 8,
    BaselineLeft = 9,
    BaselineCenter = 10,
    BaselineRight = 11,
}

/// Horizontal alignment class of a [`Datum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical alignment class of a [`Datum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
    Baseline,
}

impl Datum {
    pub const ALL: [Datum; 12] = [
        Datum::TopLeft,
        Datum::TopCenter,
        Datum::TopRight,
        Datum::MiddleLeft,
        Datum::MiddleCenter,
        Datum::MiddleRight,
        Datum::BottomLeft,
        Datum::BottomCenter,
        Datum::BottomRight,
        Datum::BaselineLeft,
        Datum::BaselineCenter,
        Datum::BaselineRight,
    ];

    /// Datum for the numeric code `value`, or `None` above 11.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub fn horizontal(self) -> HorizontalAlign {
        match self as u8 % 3 {
            0 => HorizontalAlign::Left,
            1 => HorizontalAlign::Center,
            _ => HorizontalAlign::Right,
        }
    }

    pub fn vertical(self) -> VerticalAnchor {
        match self as u8 / 3 {
            0 => VerticalAnchor::Top,
            1 => VerticalAnchor::Middle,
            2 => VerticalAnchor::Bottom,
            _ => VerticalAnchor::Baseline,
        }
    }
}

/// Style applied to text drawn without explicit colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub font: FontId,
    pub size: u8,
    pub foreground: Color565,
    /// Equal to `foreground` for transparent text.
    pub background: Color565,
    pub wrap_x: bool,
    pub wrap_y: bool,
    pub datum: Datum,
    /// Minimum painted width of a drawn string, in pixels.
    pub padding: u16,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: 1,
            size: 1,
            foreground: Color565::WHITE,
            background: Color565::BLACK,
            wrap_x: true,
            wrap_y: false,
            datum: Datum::TopLeft,
            padding: 0,
        }
    }
}

/// Installed outline font with its precomputed vertical extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveOutline<'a> {
    pub font: OutlineFont<'a>,
    /// Largest extent above the baseline.
    pub ascent: u8,
    /// Largest extent below the baseline.
    pub descent: u8,
}

/// Cursor position, style and the optional outline font of one display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextState<'a> {
    pub cursor_x: i32,
    pub cursor_y: i32,
    style: TextStyle,
    outline: Option<ActiveOutline<'a>>,
}

impl<'a> TextState<'a> {
    /// State at the origin using `style`, with its size and font clamped.
    pub fn new(style: TextStyle) -> Self {
        let mut state = Self {
            cursor_x: 0,
            cursor_y: 0,
            style,
            outline: None,
        };
        state.set_text_size(style.size);
        state.set_text_font(style.font);
        state
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn outline(&self) -> Option<&ActiveOutline<'a>> {
        self.outline.as_ref()
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Move the cursor and select `font` in one step.
    pub fn set_cursor_with_font(&mut self, x: i32, y: i32, font: FontId) {
        self.set_text_font(font);
        self.set_cursor(x, y);
    }

    /// Foreground only; the background is set equal, making text
    /// transparent.
    pub fn set_text_color(&mut self, color: Color565) {
        self.style.foreground = color;
        self.style.background = color;
    }

    pub fn set_text_colors(&mut self, foreground: Color565, background: Color565) {
        self.style.foreground = foreground;
        self.style.background = background;
    }

    /// Size multiplier; 0 is treated as 1 and values above 7 saturate.
    pub fn set_text_size(&mut self, size: u8) {
        self.style.size = size.clamp(1, MAX_TEXT_SIZE);
    }

    /// Select a built-in font slot and drop any installed outline font.
    /// Font 0 is treated as font 1.
    pub fn set_text_font(&mut self, font: FontId) {
        self.outline = None;
        self.style.font = font.max(1);
    }

    /// Install an outline font in place of font 1, or remove it with `None`.
    pub fn set_free_font(&mut self, font: Option<OutlineFont<'a>>) {
        self.style.font = 1;
        self.outline = font.map(|font| {
            let (ascent, descent) = font.vertical_extent();
            ActiveOutline {
                font,
                ascent,
                descent,
            }
        });
    }

    pub fn set_text_datum(&mut self, datum: Datum) {
        self.style.datum = datum;
    }

    pub fn set_text_padding(&mut self, width: u16) {
        self.style.padding = width;
    }

    pub fn set_text_wrap(&mut self, wrap_x: bool, wrap_y: bool) {
        self.style.wrap_x = wrap_x;
        self.style.wrap_y = wrap_y;
    }
}

impl Default for TextState<'_> {
    fn default() -> Self {
        Self::new(TextStyle::default())
    }
}
