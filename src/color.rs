//! 16-bit RGB565 colours and the lossy 8-bit RGB332 conversions used by
//! palette-reduced panels.

/// Blue 2-bit to 5-bit expansion used by [`Color565::from_332`].
const BLUE_2_TO_5: [u16; 4] = [0, 11, 21, 31];

/// A 16-bit RGB565 colour value as sent to the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color565(pub u16);

impl Color565 {
    pub const BLACK: Self = Self(0x0000);
    pub const NAVY: Self = Self(0x000F);
    pub const DARKGREEN: Self = Self(0x03E0);
    pub const DARKCYAN: Self = Self(0x03EF);
    pub const MAROON: Self = Self(0x7800);
    pub const PURPLE: Self = Self(0x780F);
    pub const OLIVE: Self = Self(0x7BE0);
    pub const LIGHTGREY: Self = Self(0xC618);
    pub const DARKGREY: Self = Self(0x7BEF);
    pub const BLUE: Self = Self(0x001F);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x07FF);
    pub const RED: Self = Self(0xF800);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const WHITE: Self = Self(0xFFFF);
    pub const ORANGE: Self = Self(0xFDA0);
    pub const GREENYELLOW: Self = Self(0xB7E0);
    pub const PINK: Self = Self(0xFC9F);

    /// Marker colour that survives a 565 -> 332 -> 565 round trip unchanged.
    pub const TRANSPARENT: Self = Self(0x0120);

    /// Pack 8-bit red, green and blue levels into RGB565.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16))
    }

    /// Raw 16-bit value.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel, 5 bits.
    pub const fn r5(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel, 6 bits.
    pub const fn g6(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel, 5 bits.
    pub const fn b5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Reduce to an 8-bit RGB332 value. Lossy.
    pub const fn to_332(self) -> u8 {
        let c = self.0;
        (((c & 0xE000) >> 8) | ((c & 0x0700) >> 6) | ((c & 0x0018) >> 3)) as u8
    }

    /// Expand an 8-bit RGB332 value back to RGB565.
    pub const fn from_332(color: u8) -> Self {
        let c = color as u16;
        let mut out = ((c & 0x1C) << 6) | ((c & 0xC0) << 5) | ((c & 0xE0) << 8);
        out |= ((c & 0x1C) << 3) | BLUE_2_TO_5[(c & 0x03) as usize];
        Self(out)
    }
}

impl From<u16> for Color565 {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Color565> for u16 {
    fn from(value: Color565) -> Self {
        value.0
    }
}

/// Pack 8-bit red, green and blue levels into a raw RGB565 value.
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    Color565::from_rgb(r, g, b).0
}

/// Convert a raw RGB565 value to RGB332.
pub const fn color16to8(color: u16) -> u8 {
    Color565(color).to_332()
}

/// Convert a raw RGB332 value to RGB565.
pub const fn color8to16(color: u8) -> u16 {
    Color565::from_332(color).0
}
