//! Glyph decoding and text layout for microcontroller display panels.
//!
//! `panel-text` turns strings, a font selection and a reference point into
//! pixel, horizontal-line and rectangle calls against a [`DisplaySurface`].
//! It reads five font encodings in place from borrowed tables:
//!
//! - a fixed 6x8 column bitmap font (slot 1),
//! - a byte-packed width-table font (slot 2),
//! - run-length encoded fonts (slots 4, 6, 7 and 8),
//! - an externally supplied outline glyph font that replaces slot 1,
//! - a streamed anti-aliased font behind the [`SmoothFont`] seam.
//!
//! ```
//! use panel_text::{Color565, DisplaySurface, EngineConfig, FixedFont, FontRegistry, TextEngine};
//!
//! struct Count(u32);
//!
//! impl DisplaySurface for Count {
//!     type Error = core::convert::Infallible;
//!
//!     fn draw_pixel(&mut self, _: i32, _: i32, _: Color565) -> Result<(), Self::Error> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//!
//!     fn draw_fast_hline(&mut self, _: i32, _: i32, _: i32, _: Color565) -> Result<(), Self::Error> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//!
//!     fn fill_rect(&mut self, _: i32, _: i32, _: i32, _: i32, _: Color565) -> Result<(), Self::Error> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! static GLYPHS: [u8; 96 * 5] = [0x3E; 96 * 5];
//!
//! let fonts = FontRegistry::empty().with_fixed(FixedFont::new(&GLYPHS));
//! let mut engine = TextEngine::new(EngineConfig::for_display(128, 64), fonts);
//! let mut surface = Count(0);
//! let advance = engine.draw_string(&mut surface, "Hi", 0, 0).unwrap();
//! assert_eq!(advance, engine.text_width("Hi"));
//! assert!(surface.0 > 0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

extern crate alloc;

pub mod color;
mod config;
mod diagnostics;
mod error;
pub mod font;
pub mod glyph;
mod layout;
pub mod number;
pub mod render;
pub mod smooth;
mod state;

pub use color::{color16to8, color565, color8to16, Color565};
pub use config::EngineConfig;
pub use diagnostics::{TextDiagnostics, TextFault};
pub use error::{GlyphError, NumberError};
pub use font::{
    FixedFont, FontFace, FontId, FontRegistry, GlyphMetric, OutlineFont, TableFont,
    FONT_SLOT_COUNT,
};
pub use glyph::{DecodedGlyph, FontFormat, GlyphSource, Run, Runs};
pub use layout::TextEngine;
pub use number::{format_float, format_integer, NumberText};
pub use render::{DisplaySurface, Paint};
pub use smooth::{SmoothFont, SmoothFontMetrics, SmoothGlyphMetrics};
pub use state::{
    ActiveOutline, Datum, HorizontalAlign, TextState, TextStyle, VerticalAnchor, MAX_TEXT_SIZE,
};
