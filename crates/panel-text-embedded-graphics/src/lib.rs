//! embedded-graphics display surface for `panel-text`.

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

use core::iter;

use embedded_graphics::{
    pixelcolor::{BinaryColor, Rgb565},
    prelude::*,
    primitives::Rectangle,
};
use panel_text::{Color565, DisplaySurface, EngineConfig, FontRegistry, TextEngine};

/// Luma at or above which a colour maps to [`BinaryColor::On`].
const BINARY_LUMA_THRESHOLD: u32 = 128;

/// Target colour types that text colours can be mapped into.
pub trait FromColor565: PixelColor {
    fn from_color565(color: Color565) -> Self;
}

impl FromColor565 for Rgb565 {
    fn from_color565(color: Color565) -> Self {
        Rgb565::new(color.r5(), color.g6(), color.b5())
    }
}

/// Bright colours are ink (`On`), dark colours are paper (`Off`).
impl FromColor565 for BinaryColor {
    fn from_color565(color: Color565) -> Self {
        let r = u32::from(color.r5()) << 3;
        let g = u32::from(color.g6()) << 2;
        let b = u32::from(color.b5()) << 3;
        let luma = (299 * r + 587 * g + 114 * b) / 1000;
        if luma >= BINARY_LUMA_THRESHOLD {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }
}

/// [`DisplaySurface`] over an embedded-graphics draw target.
///
/// Every primitive is clipped to the target's bounding box, so text that
/// runs off the panel is cut rather than passed on to the driver.
#[derive(Debug)]
pub struct EgSurface<'d, D> {
    target: &'d mut D,
}

impl<'d, D> EgSurface<'d, D>
where
    D: DrawTarget,
    D::Color: FromColor565,
{
    pub fn new(target: &'d mut D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &*self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut *self.target
    }
}

impl<D> DisplaySurface for EgSurface<'_, D>
where
    D: DrawTarget,
    D::Color: FromColor565,
{
    type Error = D::Error;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color565) -> Result<(), D::Error> {
        let point = Point::new(x, y);
        if !self.target.bounding_box().contains(point) {
            return Ok(());
        }
        self.target
            .draw_iter(iter::once(Pixel(point, D::Color::from_color565(color))))
    }

    fn draw_fast_hline(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        color: Color565,
    ) -> Result<(), D::Error> {
        self.fill_rect(x, y, length, 1, color)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), D::Error> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        let area = Rectangle::new(
            Point::new(x, y),
            Size::new(width.unsigned_abs(), height.unsigned_abs()),
        )
        .intersection(&self.target.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        self.target
            .fill_solid(&area, D::Color::from_color565(color))
    }
}

/// Engine sized to `target` with the default text style.
pub fn engine_for_target<'a, D>(target: &D, fonts: FontRegistry<'a>) -> TextEngine<'a>
where
    D: Dimensions,
{
    let size = target.bounding_box().size;
    let width = clamp_dimension(size.width);
    let height = clamp_dimension(size.height);
    TextEngine::new(EngineConfig::for_display(width, height), fonts)
}

fn clamp_dimension(value: u32) -> u16 {
    u16::try_from(value).unwrap_or_else(|_| {
        log::debug!("target dimension {} clamped to {}", value, u16::MAX);
        u16::MAX
    })
}
