//! Scaled blitting of glyph runs through the three display primitives.

use crate::color::Color565;
use crate::glyph::Run;

/// Drawing primitives supplied by the panel driver.
///
/// Implementations must silently ignore any part of a primitive that falls
/// outside the panel; the engine passes coordinates through unclipped.
pub trait DisplaySurface {
    type Error;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color565) -> Result<(), Self::Error>;

    fn draw_fast_hline(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        color: Color565,
    ) -> Result<(), Self::Error>;

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), Self::Error>;
}

impl<S> DisplaySurface for &mut S
where
    S: DisplaySurface + ?Sized,
{
    type Error = S::Error;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color565) -> Result<(), Self::Error> {
        (**self).draw_pixel(x, y, color)
    }

    fn draw_fast_hline(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        color: Color565,
    ) -> Result<(), Self::Error> {
        (**self).draw_fast_hline(x, y, length, color)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), Self::Error> {
        (**self).fill_rect(x, y, width, height, color)
    }
}

/// Colours and scale for one blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    /// Integer size multiplier, at least 1.
    pub size: u8,
    pub foreground: Color565,
    pub background: Color565,
    /// Paint background runs. Ignored when foreground equals background,
    /// which is how transparent text is requested.
    pub fill_background: bool,
}

impl Paint {
    fn paints_background(&self) -> bool {
        self.fill_background && self.foreground != self.background
    }
}

/// Whether a `width` x `height` box at (`x`, `y`) misses a
/// `surface_width` x `surface_height` surface entirely.
pub fn is_off_surface(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    surface_width: i32,
    surface_height: i32,
) -> bool {
    x >= surface_width
        || y >= surface_height
        || x.saturating_add(width) <= 0
        || y.saturating_add(height) <= 0
}

/// Draw `runs` covering a `width` x `height` glyph with its top-left unit
/// pixel at (`origin_x`, `origin_y`).
///
/// Runs are split at row ends. At size 1 a run becomes one pixel or one
/// horizontal line; at larger sizes one `size`-tall rectangle. Runs beyond
/// the last row are ignored.
pub fn blit<S, I>(
    surface: &mut S,
    origin_x: i32,
    origin_y: i32,
    width: u16,
    height: u16,
    runs: I,
    paint: Paint,
) -> Result<(), S::Error>
where
    S: DisplaySurface + ?Sized,
    I: IntoIterator<Item = Run>,
{
    let width = i32::from(width);
    let height = i32::from(height);
    if width == 0 || height == 0 {
        return Ok(());
    }
    let size = i32::from(paint.size.max(1));
    let paints_background = paint.paints_background();

    let mut column = 0i32;
    let mut row = 0i32;
    for run in runs {
        let mut remaining = i32::from(run.length);
        while remaining > 0 && row < height {
            let span = remaining.min(width - column);
            let color = if run.foreground {
                Some(paint.foreground)
            } else if paints_background {
                Some(paint.background)
            } else {
                None
            };
            if let Some(color) = color {
                let x = origin_x + column * size;
                let y = origin_y + row * size;
                if size == 1 {
                    if span == 1 {
                        surface.draw_pixel(x, y, color)?;
                    } else {
                        surface.draw_fast_hline(x, y, span, color)?;
                    }
                } else {
                    surface.fill_rect(x, y, span * size, size, color)?;
                }
            }
            column += span;
            remaining -= span;
            if column >= width {
                column = 0;
                row += 1;
            }
        }
        if row >= height {
            break;
        }
    }
    Ok(())
}
