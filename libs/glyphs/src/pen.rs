use core::iter;
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Pixel, Point},
};

/// Pixel-setting primitive the glyph routines draw with.
///
/// Wraps a draw target together with the current draw colour, the same
/// way u8g pairs `drawPixel` with its colour index. The colour defaults
/// to [`BinaryColor::On`]; e-paper pages that draw dark ink on a light
/// background switch it to [`BinaryColor::Off`].
pub struct Pen<'a, D> {
    target: &'a mut D,
    color: BinaryColor,
}

impl<'a, D> Pen<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            color: BinaryColor::On,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: BinaryColor) -> Self {
        self.color = color;
        self
    }

    pub fn set_color(&mut self, color: BinaryColor) {
        self.color = color;
    }

    pub fn color(&self) -> BinaryColor {
        self.color
    }

    /// Set a single pixel in the current colour.
    pub fn draw_pixel(&mut self, x: i32, y: i32) -> Result<(), D::Error> {
        self.target
            .draw_iter(iter::once(Pixel(Point::new(x, y), self.color)))
    }

    /// Set every pixel in `offsets`, each relative to `(x, y)`, in one
    /// pass over the target. Pixels whose coordinates overflow `i32` are
    /// skipped.
    pub fn plot(&mut self, x: i32, y: i32, offsets: &[(i32, i32)]) -> Result<(), D::Error> {
        let color = self.color;
        self.target
            .draw_iter(offsets.iter().filter_map(|&(dx, dy)| {
                Some(Pixel(Point::new(x.checked_add(dx)?, y.checked_add(dy)?), color))
            }))
    }
}
