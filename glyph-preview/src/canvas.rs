use core::convert::Infallible;
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, Size},
};

/// In-memory draw target that renders to text, one character per pixel.
///
/// Pixels are packed MSB-first, one bit each, with every row padded to a
/// whole byte. A set bit is [`BinaryColor::On`].
pub struct TextCanvas {
    size: Size,
    buffer: Box<[u8]>,
}

fn fill_byte(color: BinaryColor) -> u8 {
    if color.is_on() { 0xFF } else { 0x00 }
}

impl TextCanvas {
    #[must_use]
    pub fn new(size: Size, background: BinaryColor) -> Self {
        let len = size.width.div_ceil(8) as usize * size.height as usize;
        Self {
            size,
            buffer: vec![fill_byte(background); len].into_boxed_slice(),
        }
    }

    fn row_pitch_bytes(&self) -> usize {
        self.size.width.div_ceil(8) as usize
    }

    fn pixel(&self, x: u32, y: u32) -> BinaryColor {
        let index = y as usize * self.row_pitch_bytes() + (x / 8) as usize;
        let bit = 7 - (x % 8);
        BinaryColor::from(self.buffer[index] & (1 << bit) != 0)
    }

    /// Rows separated by `\n`, with `ink` for pixels in `ink_color` and
    /// `paper` for everything else.
    #[must_use]
    pub fn render(&self, ink: char, paper: char, ink_color: BinaryColor) -> String {
        (0..self.size.height)
            .map(|y| {
                (0..self.size.width)
                    .map(|x| if self.pixel(x, y) == ink_color { ink } else { paper })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DrawTarget for TextCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let Size { width, height } = self.size;
        let row_pitch_bytes = self.row_pitch_bytes();

        for Pixel(coord, color) in pixels {
            let (x, y) = coord.into();

            if x < 0 || x >= width.cast_signed() || y < 0 || y >= height.cast_signed() {
                continue;
            }

            let (x, y) = (x.cast_unsigned(), y.cast_unsigned());
            let index = y as usize * row_pitch_bytes + (x / 8) as usize;
            let bit = 7 - (x % 8);

            if color.is_on() {
                self.buffer[index] |= 1 << bit;
            } else {
                self.buffer[index] &= !(1 << bit);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.buffer.fill(fill_byte(color));
        Ok(())
    }
}

impl OriginDimensions for TextCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Point;

    #[test]
    fn starts_filled_with_background() {
        let canvas = TextCanvas::new(Size::new(3, 2), BinaryColor::Off);
        assert_eq!(canvas.render('#', '.', BinaryColor::On), "...\n...");
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut canvas = TextCanvas::new(Size::new(2, 2), BinaryColor::Off);
        canvas
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(2, 1), BinaryColor::On),
                Pixel(Point::new(0, 5), BinaryColor::On),
                Pixel(Point::new(1, 1), BinaryColor::On),
            ])
            .unwrap();

        assert_eq!(canvas.render('#', '.', BinaryColor::On), "..\n.#");
    }

    #[test]
    fn clear_overwrites_everything() {
        let mut canvas = TextCanvas::new(Size::new(2, 1), BinaryColor::Off);
        canvas
            .draw_iter([Pixel(Point::new(0, 0), BinaryColor::On)])
            .unwrap();
        canvas.clear(BinaryColor::On).unwrap();

        assert_eq!(canvas.render('#', '.', BinaryColor::Off), "..");
    }

    #[test]
    fn rows_wider_than_a_byte_keep_their_pixels_apart() {
        let mut canvas = TextCanvas::new(Size::new(11, 2), BinaryColor::Off);
        canvas
            .draw_iter([
                Pixel(Point::new(7, 0), BinaryColor::On),
                Pixel(Point::new(8, 0), BinaryColor::On),
                Pixel(Point::new(10, 1), BinaryColor::On),
                Pixel(Point::new(0, 1), BinaryColor::On),
                Pixel(Point::new(0, 1), BinaryColor::Off),
            ])
            .unwrap();

        assert_eq!(
            canvas.render('#', '.', BinaryColor::On),
            ".......##..\n..........#"
        );
    }
}
