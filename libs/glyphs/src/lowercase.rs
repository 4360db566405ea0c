//! Draw routines for the Russian lowercase alphabet.
//!
//! Every routine takes the top-left corner of a 5 x 9 cell and sets only
//! the pixels of its letter. Offsets 3..=7 form the x-height band, 0..=2
//! hold ascenders and diacritics, 8 holds descenders. Pixels not part of
//! the letter are never written, so glyphs can be drawn over an existing
//! background.

use crate::pen::Pen;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};

/// `а`
///
/// ```text
/// .....
/// .....
/// .....
/// .###.
/// ....#
/// .####
/// #...#
/// .####
/// .....
/// ```
pub fn a<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 3), (2, 3), (3, 3), (4, 4), (1, 5), (2, 5), (3, 5), (4, 5), (0, 6), (4, 6), (1, 7),
            (2, 7), (3, 7), (4, 7),
        ],
    )
}

/// `б`
///
/// ```text
/// .....
/// ..###
/// .#...
/// #....
/// ####.
/// #...#
/// #...#
/// .###.
/// .....
/// ```
pub fn be<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (2, 1), (3, 1), (4, 1), (1, 2), (0, 3), (0, 4), (1, 4), (2, 4), (3, 4), (0, 5), (4, 5),
            (0, 6), (4, 6), (1, 7), (2, 7), (3, 7),
        ],
    )
}

/// `в`
///
/// ```text
/// .....
/// .....
/// .....
/// ####.
/// #...#
/// ####.
/// #...#
/// ####.
/// .....
/// ```
pub fn ve<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (0, 5), (1, 5), (2, 5), (3, 5), (0, 6),
            (4, 6), (0, 7), (1, 7), (2, 7), (3, 7),
        ],
    )
}

/// `г`
///
/// ```text
/// .....
/// .....
/// .....
/// #####
/// #....
/// #....
/// #....
/// #....
/// .....
/// ```
pub fn ghe<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (0, 4), (0, 5), (0, 6), (0, 7),
        ],
    )
}

/// `д`
///
/// ```text
/// .....
/// .....
/// .....
/// ..##.
/// .#.#.
/// .#.#.
/// #..#.
/// #####
/// #...#
/// ```
pub fn de<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (2, 3), (3, 3), (1, 4), (3, 4), (1, 5), (3, 5), (0, 6), (3, 6), (0, 7), (1, 7), (2, 7),
            (3, 7), (4, 7), (0, 8), (4, 8),
        ],
    )
}

/// `е`
///
/// ```text
/// .....
/// .....
/// .....
/// .###.
/// #...#
/// #####
/// #....
/// .###.
/// .....
/// ```
pub fn ie<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (0, 5), (1, 5), (2, 5), (3, 5), (4, 5), (0, 6),
            (1, 7), (2, 7), (3, 7),
        ],
    )
}

/// `ё`
///
/// ```text
/// .....
/// .#.#.
/// .....
/// .###.
/// #...#
/// #####
/// #....
/// .###.
/// .....
/// ```
pub fn io<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 1), (3, 1), (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (0, 5), (1, 5), (2, 5), (3, 5),
            (4, 5), (0, 6), (1, 7), (2, 7), (3, 7),
        ],
    )
}

/// `ж`
///
/// ```text
/// .....
/// .....
/// .....
/// #.#.#
/// #.#.#
/// .###.
/// #.#.#
/// #.#.#
/// .....
/// ```
pub fn zhe<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (2, 3), (4, 3), (0, 4), (2, 4), (4, 4), (1, 5), (2, 5), (3, 5), (0, 6), (2, 6),
            (4, 6), (0, 7), (2, 7), (4, 7),
        ],
    )
}

/// `з`
///
/// ```text
/// .....
/// .....
/// .....
/// .###.
/// #...#
/// ..##.
/// #...#
/// .###.
/// .....
/// ```
pub fn ze<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (2, 5), (3, 5), (0, 6), (4, 6), (1, 7), (2, 7),
            (3, 7),
        ],
    )
}

/// `и`
///
/// ```text
/// .....
/// .....
/// .....
/// #...#
/// #..##
/// #.#.#
/// ##..#
/// #...#
/// .....
/// ```
pub fn i<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (4, 3), (0, 4), (3, 4), (4, 4), (0, 5), (2, 5), (4, 5), (0, 6), (1, 6), (4, 6),
            (0, 7), (4, 7),
        ],
    )
}

/// `й`
///
/// ```text
/// .....
/// .###.
/// .....
/// #...#
/// #..##
/// #.#.#
/// ##..#
/// #...#
/// .....
/// ```
pub fn short_i<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 1), (2, 1), (3, 1), (0, 3), (4, 3), (0, 4), (3, 4), (4, 4), (0, 5), (2, 5), (4, 5),
            (0, 6), (1, 6), (4, 6), (0, 7), (4, 7),
        ],
    )
}

/// `к`
///
/// ```text
/// .....
/// .....
/// .....
/// #..#.
/// #.#..
/// ##...
/// #.#..
/// #..#.
/// .....
/// ```
pub fn ka<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (3, 3), (0, 4), (2, 4), (0, 5), (1, 5), (0, 6), (2, 6), (0, 7), (3, 7),
        ],
    )
}

/// `л`
///
/// ```text
/// .....
/// .....
/// .....
/// ..###
/// .#..#
/// .#..#
/// .#..#
/// #...#
/// .....
/// ```
pub fn el<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (2, 3), (3, 3), (4, 3), (1, 4), (4, 4), (1, 5), (4, 5), (1, 6), (4, 6), (0, 7), (4, 7),
        ],
    )
}

/// `м`
///
/// ```text
/// .....
/// .....
/// .....
/// #...#
/// ##.##
/// #.#.#
/// #...#
/// #...#
/// .....
/// ```
pub fn em<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (4, 3), (0, 4), (1, 4), (3, 4), (4, 4), (0, 5), (2, 5), (4, 5), (0, 6), (4, 6),
            (0, 7), (4, 7),
        ],
    )
}

/// `н`
///
/// ```text
/// .....
/// .....
/// .....
/// #...#
/// #...#
/// #####
/// #...#
/// #...#
/// .....
/// ```
pub fn en<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (4, 3), (0, 4), (4, 4), (0, 5), (1, 5), (2, 5), (3, 5), (4, 5), (0, 6), (4, 6),
            (0, 7), (4, 7),
        ],
    )
}

/// `о`
///
/// ```text
/// .....
/// .....
/// .....
/// .###.
/// #...#
/// #...#
/// #...#
/// .###.
/// .....
/// ```
pub fn o<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (0, 5), (4, 5), (0, 6), (4, 6), (1, 7), (2, 7),
            (3, 7),
        ],
    )
}

/// `п`
///
/// ```text
/// .....
/// .....
/// .....
/// #####
/// #...#
/// #...#
/// #...#
/// #...#
/// .....
/// ```
pub fn pe<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (0, 4), (4, 4), (0, 5), (4, 5), (0, 6), (4, 6),
            (0, 7), (4, 7),
        ],
    )
}

/// `р`
///
/// ```text
/// .....
/// .....
/// .....
/// ####.
/// #...#
/// #...#
/// ####.
/// #....
/// #....
/// ```
pub fn er<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (0, 5), (4, 5), (0, 6), (1, 6), (2, 6),
            (3, 6), (0, 7), (0, 8),
        ],
    )
}

/// `с`
///
/// ```text
/// .....
/// .....
/// .....
/// .###.
/// #...#
/// #....
/// #...#
/// .###.
/// .....
/// ```
pub fn es<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (0, 5), (0, 6), (4, 6), (1, 7), (2, 7), (3, 7),
        ],
    )
}

/// `т`
///
/// ```text
/// .....
/// .....
/// .....
/// #####
/// ..#..
/// ..#..
/// ..#..
/// ..#..
/// .....
/// ```
pub fn te<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (2, 4), (2, 5), (2, 6), (2, 7),
        ],
    )
}

/// `у`
///
/// ```text
/// .....
/// .....
/// .....
/// #...#
/// #...#
/// #...#
/// .####
/// ....#
/// .###.
/// ```
pub fn u<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (4, 3), (0, 4), (4, 4), (0, 5), (4, 5), (1, 6), (2, 6), (3, 6), (4, 6), (4, 7),
            (1, 8), (2, 8), (3, 8),
        ],
    )
}

/// `ф`
///
/// ```text
/// .....
/// .....
/// ..#..
/// .###.
/// #.#.#
/// #.#.#
/// #.#.#
/// .###.
/// ..#..
/// ```
pub fn ef<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (2, 2), (1, 3), (2, 3), (3, 3), (0, 4), (2, 4), (4, 4), (0, 5), (2, 5), (4, 5), (0, 6),
            (2, 6), (4, 6), (1, 7), (2, 7), (3, 7), (2, 8),
        ],
    )
}

/// `х`
///
/// ```text
/// .....
/// .....
/// .....
/// #...#
/// .#.#.
/// ..#..
/// .#.#.
/// #...#
/// .....
/// ```
pub fn ha<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (4, 3), (1, 4), (3, 4), (2, 5), (1, 6), (3, 6), (0, 7), (4, 7),
        ],
    )
}

/// `ц`
///
/// ```text
/// .....
/// .....
/// .....
/// #..#.
/// #..#.
/// #..#.
/// #..#.
/// #####
/// ....#
/// ```
pub fn tse<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (3, 3), (0, 4), (3, 4), (0, 5), (3, 5), (0, 6), (3, 6), (0, 7), (1, 7), (2, 7),
            (3, 7), (4, 7), (4, 8),
        ],
    )
}

/// `ч`
///
/// ```text
/// .....
/// .....
/// .....
/// #...#
/// #...#
/// .####
/// ....#
/// ....#
/// .....
/// ```
pub fn che<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (4, 3), (0, 4), (4, 4), (1, 5), (2, 5), (3, 5), (4, 5), (4, 6), (4, 7),
        ],
    )
}

/// `ш`
///
/// ```text
/// .....
/// .....
/// .....
/// #.#.#
/// #.#.#
/// #.#.#
/// #.#.#
/// #####
/// .....
/// ```
pub fn sha<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (2, 3), (4, 3), (0, 4), (2, 4), (4, 4), (0, 5), (2, 5), (4, 5), (0, 6), (2, 6),
            (4, 6), (0, 7), (1, 7), (2, 7), (3, 7), (4, 7),
        ],
    )
}

/// `щ`
///
/// ```text
/// .....
/// .....
/// .....
/// #.#.#
/// #.#.#
/// #.#.#
/// #.#.#
/// #####
/// ....#
/// ```
pub fn shcha<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (2, 3), (4, 3), (0, 4), (2, 4), (4, 4), (0, 5), (2, 5), (4, 5), (0, 6), (2, 6),
            (4, 6), (0, 7), (1, 7), (2, 7), (3, 7), (4, 7), (4, 8),
        ],
    )
}

/// `ъ`
///
/// ```text
/// .....
/// .....
/// .....
/// ##...
/// .#...
/// .###.
/// .#..#
/// .###.
/// .....
/// ```
pub fn hard_sign<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (1, 3), (1, 4), (1, 5), (2, 5), (3, 5), (1, 6), (4, 6), (1, 7), (2, 7), (3, 7),
        ],
    )
}

/// `ы`
///
/// ```text
/// .....
/// .....
/// .....
/// #...#
/// #...#
/// ###.#
/// #.#.#
/// ###.#
/// .....
/// ```
pub fn yeru<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (4, 3), (0, 4), (4, 4), (0, 5), (1, 5), (2, 5), (4, 5), (0, 6), (2, 6), (4, 6),
            (0, 7), (1, 7), (2, 7), (4, 7),
        ],
    )
}

/// `ь`
///
/// ```text
/// .....
/// .....
/// .....
/// #....
/// #....
/// ####.
/// #...#
/// ####.
/// .....
/// ```
pub fn soft_sign<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (0, 4), (0, 5), (1, 5), (2, 5), (3, 5), (0, 6), (4, 6), (0, 7), (1, 7), (2, 7),
            (3, 7),
        ],
    )
}

/// `э`
///
/// ```text
/// .....
/// .....
/// .....
/// .###.
/// #...#
/// ..###
/// #...#
/// .###.
/// .....
/// ```
pub fn e<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (2, 5), (3, 5), (4, 5), (0, 6), (4, 6), (1, 7),
            (2, 7), (3, 7),
        ],
    )
}

/// `ю`
///
/// ```text
/// .....
/// .....
/// .....
/// #..#.
/// #.#.#
/// ###.#
/// #.#.#
/// #..#.
/// .....
/// ```
pub fn yu<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (0, 3), (3, 3), (0, 4), (2, 4), (4, 4), (0, 5), (1, 5), (2, 5), (4, 5), (0, 6), (2, 6),
            (4, 6), (0, 7), (3, 7),
        ],
    )
}

/// `я`
///
/// ```text
/// .....
/// .....
/// .....
/// .####
/// #...#
/// .####
/// ..#.#
/// #...#
/// .....
/// ```
pub fn ya<D>(pen: &mut Pen<'_, D>, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pen.plot(
        x,
        y,
        &[
            (1, 3), (2, 3), (3, 3), (4, 3), (0, 4), (4, 4), (1, 5), (2, 5), (3, 5), (4, 5), (2, 6),
            (4, 6), (0, 7), (4, 7),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{mock_display::MockDisplay, prelude::Point};

    #[test]
    fn che_matches_reference_bitmap() {
        let mut display = MockDisplay::new();
        che(&mut Pen::new(&mut display), 0, 0).unwrap();

        display.assert_pattern(&[
            "     ", //
            "     ",
            "     ",
            "#   #",
            "#   #",
            " ####",
            "    #",
            "    #",
        ]);
    }

    #[test]
    fn che_is_drawn_relative_to_origin() {
        let mut display = MockDisplay::new();
        che(&mut Pen::new(&mut display), 3, 2).unwrap();

        display.assert_pattern(&[
            "        ", //
            "        ",
            "        ",
            "        ",
            "        ",
            "   #   #",
            "   #   #",
            "    ####",
            "       #",
            "       #",
        ]);
    }

    #[test]
    fn te_has_full_width_bar() {
        let mut display = MockDisplay::new();
        te(&mut Pen::new(&mut display), 0, 0).unwrap();

        display.assert_pattern(&[
            "     ", //
            "     ",
            "     ",
            "#####",
            "  #  ",
            "  #  ",
            "  #  ",
            "  #  ",
        ]);
    }

    #[test]
    fn shcha_descends_into_last_row() {
        let mut display = MockDisplay::new();
        shcha(&mut Pen::new(&mut display), 0, 0).unwrap();

        display.assert_pattern(&[
            "     ", //
            "     ",
            "     ",
            "# # #",
            "# # #",
            "# # #",
            "# # #",
            "#####",
            "    #",
        ]);
    }

    #[test]
    fn io_is_ie_with_diaeresis() {
        let mut plain = MockDisplay::new();
        ie(&mut Pen::new(&mut plain), 0, 0).unwrap();

        let mut dotted = MockDisplay::new();
        io(&mut Pen::new(&mut dotted), 0, 0).unwrap();

        dotted.assert_pattern(&[
            "     ", //
            " # # ",
            "     ",
            " ### ",
            "#   #",
            "#####",
            "#    ",
            " ### ",
        ]);
        for y in 3..9 {
            for x in 0..5 {
                let p = Point::new(x, y);
                assert_eq!(plain.get_pixel(p), dotted.get_pixel(p), "pixel {p:?}");
            }
        }
    }

    #[test]
    fn off_color_is_used_for_ink() {
        let mut display = MockDisplay::new();
        o(&mut Pen::new(&mut display).with_color(BinaryColor::Off), 0, 0).unwrap();

        display.assert_pattern(&[
            "     ", //
            "     ",
            "     ",
            " ... ",
            ".   .",
            ".   .",
            ".   .",
            " ... ",
        ]);
    }

    #[test]
    fn background_pixels_are_left_untouched() {
        let mut display = MockDisplay::new();
        display.set_pixel(Point::new(2, 4), Some(BinaryColor::Off));

        che(&mut Pen::new(&mut display), 0, 0).unwrap();

        assert_eq!(display.get_pixel(Point::new(2, 4)), Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(2, 5)), Some(BinaryColor::On));
    }
}
