//! Russian lowercase glyphs for monochrome displays.
//!
//! Each letter has its own routine in [`lowercase`] that sets a fixed set of
//! pixels inside a [`GLYPH_WIDTH`] x [`GLYPH_HEIGHT`] cell. [`draw_char`]
//! picks the routine for a `char`.

pub mod error;
pub mod lowercase;
pub mod pen;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};

pub use error::{GlyphError, GlyphResult};
pub use pen::Pen;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 9;

/// Every letter with a routine in [`lowercase`], in alphabetical order.
pub const LOWERCASE: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Returns true if [`draw_char`] can draw `c`.
pub fn is_supported(c: char) -> bool {
    c == ' ' || LOWERCASE.contains(c)
}

/// Draw `c` with its top-left corner at `(x, y)`.
///
/// A space sets no pixels. Characters without a routine are rejected
/// before anything is drawn.
pub fn draw_char<D>(pen: &mut Pen<'_, D>, x: i32, y: i32, c: char) -> GlyphResult<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let drawn = match c {
        ' ' => Ok(()),
        'а' => lowercase::a(pen, x, y),
        'б' => lowercase::be(pen, x, y),
        'в' => lowercase::ve(pen, x, y),
        'г' => lowercase::ghe(pen, x, y),
        'д' => lowercase::de(pen, x, y),
        'е' => lowercase::ie(pen, x, y),
        'ё' => lowercase::io(pen, x, y),
        'ж' => lowercase::zhe(pen, x, y),
        'з' => lowercase::ze(pen, x, y),
        'и' => lowercase::i(pen, x, y),
        'й' => lowercase::short_i(pen, x, y),
        'к' => lowercase::ka(pen, x, y),
        'л' => lowercase::el(pen, x, y),
        'м' => lowercase::em(pen, x, y),
        'н' => lowercase::en(pen, x, y),
        'о' => lowercase::o(pen, x, y),
        'п' => lowercase::pe(pen, x, y),
        'р' => lowercase::er(pen, x, y),
        'с' => lowercase::es(pen, x, y),
        'т' => lowercase::te(pen, x, y),
        'у' => lowercase::u(pen, x, y),
        'ф' => lowercase::ef(pen, x, y),
        'х' => lowercase::ha(pen, x, y),
        'ц' => lowercase::tse(pen, x, y),
        'ч' => lowercase::che(pen, x, y),
        'ш' => lowercase::sha(pen, x, y),
        'щ' => lowercase::shcha(pen, x, y),
        'ъ' => lowercase::hard_sign(pen, x, y),
        'ы' => lowercase::yeru(pen, x, y),
        'ь' => lowercase::soft_sign(pen, x, y),
        'э' => lowercase::e(pen, x, y),
        'ю' => lowercase::yu(pen, x, y),
        'я' => lowercase::ya(pen, x, y),
        _ => {
            log::debug!("No glyph for {c:?}");
            return Err(GlyphError::Unsupported(c));
        }
    };
    log::trace!("Drew {c:?} at ({x}, {y})");
    drawn.map_err(GlyphError::Display)
}
