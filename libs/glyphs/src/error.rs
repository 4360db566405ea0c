use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GlyphError<E> {
    #[error("No glyph for character {0:?}")]
    Unsupported(char),
    #[error("Display error: {0:?}")]
    Display(E),
}

pub type GlyphResult<T, E> = Result<T, GlyphError<E>>;
