use anyhow::{Context, Result, bail};
use clap::Parser;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::Size};
use russian_glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, LOWERCASE, Pen, draw_char, is_supported};

use canvas::TextCanvas;

mod canvas;

/// Horizontal distance between cell origins in the preview strip
const PITCH: u32 = GLYPH_WIDTH + 1;

/// Print Russian lowercase glyphs to the terminal
#[derive(Parser, Debug)]
#[command(name = "glyph-preview")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Letters to draw (defaults to the whole alphabet)
    text: Option<String>,

    /// Character printed for inked pixels
    #[arg(long, default_value_t = '#')]
    ink: char,

    /// Character printed for background pixels
    #[arg(long, default_value_t = '.')]
    paper: char,

    /// Draw dark ink on a light background, as on the e-paper display
    #[arg(long)]
    invert: bool,

    /// Print the supported letters and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.list {
        println!("{LOWERCASE}");
        return Ok(());
    }

    let text = cli.text.as_deref().unwrap_or(LOWERCASE);
    let preview = render_preview(text, cli.invert, cli.ink, cli.paper)?;
    println!("{preview}");
    Ok(())
}

fn render_preview(text: &str, invert: bool, ink: char, paper: char) -> Result<String> {
    if let Some(c) = text.chars().find(|&c| !is_supported(c)) {
        bail!("No glyph for {c:?}; supported letters: {LOWERCASE}");
    }

    let count = u32::try_from(text.chars().count()).context("Too many letters to preview")?;
    if count == 0 {
        bail!("Nothing to draw");
    }
    log::info!("Rendering {count} glyph(s)");

    let (background, ink_color) = if invert {
        (BinaryColor::On, BinaryColor::Off)
    } else {
        (BinaryColor::Off, BinaryColor::On)
    };

    let mut canvas = TextCanvas::new(Size::new(strip_width(count)?, GLYPH_HEIGHT), background);
    {
        let mut pen = Pen::new(&mut canvas).with_color(ink_color);
        for (i, c) in (0..count).zip(text.chars()) {
            // strip_width bounds count * PITCH by i32::MAX + 1
            let x = (i * PITCH).cast_signed();
            draw_char(&mut pen, x, 0, c).with_context(|| format!("Failed to draw {c:?}"))?;
        }
    }

    Ok(canvas.render(ink, paper, ink_color))
}

/// Width of a strip of `count` cells, or an error if any cell origin would
/// not fit an `i32` coordinate.
fn strip_width(count: u32) -> Result<u32> {
    count
        .checked_mul(PITCH)
        .and_then(|w| w.checked_sub(1))
        .filter(|&w| i32::try_from(w).is_ok())
        .context("Too many letters to preview")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHE: &str = "\
.....
.....
.....
#...#
#...#
.####
....#
....#
.....";

    #[test]
    fn renders_single_letter() {
        assert_eq!(render_preview("ч", false, '#', '.').unwrap(), CHE);
    }

    #[test]
    fn invert_keeps_the_same_picture() {
        assert_eq!(render_preview("ч", true, '#', '.').unwrap(), CHE);
    }

    #[test]
    fn letters_are_separated_by_one_column() {
        let preview = render_preview("тч", false, 'x', ' ').unwrap();
        let rows: Vec<&str> = preview.lines().collect();

        assert_eq!(rows.len(), GLYPH_HEIGHT as usize);
        assert_eq!(rows[3], "xxxxx x   x");
        assert_eq!(rows[7], "  x       x");
    }

    #[test]
    fn space_leaves_an_empty_cell() {
        let preview = render_preview(" ч", false, '#', '.').unwrap();
        assert_eq!(preview.lines().nth(3), Some("......#...#"));
    }

    #[test]
    fn unsupported_letter_is_reported() {
        let err = render_preview("чQ", false, '#', '.').unwrap_err();
        assert!(err.to_string().contains("'Q'"), "{err}");
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(render_preview("", false, '#', '.').is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["glyph-preview"]).unwrap();
        assert!(cli.text.is_none());
        assert_eq!((cli.ink, cli.paper), ('#', '.'));
        assert!(!cli.invert && !cli.list);
    }

    #[test]
    fn strip_width_includes_gaps_between_cells() {
        assert_eq!(strip_width(1).unwrap(), GLYPH_WIDTH);
        assert_eq!(strip_width(3).unwrap(), 3 * PITCH - 1);
    }

    #[test]
    fn strip_width_rejects_counts_past_i32_range() {
        let last_fitting = (i32::MAX.cast_unsigned() + 1) / PITCH;

        assert!(strip_width(last_fitting).is_ok());
        assert!(strip_width(last_fitting + 1).is_err());
        assert!(strip_width(u32::MAX).is_err());
    }
}
