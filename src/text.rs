//! Text Rendering
//!
//! Text goes through a [`TextFace`]: a TrueType font when one could be opened,
//! otherwise the built-in 5x7 bitmap font drawn with SDL2 rectangles. Losing
//! the font file never stops the quiz, it only changes how text looks.
//!
//! The bitmap font only knows uppercase ASCII letters, digits and a little
//! punctuation. Accented Latin letters are folded to their base letter so
//! Spanish prompts stay readable.

use crate::config::QuizConfig;
use crate::error::QuizError;
use log::{debug, warn};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

/// Map accented letters onto the glyph the bitmap font has for them
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'Á' | 'À' | 'Â' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' | 'Ñ' => 'N',
        'ç' | 'Ç' => 'C',
        other => other.to_ascii_uppercase(),
    }
}

/// 5x7 pattern for a character (1 = pixel on), `None` if the font lacks it
fn glyph(c: char) -> Option<&'static [u8; 7]> {
    let pattern: &[u8; 7] = match fold_char(c) {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '\'' => &[0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '¡' => &[0b00100, 0b00000, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        '?' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '¿' => &[0b00100, 0b00000, 0b00100, 0b01000, 0b10000, 0b10001, 0b01110],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(pattern)
}

/// Full block drawn for characters the bitmap font doesn't have
const MISSING_GLYPH: [u8; 7] = [0b11111; 7];

/// Pixel size of `text` in the bitmap font at `scale`
///
/// Each glyph is 5 pixels plus 1 spacing column; the trailing spacing is not
/// counted so centering is exact.
pub fn bitmap_text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return (0, 0);
    }
    (chars * 6 * scale - scale, 7 * scale)
}

/// Bitmap scale that roughly matches a TrueType point size
pub fn bitmap_scale_for(point_size: u16) -> u32 {
    (point_size as u32 / 10).max(1)
}

/// Renders bitmap text with its top-left corner at (x, y)
pub fn draw_bitmap_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let char_width = (6 * scale) as i32;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * char_width;
        let pattern = glyph(c).unwrap_or(&MISSING_GLYPH);

        for (row, &pattern_row) in pattern.iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + col * pixel_size,
                        y + row as i32 * pixel_size,
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// A font for one text role
pub enum TextFace<'a> {
    TrueType(Font<'a, 'static>),
    Bitmap { scale: u32 },
}

impl<'a> TextFace<'a> {
    /// Open `path` at `point_size`, or fall back to the bitmap font
    pub fn load(ttf: Option<&'a Sdl2TtfContext>, path: &str, point_size: u16) -> Self {
        let fallback = TextFace::Bitmap {
            scale: bitmap_scale_for(point_size),
        };
        let Some(ttf) = ttf else {
            return fallback;
        };

        match ttf.load_font(path, point_size) {
            Ok(font) => {
                debug!("Loaded font {} at {}pt", path, point_size);
                TextFace::TrueType(font)
            }
            Err(e) => {
                warn!("Font {} unavailable ({}), using built-in bitmap font", path, e);
                fallback
            }
        }
    }

    /// Draw `text` centered on `center`
    pub fn draw_centered(
        &self,
        canvas: &mut Canvas<Window>,
        texture_creator: &TextureCreator<WindowContext>,
        text: &str,
        center: (i32, i32),
        color: Color,
    ) -> Result<(), QuizError> {
        if text.is_empty() {
            return Ok(());
        }

        match self {
            TextFace::TrueType(font) => {
                let surface = font
                    .render(text)
                    .blended(color)
                    .map_err(|e| QuizError::Render(e.to_string()))?;
                let texture = texture_creator
                    .create_texture_from_surface(&surface)
                    .map_err(|e| QuizError::Render(e.to_string()))?;
                let target = Rect::from_center(center, surface.width(), surface.height());
                canvas.copy(&texture, None, Some(target))?;
            }
            TextFace::Bitmap { scale } => {
                let (width, height) = bitmap_text_size(text, *scale);
                let top_left = Rect::from_center(center, width, height).top_left();
                draw_bitmap_text(canvas, text, top_left.x(), top_left.y(), color, *scale)?;
            }
        }

        Ok(())
    }
}

/// One face per text role
pub struct Fonts<'a> {
    pub title: TextFace<'a>,
    pub text: TextFace<'a>,
}

impl<'a> Fonts<'a> {
    pub fn load(ttf: Option<&'a Sdl2TtfContext>, config: &QuizConfig) -> Self {
        let sizes = config.font_sizes;
        Fonts {
            title: TextFace::load(ttf, &config.font_path, sizes.title),
            text: TextFace::load(ttf, &config.font_path, sizes.text),
        }
    }
}
