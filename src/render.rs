/// Shared drawing helpers for the quiz screens
///
/// # Gradient background
///
/// Every screen starts with a vertical gradient, one horizontal line per scan
/// row, linearly interpolated from the top color to the bottom color:
///
/// ```text
/// ratio = row / height
/// c     = top * (1 - ratio) + bottom * ratio   (per channel, truncated)
/// ```
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Color of one scan row of the background gradient
pub fn gradient_color(top: Color, bottom: Color, row: u32, height: u32) -> Color {
    if height == 0 {
        return top;
    }
    let ratio = row as f32 / height as f32;
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - ratio) + b as f32 * ratio) as u8;
    Color::RGB(mix(top.r, bottom.r), mix(top.g, bottom.g), mix(top.b, bottom.b))
}

/// Fill the whole canvas with the vertical gradient
pub fn draw_gradient(canvas: &mut Canvas<Window>, top: Color, bottom: Color) -> Result<(), String> {
    let (width, height) = canvas.output_size()?;

    for row in 0..height {
        canvas.set_draw_color(gradient_color(top, bottom, row, height));
        canvas.draw_line(
            Point::new(0, row as i32),
            Point::new(width as i32, row as i32),
        )?;
    }

    Ok(())
}

/// Draw a texture stretched into `target`
pub fn draw_image(canvas: &mut Canvas<Window>, texture: &Texture, target: Rect) -> Result<(), String> {
    canvas.copy(texture, None, Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: Color = Color::RGB(10, 10, 20);
    const BOTTOM: Color = Color::RGB(30, 30, 40);

    #[test]
    fn test_gradient_starts_at_top_color() {
        assert_eq!(gradient_color(TOP, BOTTOM, 0, 1080), TOP);
    }

    #[test]
    fn test_gradient_midpoint() {
        assert_eq!(gradient_color(TOP, BOTTOM, 540, 1080), Color::RGB(20, 20, 30));
    }

    #[test]
    fn test_gradient_last_row_approaches_bottom() {
        let last = gradient_color(TOP, BOTTOM, 1079, 1080);
        assert!(last.r >= 29 && last.r <= 30);
        assert!(last.b >= 39 && last.b <= 40);
    }

    #[test]
    fn test_gradient_is_monotonic() {
        let mut previous = gradient_color(TOP, BOTTOM, 0, 720);
        for row in 1..720 {
            let color = gradient_color(TOP, BOTTOM, row, 720);
            assert!(color.r >= previous.r && color.b >= previous.b);
            previous = color;
        }
    }

    #[test]
    fn test_zero_height_gradient() {
        assert_eq!(gradient_color(TOP, BOTTOM, 0, 0), TOP);
    }
}
