use super::ScreenAssets;
use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::layout::{centered_rect, fraction_of};
use crate::render::{draw_gradient, draw_image};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Reference image at half screen size, countdown banner above it
pub fn render(
    canvas: &mut Canvas<Window>,
    assets: &ScreenAssets,
    config: &QuizConfig,
    image: &str,
    banner: &str,
) -> Result<(), QuizError> {
    let palette = &config.palette;
    let size = canvas.output_size()?;

    draw_gradient(canvas, palette.background_top, palette.background_bottom)?;

    let texture = assets.textures.get(image)?;
    let target = centered_rect(size, fraction_of(size, config.reference_fraction));
    draw_image(canvas, texture, target)?;

    assets.fonts.text.draw_centered(
        canvas,
        assets.texture_creator,
        banner,
        (size.0 as i32 / 2, config.header_y),
        palette.timer,
    )
}
