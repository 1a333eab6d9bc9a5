use super::ScreenAssets;
use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::render::draw_gradient;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Score line in the title font, dead center
pub fn render(
    canvas: &mut Canvas<Window>,
    assets: &ScreenAssets,
    config: &QuizConfig,
    text: &str,
) -> Result<(), QuizError> {
    let palette = &config.palette;
    let (width, height) = canvas.output_size()?;

    draw_gradient(canvas, palette.background_top, palette.background_bottom)?;

    assets.fonts.title.draw_centered(
        canvas,
        assets.texture_creator,
        text,
        (width as i32 / 2, height as i32 / 2),
        palette.text,
    )
}
