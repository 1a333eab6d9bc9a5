use super::ScreenAssets;
use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::layout::scaled_about_center;
use crate::render::{draw_gradient, draw_image};
use crate::stage::SelectStage;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Prompt on top, choices in their grid cells
///
/// The hovered choice is drawn enlarged around its cell's center. Hit-testing
/// always uses the unscaled cells.
pub fn render(
    canvas: &mut Canvas<Window>,
    assets: &ScreenAssets,
    config: &QuizConfig,
    prompt: &str,
    stage: &SelectStage,
) -> Result<(), QuizError> {
    let palette = &config.palette;
    let (width, _) = canvas.output_size()?;

    draw_gradient(canvas, palette.background_top, palette.background_bottom)?;

    assets.fonts.text.draw_centered(
        canvas,
        assets.texture_creator,
        prompt,
        (width as i32 / 2, config.header_y),
        palette.text,
    )?;

    let hovered = stage.hovered();
    for (index, (cell, choice)) in stage.grid().cells().iter().zip(stage.choices()).enumerate() {
        let target = if hovered == Some(index) {
            scaled_about_center(*cell, config.hover_scale)
        } else {
            *cell
        };
        draw_image(canvas, assets.textures.get(choice)?, target)?;
    }

    Ok(())
}
