//! Quiz Screens
//!
//! One module per screen. Each exposes a `render` function that draws a full
//! frame from the current stage state; none of them hold state of their own.
//!
//! - [`memorize_screen`] - reference image with the countdown banner
//! - [`question_screen`] - prompt and choice grid with hover enlargement
//! - [`summary_screen`] - final score line

pub mod memorize_screen;
pub mod question_screen;
pub mod summary_screen;

use crate::assets::TextureCache;
use crate::text::Fonts;
use sdl2::render::TextureCreator;
use sdl2::video::WindowContext;

/// Everything loaded at startup that the screens draw with
pub struct ScreenAssets<'a> {
    pub textures: TextureCache<'a>,
    pub fonts: Fonts<'a>,
    /// Needed to turn rendered TrueType text into textures each frame
    pub texture_creator: &'a TextureCreator<WindowContext>,
}
