use crate::error::QuizError;
use log::{debug, info};
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;

/// Load one image file as a texture
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, QuizError> {
    texture_creator
        .load_texture(path)
        .map_err(|e| QuizError::asset(path, e))
}

/// Every image the session shows, keyed by file name
///
/// Loaded once at startup; a missing or unreadable file is fatal there rather
/// than halfway through the questions.
pub struct TextureCache<'a> {
    textures: HashMap<String, Texture<'a>>,
}

impl<'a> TextureCache<'a> {
    pub fn load<'n>(
        texture_creator: &'a TextureCreator<WindowContext>,
        names: impl IntoIterator<Item = &'n str>,
    ) -> Result<Self, QuizError> {
        let mut textures: HashMap<String, Texture<'a>> = HashMap::new();
        for name in names {
            if textures.contains_key(name) {
                continue;
            }
            let texture = load_texture(texture_creator, name)?;
            debug!("Loaded image {}", name);
            textures.insert(name.to_string(), texture);
        }
        info!("Loaded {} images", textures.len());
        Ok(TextureCache { textures })
    }

    pub fn get(&self, name: &str) -> Result<&Texture<'a>, QuizError> {
        self.textures
            .get(name)
            .ok_or_else(|| QuizError::asset(name, "image was not preloaded"))
    }
}
